//! Shared utilities: logging helpers and test fixtures.

pub mod logging;
