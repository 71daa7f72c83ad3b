//! Aggregation core of a museum acquisitions dashboard.
//!
//! Loads a static table of acquired artworks and turns it into chart-ready
//! summary tables: distributions, per-year trends, a department sunburst and
//! a painting-technique donut. A country selection recomputes the headline
//! statistics, the sunburst and the donut; everything else is computed once.

pub mod algorithm;
pub mod async_io;
pub mod cli;
pub mod collections;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod render;
pub mod schema;
pub mod utils;

// Core types
pub use collections::ArtworkCollection;
pub use config::{DashboardConfig, GroupMethod, LoaderConfig};
pub use error::{DashboardError, Result};
pub use models::{ArtworkRecord, Gender, Technique};

// Filtering
pub use filter::{ArtworkFilter, CountrySelection, FilterCriteria};

// Dashboard
pub use dashboard::{Dashboard, DashboardSession, FilteredOutputs, StaticCharts};
pub use render::ChartSpec;

// Loading
pub use async_io::{load_dataset_async, load_dataset_dir_async, load_dataset_files_async};
pub use loader::{load_dataset, load_dataset_files_parallel};
