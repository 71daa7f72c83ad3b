//! Utility functions for error handling
//!
//! Path checks that turn a missing or unreadable dataset into a descriptive
//! load-time fault.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    validate_file(path, purpose)?;

    fs::File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        DashboardError::io(path, io::Error::new(e.kind(), message))
    })
}

/// Check that a path exists and is a regular file
pub fn validate_file(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found, needed for: {purpose}"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path is not a file, expected a file for: {purpose}"),
            ),
        ));
    }

    Ok(())
}
