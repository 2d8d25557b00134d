//! Domain errors.
//!
//! Filesystem and CSV failures travel as `anyhow::Error` with context attached.
//! The variants here cover roster and filename shapes the pipeline cannot work
//! with. All of them are fatal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixError {
    /// A scanned filename or a roster image cell has no `.` to split on.
    #[error("malformed filename '{0}': missing extension separator")]
    MalformedName(String),

    /// Row 1 is absent or has no cell 1, so there is no image directory to scan.
    #[error("roster has no image directory in row 1, column 1")]
    MissingImageDir,

    /// The image directory named by the roster exists but is not a directory.
    #[error("image directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A data row is too short to hold an image reference in cell 2.
    #[error("roster row {0} has no image column")]
    MissingImageColumn(usize),
}
