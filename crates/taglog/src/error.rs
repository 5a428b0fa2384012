//! Logger error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring the logger
///
/// Logging calls themselves never fail; only initialization and
/// configuration loading return errors.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured log path exists but is not a regular file
    #[error("log path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("configuration error: {0}")]
    Parse(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
