//! Error handling for the confit application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error types for confit operations.
///
/// This enum represents all possible errors that can occur while preparing
/// configuration files. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum ConfitError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents command-line input that is invalid beyond what the parser
    /// can reject (nonexistent base directory, nonexistent manifest path)
    #[error("Invalid argument: {0}.")]
    InvalidArgumentError(String),

    /// Represents a template or destination file that cannot be accessed
    #[error("File access error for '{path}': {source}.")]
    FileAccessError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors in the manifest describing the template sets
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

impl ConfitError {
    /// Wraps an `io::Error` with the path it occurred on.
    pub fn file_access<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        ConfitError::FileAccessError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with ConfitError as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type ConfitResult<T> = Result<T, ConfitError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The ConfitError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: ConfitError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
