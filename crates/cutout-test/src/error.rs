//! Error types for cutout-test

use thiserror::Error;

/// Errors that can occur in the regression framework
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image {path}: {message}")]
    ImageWrite { path: String, message: String },

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the regression framework
pub type TestResult<T> = Result<T, TestError>;
