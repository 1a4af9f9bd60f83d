//! Error types for cutout-io

use thiserror::Error;

/// Errors that can occur during image input/output
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cutout_core::Error),

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Image encode error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported image format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
