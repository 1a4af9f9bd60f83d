//! Error types for cutout-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cutout_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] cutout_morph::MorphError),

    /// Invalid convolution kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filtering operations
pub type FilterResult<T> = Result<T, FilterError>;
