//! Error types for cutout-composite
//!
//! Both variants are input-contract violations: fatal to the current
//! composite attempt and never retried automatically.

use thiserror::Error;

/// Errors that can occur during compositing
#[derive(Debug, Error)]
pub enum CompositeError {
    /// Mask and image dimensions disagree
    #[error(
        "dimension mismatch: mask is {}x{}, image is {}x{}",
        .mask.0, .mask.1, .image.0, .image.1
    )]
    DimensionMismatch {
        mask: (u32, u32),
        image: (u32, u32),
    },

    /// An input raster has a channel layout compositing cannot use
    #[error("unsupported channel layout: expected {expected}, got {channels} channel(s)")]
    UnsupportedChannelLayout {
        expected: &'static str,
        channels: u32,
    },

    /// Transform error while fitting a replacement background
    #[error("transform error: {0}")]
    Transform(#[from] cutout_transform::TransformError),
}

/// Result type for compositing operations
pub type CompositeResult<T> = Result<T, CompositeError>;
