//! Error types for cutout-segment
//!
//! Region errors are fatal to the current session (the user must
//! redraw the selection); convergence and degeneracy errors are
//! recoverable at the correction-round level.

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The bounding box has zero area
    #[error("empty region: a {w}x{h} selection has zero area; the bounding box must be redrawn")]
    EmptyRegion { w: u32, h: u32 },

    /// The bounding box does not intersect the image
    #[error(
        "region ({x}, {y}) {w}x{h} lies entirely outside the {image_width}x{image_height} image"
    )]
    RegionOutsideImage {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Trimap and image dimensions disagree
    #[error(
        "dimension mismatch: trimap is {}x{}, image is {}x{}",
        .trimap.0, .trimap.1, .image.0, .image.1
    )]
    DimensionMismatch {
        trimap: (u32, u32),
        image: (u32, u32),
    },

    /// The trimap gives the minimizer nothing to separate
    #[error("degenerate trimap: no {missing} cells to model")]
    DegenerateTrimap { missing: &'static str },

    /// The minimizer failed to reach a stable labeling
    #[error(
        "segmentation did not converge: {changed} cell(s) still moving after {iterations} iteration(s)"
    )]
    NotConverged { changed: usize, iterations: u32 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cutout_core::Error),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
