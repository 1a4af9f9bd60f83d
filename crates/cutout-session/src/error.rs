//! Error types for cutout-session
//!
//! Only session-fatal failures surface here; round-level segmentation
//! failures are absorbed by the loop and reported through
//! [`crate::RoundResult`].

use thiserror::Error;

/// Errors that end or prevent a correction session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Segmentation failed while starting the session
    #[error("segmentation error: {0}")]
    Segment(#[from] cutout_segment::SegmentError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
