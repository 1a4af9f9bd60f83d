//! cutout-segment - Segmentation engine and energy minimization
//!
//! This crate provides:
//!
//! - [`EnergyMinimizer`] - the capability interface for the opaque
//!   iterative segmentation primitive, with its [`InitMode`] flag
//! - [`MixtureMinimizer`] - the built-in Gaussian-mixture color-model
//!   implementation
//! - [`SegmentationEngine`] - invocation discipline: region validation,
//!   rectangle-then-mask mode sequencing, degeneracy checks, and hard
//!   constraint preservation

pub mod engine;
mod error;
pub mod mixture;
pub mod primitive;

pub use engine::{SegmentationEngine, DEFAULT_ITERATIONS};
pub use error::{SegmentError, SegmentResult};
pub use mixture::MixtureMinimizer;
pub use primitive::{EnergyMinimizer, InitMode};
