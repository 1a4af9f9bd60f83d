//! cutout-filter - Convolution and mask refinement
//!
//! This crate provides:
//!
//! - Convolution kernels ([`Kernel`], including Gaussian generation)
//! - Replicate-border mask convolution and Gaussian feathering
//! - The mask refiner: closing, opening, extremity-recovery dilation,
//!   and feathering in one pass with a degraded-result policy

pub mod convolve;
mod error;
pub mod kernel;
pub mod refine;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{convolve_mask, gaussian_blur_mask};
pub use refine::{refine, Refined, RefineOutcome, RefineParams};
