//! The energy-minimization capability
//!
//! Segmentation proper is delegated to an [`EnergyMinimizer`]: an
//! iterative algorithm that estimates foreground and background pixel
//! distributions and finds a low-cost separating boundary. The engine
//! treats it as opaque; anything honoring the contract below can be
//! plugged in. A built-in implementation ships in
//! [`crate::MixtureMinimizer`].

use crate::SegmentResult;
use cutout_core::{Raster, Trimap};

/// How the trimap handed to the minimizer was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// The trimap was seeded purely from a bounding box: definite
    /// background outside, probable foreground inside
    Rect,
    /// The trimap carries hard constraints from user scribbles merged
    /// into an earlier segmentation result
    Mask,
}

/// An iterative foreground/background energy minimizer
///
/// # Contract
///
/// - The returned trimap has the same dimensions as the input.
/// - Only `ProbableBackground` / `ProbableForeground` cells may change;
///   definite cells are hard constraints. (The engine additionally
///   restores definite cells afterwards, so a misbehaving
///   implementation cannot violate user corrections.)
/// - `iterations` bounds the internal convergence effort: higher is
///   slower and more accurate.
/// - Implementations fail with [`crate::SegmentError::DegenerateTrimap`]
///   when a class has nothing to model and
///   [`crate::SegmentError::NotConverged`] when the labeling will not
///   settle. Callers surface these instead of silently keeping an
///   unmodified mask.
pub trait EnergyMinimizer {
    /// Run the minimizer over `image` as constrained by `trimap`.
    fn minimize(
        &mut self,
        image: &Raster,
        trimap: &Trimap,
        mode: InitMode,
        iterations: u32,
    ) -> SegmentResult<Trimap>;
}
