//! Mask refinement
//!
//! Turns the hard mask a segmentation round produces into a clean,
//! feathered opacity mask:
//!
//! 1. Morphological closing fills small holes inside the foreground.
//! 2. Opening removes isolated background noise specks.
//! 3. Repeated dilation recovers thin extremities (hair, wires) the
//!    first two steps erode away.
//! 4. A Gaussian pass feathers the boundary into an opacity ramp over
//!    the full byte range.
//!
//! Refinement never fails: if an internal step cannot run, the input
//! mask is returned unchanged and the outcome marks the result as
//! degraded. Callers can always distinguish the two paths.

use crate::convolve::gaussian_blur_mask;
use crate::FilterResult;
use cutout_core::{AlphaMask, BinaryMask};
use cutout_morph::{binary, Sel};

/// Tunable refinement parameters
///
/// The defaults reproduce the standard cleanup behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefineParams {
    /// Side of the elliptical structuring element for closing/opening
    pub kernel_size: u32,
    /// Side of the Gaussian feathering kernel
    pub blur_size: u32,
    /// Number of extremity-recovery dilation passes
    pub dilate_iterations: u32,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self {
            kernel_size: 7,
            blur_size: 7,
            dilate_iterations: 7,
        }
    }
}

/// How a refinement run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineOutcome {
    /// The full pipeline ran
    Refined,
    /// An internal step failed; the result is the unrefined input
    DegradedToInput,
}

impl RefineOutcome {
    /// Whether the result is the unrefined input.
    #[inline]
    pub fn is_degraded(self) -> bool {
        matches!(self, RefineOutcome::DegradedToInput)
    }
}

/// A refined mask together with how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refined {
    pub mask: AlphaMask,
    pub outcome: RefineOutcome,
}

/// Clean, smooth, and feather a hard mask.
///
/// Never panics or errors for a well-formed mask. When an internal
/// step fails (for example a degenerate structuring-element or kernel
/// size), the input is promoted to an opacity mask unchanged, the
/// outcome is [`RefineOutcome::DegradedToInput`], and a warning event
/// is emitted.
pub fn refine(mask: &BinaryMask, params: &RefineParams) -> Refined {
    match refine_inner(mask, params) {
        Ok(alpha) => Refined {
            mask: alpha,
            outcome: RefineOutcome::Refined,
        },
        Err(err) => {
            tracing::warn!(error = %err, "mask refinement degraded to its input");
            Refined {
                mask: AlphaMask::from_binary(mask),
                outcome: RefineOutcome::DegradedToInput,
            }
        }
    }
}

fn refine_inner(mask: &BinaryMask, params: &RefineParams) -> FilterResult<AlphaMask> {
    let sel = Sel::create_ellipse(params.kernel_size)?;

    let closed = binary::close(mask, &sel)?;
    let opened = binary::open(&closed, &sel)?;
    let dilated = binary::dilate_n(&opened, &sel, params.dilate_iterations)?;

    gaussian_blur_mask(&AlphaMask::from_binary(&dilated), params.blur_size)
}
