//! Segmentation engine
//!
//! Owns the invocation discipline around the energy minimizer: region
//! validation and clipping, rectangle-mode on the first call of a
//! session versus mask-mode once scribble constraints exist, degeneracy
//! checks, and defensive restoration of hard constraints over the
//! minimizer's output.

use crate::{EnergyMinimizer, InitMode, SegmentError, SegmentResult};
use cutout_core::{Raster, Region, Trimap, TrimapLabel};

/// Default convergence effort handed to the minimizer.
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Drives an [`EnergyMinimizer`] through a segmentation session
#[derive(Debug)]
pub struct SegmentationEngine<M> {
    minimizer: M,
    invoked: bool,
}

impl<M: EnergyMinimizer> SegmentationEngine<M> {
    /// Create an engine around a minimizer implementation.
    pub fn new(minimizer: M) -> Self {
        Self {
            minimizer,
            invoked: false,
        }
    }

    /// Seed a trimap from a bounding box.
    ///
    /// The box is clipped to the image; cells outside it become
    /// definite background, cells inside probable foreground. Resets
    /// the engine so the next [`segment`](Self::segment) call runs in
    /// rectangle mode.
    ///
    /// # Errors
    ///
    /// [`SegmentError::EmptyRegion`] when the box has zero width or
    /// height, [`SegmentError::RegionOutsideImage`] when it does not
    /// intersect the image.
    pub fn initialize_from_region(
        &mut self,
        image: &Raster,
        region: Region,
    ) -> SegmentResult<Trimap> {
        if region.is_empty() {
            return Err(SegmentError::EmptyRegion {
                w: region.w,
                h: region.h,
            });
        }

        let (width, height) = image.dimensions();
        let clipped = region
            .clip(width, height)
            .ok_or(SegmentError::RegionOutsideImage {
                x: region.x,
                y: region.y,
                w: region.w,
                h: region.h,
                image_width: width,
                image_height: height,
            })?;

        self.invoked = false;
        Ok(Trimap::from_region(width, height, &clipped)?)
    }

    /// Run one segmentation pass.
    ///
    /// Uses rectangle mode on the first call after
    /// [`initialize_from_region`](Self::initialize_from_region) and
    /// mask mode afterwards. Definite labels from the input trimap are
    /// restored over the minimizer's output, so hard constraints
    /// survive any implementation.
    ///
    /// # Errors
    ///
    /// [`SegmentError::DimensionMismatch`] when trimap and image
    /// disagree, [`SegmentError::DegenerateTrimap`] when every cell
    /// carries one label, plus whatever the minimizer signals.
    pub fn segment(
        &mut self,
        image: &Raster,
        trimap: &Trimap,
        iterations: u32,
    ) -> SegmentResult<Trimap> {
        if trimap.dimensions() != image.dimensions() {
            return Err(SegmentError::DimensionMismatch {
                trimap: trimap.dimensions(),
                image: image.dimensions(),
            });
        }

        if trimap.is_degenerate() {
            let counts = trimap.label_counts();
            let missing = if counts[TrimapLabel::Background as usize] > 0
                || counts[TrimapLabel::ProbableBackground as usize] > 0
            {
                "foreground"
            } else {
                "background"
            };
            return Err(SegmentError::DegenerateTrimap { missing });
        }

        let mode = if self.invoked {
            InitMode::Mask
        } else {
            InitMode::Rect
        };
        tracing::debug!(?mode, iterations, "invoking energy minimizer");

        let mut out = self.minimizer.minimize(image, trimap, mode, iterations)?;
        self.invoked = true;

        // Hard constraints: definite input cells win over whatever the
        // minimizer produced. Only a newer scribble may change them.
        for (out_label, &in_label) in out.labels_mut().iter_mut().zip(trimap.labels()) {
            if in_label.is_definite() {
                *out_label = in_label;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutout_core::ChannelLayout;

    /// Minimizer stub that records invocation modes and flips every
    /// probable cell to probable foreground.
    struct Recording {
        modes: Vec<InitMode>,
    }

    impl EnergyMinimizer for Recording {
        fn minimize(
            &mut self,
            _image: &Raster,
            trimap: &Trimap,
            mode: InitMode,
            _iterations: u32,
        ) -> SegmentResult<Trimap> {
            self.modes.push(mode);
            let mut out = trimap.clone();
            for label in out.labels_mut() {
                *label = TrimapLabel::ProbableForeground;
            }
            Ok(out)
        }
    }

    fn engine() -> SegmentationEngine<Recording> {
        SegmentationEngine::new(Recording { modes: Vec::new() })
    }

    fn image(width: u32, height: u32) -> Raster {
        Raster::new(width, height, ChannelLayout::Bgr).unwrap()
    }

    #[test]
    fn test_empty_region_fails() {
        let image = image(10, 10);
        let mut engine = engine();

        for region in [Region::new(2, 2, 0, 5), Region::new(2, 2, 5, 0)] {
            let err = engine.initialize_from_region(&image, region).unwrap_err();
            assert!(matches!(err, SegmentError::EmptyRegion { .. }));
        }
    }

    #[test]
    fn test_outside_region_fails() {
        let image = image(10, 10);
        let mut engine = engine();
        let err = engine
            .initialize_from_region(&image, Region::new(10, 0, 5, 5))
            .unwrap_err();
        assert!(matches!(err, SegmentError::RegionOutsideImage { .. }));
    }

    #[test]
    fn test_overhanging_region_is_clipped() {
        let image = image(10, 10);
        let mut engine = engine();
        let trimap = engine
            .initialize_from_region(&image, Region::new(6, 6, 20, 20))
            .unwrap();

        assert_eq!(trimap.dimensions(), (10, 10));
        assert_eq!(trimap.get(7, 7), Some(TrimapLabel::ProbableForeground));
        assert_eq!(trimap.get(5, 5), Some(TrimapLabel::Background));
        let counts = trimap.label_counts();
        assert_eq!(counts[TrimapLabel::ProbableForeground as usize], 16);
    }

    #[test]
    fn test_rect_then_mask_mode() {
        let image = image(10, 10);
        let mut engine = engine();
        let trimap = engine
            .initialize_from_region(&image, Region::new(2, 2, 5, 5))
            .unwrap();

        let first = engine.segment(&image, &trimap, 5).unwrap();
        // Second call must not be degenerate: keep a definite cell.
        let mut second_in = first.clone();
        second_in.set(0, 0, TrimapLabel::Background).unwrap();
        engine.segment(&image, &second_in, 5).unwrap();

        assert_eq!(engine.minimizer.modes, vec![InitMode::Rect, InitMode::Mask]);
    }

    #[test]
    fn test_reinitialize_returns_to_rect_mode() {
        let image = image(10, 10);
        let mut engine = engine();
        let trimap = engine
            .initialize_from_region(&image, Region::new(2, 2, 5, 5))
            .unwrap();
        engine.segment(&image, &trimap, 5).unwrap();

        let trimap = engine
            .initialize_from_region(&image, Region::new(1, 1, 6, 6))
            .unwrap();
        engine.segment(&image, &trimap, 5).unwrap();

        assert_eq!(engine.minimizer.modes, vec![InitMode::Rect, InitMode::Rect]);
    }

    #[test]
    fn test_degenerate_trimap_rejected() {
        let image = image(10, 10);
        let mut engine = engine();
        let uniform = Trimap::new(10, 10, TrimapLabel::ProbableForeground).unwrap();

        let err = engine.segment(&image, &uniform, 5).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::DegenerateTrimap { missing: "background" }
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let image = image(10, 10);
        let mut engine = engine();
        let trimap = Trimap::from_region(8, 8, &Region::new(1, 1, 4, 4)).unwrap();

        let err = engine.segment(&image, &trimap, 5).unwrap_err();
        assert!(matches!(err, SegmentError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_definite_labels_restored() {
        let image = image(10, 10);
        let mut engine = engine();
        let mut trimap = Trimap::from_region(10, 10, &Region::new(2, 2, 6, 6)).unwrap();
        trimap.set(4, 4, TrimapLabel::Background).unwrap();

        // The stub tries to flip everything to probable foreground;
        // the engine must put the hard constraints back.
        let out = engine.segment(&image, &trimap, 5).unwrap();
        assert_eq!(out.get(4, 4), Some(TrimapLabel::Background));
        assert_eq!(out.get(0, 0), Some(TrimapLabel::Background));
        assert_eq!(out.get(3, 3), Some(TrimapLabel::ProbableForeground));
    }
}
