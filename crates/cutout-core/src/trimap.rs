//! Trimap - four-way pixel classification
//!
//! The trimap seeds and constrains segmentation: definite labels are
//! hard constraints the minimizer must not touch, probable labels are
//! what it refines. The numeric values follow the usual mask
//! convention (0 = background, 1 = foreground, 2 = probable
//! background, 3 = probable foreground).

use crate::error::{Error, Result};
use crate::graphics::wide_line_points;
use crate::mask::BinaryMask;
use crate::region::Region;
use crate::scribble::Scribble;

/// Per-pixel classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TrimapLabel {
    /// Definite background (hard constraint)
    Background = 0,
    /// Definite foreground (hard constraint)
    Foreground = 1,
    /// Probably background (refinable)
    ProbableBackground = 2,
    /// Probably foreground (refinable)
    ProbableForeground = 3,
}

impl TrimapLabel {
    /// Whether the label is a hard constraint.
    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, TrimapLabel::Background | TrimapLabel::Foreground)
    }

    /// Whether the label collapses to foreground in a binary mask.
    #[inline]
    pub const fn is_foreground(self) -> bool {
        matches!(
            self,
            TrimapLabel::Foreground | TrimapLabel::ProbableForeground
        )
    }

    /// The byte this label collapses to in a binary mask.
    #[inline]
    pub const fn mask_byte(self) -> u8 {
        if self.is_foreground() { 255 } else { 0 }
    }
}

/// Trimap - a four-way classification per image pixel
///
/// Always shares the working image's dimensions. Created at
/// segmentation start, mutated only by scribble rasterization and the
/// segmentation step, and discarded when the correction cycle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimap {
    width: u32,
    height: u32,
    labels: Vec<TrimapLabel>,
}

impl Trimap {
    /// Create a trimap with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: TrimapLabel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            labels: vec![fill; width as usize * height as usize],
        })
    }

    /// Seed a trimap from a bounding box.
    ///
    /// Cells inside the region (intersected with the image) become
    /// probable foreground; everything else is definite background.
    /// The region is expected to be pre-clipped by the caller; cells
    /// it covers beyond the image are simply ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn from_region(width: u32, height: u32, region: &Region) -> Result<Self> {
        let mut trimap = Self::new(width, height, TrimapLabel::Background)?;
        if let Some(clipped) = region.clip(width, height) {
            for y in clipped.y..clipped.bottom() {
                let row = y as usize * width as usize;
                for x in clipped.x..clipped.right() {
                    trimap.labels[row + x as usize] = TrimapLabel::ProbableForeground;
                }
            }
        }
        Ok(trimap)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the label slice in row-major order.
    #[inline]
    pub fn labels(&self) -> &[TrimapLabel] {
        &self.labels
    }

    /// Get the label slice mutably.
    #[inline]
    pub fn labels_mut(&mut self) -> &mut [TrimapLabel] {
        &mut self.labels
    }

    /// Get the label at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<TrimapLabel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Set the label at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the trimap.
    pub fn set(&mut self, x: u32, y: u32, label: TrimapLabel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.labels[y as usize * self.width as usize + x as usize] = label;
        Ok(())
    }

    /// Count cells per label, indexed by the label's numeric value.
    pub fn label_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &label in &self.labels {
            counts[label as usize] += 1;
        }
        counts
    }

    /// Whether every cell carries the same label.
    ///
    /// A degenerate trimap gives the minimizer nothing to separate.
    pub fn is_degenerate(&self) -> bool {
        self.label_counts().contains(&self.labels.len())
    }

    /// Collapse to a binary mask: background labels to 0, foreground
    /// labels to 255. Pure and total.
    pub fn to_binary_mask(&self) -> BinaryMask {
        let data = self.labels.iter().map(|l| l.mask_byte()).collect();
        // Length invariant holds by construction.
        BinaryMask::from_raw(self.width, self.height, data)
            .unwrap_or_else(|_| unreachable!("trimap buffer length is validated at creation"))
    }

    /// Stamp a scribble into the trimap.
    ///
    /// Every cell touched by the stroke is overwritten with the
    /// scribble's definite label, including cells a previous scribble
    /// made definite: the newest stroke wins. Points outside the
    /// image are ignored.
    pub fn rasterize(&mut self, scribble: &Scribble) {
        let label = scribble.label.trimap_label();
        for segment in &scribble.segments {
            for (x, y) in wide_line_points(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                scribble.thickness,
            ) {
                if x < 0 || y < 0 {
                    continue;
                }
                let (x, y) = (x as u32, y as u32);
                if x < self.width && y < self.height {
                    self.labels[y as usize * self.width as usize + x as usize] = label;
                }
            }
        }
    }
}
