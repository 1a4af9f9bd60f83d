//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. The origin `(cx, cy)` is the reference point; hit
//! positions are read as offsets relative to it.

use crate::{MorphError, MorphResult};

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for dilation and erosion. Mask
/// cleanup uses the elliptical element; bricks are available for
/// directional effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    hits: Vec<bool>,
}

impl Sel {
    /// Create a rectangular "brick" structuring element with all hits.
    ///
    /// The origin sits at the center cell.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for a zero dimension.
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "brick dimensions must be positive: {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            hits: vec![true; width as usize * height as usize],
        })
    }

    /// Create an elliptical structuring element inscribed in a
    /// `size` x `size` square.
    ///
    /// This is the element mask refinement uses: it rounds corners
    /// instead of squaring them the way a brick would.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] when `size` is zero.
    pub fn create_ellipse(size: u32) -> MorphResult<Self> {
        if size == 0 {
            return Err(MorphError::InvalidSel(
                "ellipse size must be positive".into(),
            ));
        }

        let cx = size / 2;
        let cy = size / 2;
        // Semi-axes; a 1-wide ellipse degenerates to a line of cells.
        let rx = ((size - 1) as f64 / 2.0).max(0.5);
        let ry = rx;

        let mut hits = vec![false; size as usize * size as usize];
        for y in 0..size {
            for x in 0..size {
                let dx = (x as f64 - cx as f64) / rx;
                let dy = (y as f64 - cy as f64) / ry;
                if dx * dx + dy * dy <= 1.0 + f64::EPSILON {
                    hits[y as usize * size as usize + x as usize] = true;
                }
            }
        }

        Ok(Self {
            width: size,
            height: size,
            cx,
            cy,
            hits,
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate.
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate.
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Count the hit cells.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// Iterate over hit positions relative to the origin.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.hits.iter().enumerate().filter_map(move |(idx, &hit)| {
            if hit {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }
}
