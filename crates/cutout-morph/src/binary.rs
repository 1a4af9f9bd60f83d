//! Binary mask morphology
//!
//! Implements erosion, dilation, opening, and closing over byte masks
//! (0 = background, 255 = foreground).
//!
//! Boundary convention is asymmetric: pixels outside the mask read as
//! background for both dilation and erosion, so erosion shrinks
//! foreground that touches the border.

use crate::{MorphResult, Sel};
use cutout_core::BinaryMask;

/// Dilate a mask.
///
/// A pixel becomes foreground when any hit of the SEL, anchored at the
/// pixel, lands on foreground.
pub fn dilate(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let w = mask.width();
    let h = mask.height();
    let mut out = BinaryMask::new(w, h)?;

    let offsets: Vec<_> = sel.hit_offsets().collect();
    let src = mask.data();
    let dst = out.data_mut();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let fg = offsets.iter().any(|&(dx, dy)| {
                let sx = x - dx;
                let sy = y - dy;
                sx >= 0
                    && sx < w as i32
                    && sy >= 0
                    && sy < h as i32
                    && src[sy as usize * w as usize + sx as usize] != 0
            });
            if fg {
                dst[y as usize * w as usize + x as usize] = 255;
            }
        }
    }

    Ok(out)
}

/// Erode a mask.
///
/// A pixel stays foreground only when every hit of the SEL, anchored
/// at the pixel, lands on foreground. Positions outside the mask count
/// as background.
pub fn erode(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let w = mask.width();
    let h = mask.height();
    let mut out = BinaryMask::new(w, h)?;

    let offsets: Vec<_> = sel.hit_offsets().collect();
    let src = mask.data();
    let dst = out.data_mut();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let fg = offsets.iter().all(|&(dx, dy)| {
                let sx = x + dx;
                let sy = y + dy;
                sx >= 0
                    && sx < w as i32
                    && sy >= 0
                    && sy < h as i32
                    && src[sy as usize * w as usize + sx as usize] != 0
            });
            if fg {
                dst[y as usize * w as usize + x as usize] = 255;
            }
        }
    }

    Ok(out)
}

/// Open a mask.
///
/// Opening = erosion followed by dilation.
/// Removes isolated foreground specks and smooths contours.
pub fn open(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let eroded = erode(mask, sel)?;
    dilate(&eroded, sel)
}

/// Close a mask.
///
/// Closing = dilation followed by erosion.
/// Fills small holes and connects nearby foreground.
pub fn close(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let dilated = dilate(mask, sel)?;
    erode(&dilated, sel)
}

/// Dilate a mask repeatedly.
///
/// Used to recover thin foreground extremities that opening and
/// closing erode away.
pub fn dilate_n(mask: &BinaryMask, sel: &Sel, iterations: u32) -> MorphResult<BinaryMask> {
    if iterations == 0 {
        return Ok(mask.clone());
    }
    let mut current = dilate(mask, sel)?;
    for _ in 1..iterations {
        current = dilate(&current, sel)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_dot(size: u32) -> BinaryMask {
        let mut mask = BinaryMask::new(size, size).unwrap();
        mask.set(size / 2, size / 2, true).unwrap();
        mask
    }

    #[test]
    fn test_dilate_grows_dot() {
        let mask = center_dot(9);
        let sel = Sel::create_brick(3, 3).unwrap();
        let dilated = dilate(&mask, &sel).unwrap();
        assert_eq!(dilated.count_foreground(), 9);
    }

    #[test]
    fn test_erode_removes_dot() {
        let mask = center_dot(9);
        let sel = Sel::create_brick(3, 3).unwrap();
        let eroded = erode(&mask, &sel).unwrap();
        assert_eq!(eroded.count_foreground(), 0);
    }

    #[test]
    fn test_open_removes_speck_keeps_block() {
        let mut mask = BinaryMask::new(20, 20).unwrap();
        // 6x6 block
        for y in 4..10 {
            for x in 4..10 {
                mask.set(x, y, true).unwrap();
            }
        }
        // isolated speck
        mask.set(16, 16, true).unwrap();

        let sel = Sel::create_brick(3, 3).unwrap();
        let opened = open(&mask, &sel).unwrap();

        assert_eq!(opened.get(16, 16), Some(0));
        assert_eq!(opened.get(6, 6), Some(255));
    }

    #[test]
    fn test_close_fills_hole() {
        let mut mask = BinaryMask::new(20, 20).unwrap();
        for y in 4..12 {
            for x in 4..12 {
                mask.set(x, y, true).unwrap();
            }
        }
        mask.set(7, 7, false).unwrap();

        let sel = Sel::create_brick(3, 3).unwrap();
        let closed = close(&mask, &sel).unwrap();
        assert_eq!(closed.get(7, 7), Some(255));
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut mask = BinaryMask::new(16, 16).unwrap();
        for y in 3..12 {
            for x in 5..11 {
                mask.set(x, y, true).unwrap();
            }
        }
        let sel = Sel::create_ellipse(3).unwrap();

        let opened = open(&mask, &sel).unwrap();
        assert_eq!(open(&opened, &sel).unwrap(), opened);

        let closed = close(&mask, &sel).unwrap();
        assert_eq!(close(&closed, &sel).unwrap(), closed);
    }

    #[test]
    fn test_dilate_n_zero_is_identity() {
        let mask = center_dot(9);
        let sel = Sel::create_brick(3, 3).unwrap();
        assert_eq!(dilate_n(&mask, &sel, 0).unwrap(), mask);
    }
}
