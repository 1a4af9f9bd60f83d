//! Mask convolution
//!
//! Convolves opacity masks with arbitrary kernels. Uses replicate
//! (clamp) border handling: positions outside the mask boundary read
//! the nearest edge value.

use crate::{FilterResult, Kernel};
use cutout_core::AlphaMask;

/// Convolve an opacity mask with a kernel.
pub fn convolve_mask(mask: &AlphaMask, kernel: &Kernel) -> FilterResult<AlphaMask> {
    let w = mask.width();
    let h = mask.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut out = AlphaMask::new(w, h)?;
    let src = mask.data();
    let dst = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i32 + (kx as i32 - kcx);
                    let sy = y as i32 + (ky as i32 - kcy);

                    // Clamp to mask boundaries (replicate border)
                    let sx = sx.clamp(0, w as i32 - 1) as usize;
                    let sy = sy.clamp(0, h as i32 - 1) as usize;

                    let value = src[sy * w as usize + sx] as f32;
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += value * k;
                }
            }

            dst[y as usize * w as usize + x as usize] =
                sum.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out)
}

/// Apply Gaussian blur with the given odd kernel size.
///
/// Sigma is derived from the kernel radius (minimum 0.5), which gives
/// a reasonable falloff for feathering work.
pub fn gaussian_blur_mask(mask: &AlphaMask, size: u32) -> FilterResult<AlphaMask> {
    let radius = size / 2;
    let sigma = (radius as f32).max(0.5);
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve_mask(mask, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutout_core::BinaryMask;

    #[test]
    fn test_identity_kernel() {
        let mut binary = BinaryMask::new(5, 5).unwrap();
        binary.set(2, 2, true).unwrap();
        let mask = AlphaMask::from_binary(&binary);

        let kernel = Kernel::from_slice(1, 1, &[1.0]).unwrap();
        let out = convolve_mask(&mask, &kernel).unwrap();
        assert_eq!(out.data(), mask.data());
    }

    #[test]
    fn test_blur_preserves_uniform() {
        let mask = AlphaMask::from_raw(6, 6, vec![255; 36]).unwrap();
        let out = gaussian_blur_mask(&mask, 5).unwrap();
        assert!(out.data().iter().all(|&v| v >= 254));
    }

    #[test]
    fn test_blur_feathers_edge() {
        let mut binary = BinaryMask::new(10, 10).unwrap();
        for y in 0..10 {
            for x in 0..5 {
                binary.set(x, y, true).unwrap();
            }
        }
        let out = gaussian_blur_mask(&AlphaMask::from_binary(&binary), 5).unwrap();

        // Intermediate values appear at the edge between halves.
        let ramp = out.get(4, 5).unwrap();
        assert!(ramp > 0 && ramp < 255, "expected a ramp value, got {ramp}");
        // Deep interior stays saturated on both sides.
        assert!(out.get(0, 5).unwrap() > 240);
        assert!(out.get(9, 5).unwrap() < 15);
    }
}
