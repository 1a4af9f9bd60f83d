//! Image scaling operations
//!
//! Provides nearest-neighbor sampling and bilinear interpolation.
//! Replacement backgrounds are fitted to the working image with
//! [`scale_to_size`] before compositing.

use crate::{TransformError, TransformResult};
use cutout_core::Raster;

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Bilinear interpolation (smooth, the default for photographs)
    Linear,
}

/// Scale a raster to a specific size.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if either target
/// dimension is zero.
pub fn scale_to_size(
    src: &Raster,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<Raster> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target dimensions must be positive: {width}x{height}"
        )));
    }

    if (width, height) == src.dimensions() {
        return Ok(src.clone());
    }

    match method {
        ScaleMethod::Sampling => Ok(scale_by_sampling(src, width, height)),
        ScaleMethod::Linear => Ok(scale_linear(src, width, height)),
    }
}

/// Nearest-neighbor scaling.
fn scale_by_sampling(src: &Raster, width: u32, height: u32) -> Raster {
    let channels = src.channels() as usize;
    let (sw, sh) = src.dimensions();
    let src_data = src.data();

    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    for y in 0..height {
        let sy = (y as u64 * sh as u64 / height as u64) as usize;
        for x in 0..width {
            let sx = (x as u64 * sw as u64 / width as u64) as usize;
            let off = (sy * sw as usize + sx) * channels;
            data.extend_from_slice(&src_data[off..off + channels]);
        }
    }

    Raster::from_vec(width, height, src.layout(), data)
        .unwrap_or_else(|_| unreachable!("buffer length computed from target dimensions"))
}

/// Bilinear scaling.
///
/// Source coordinates are center-aligned: destination pixel centers
/// map to `(x + 0.5) * scale - 0.5` in the source grid, clamped at the
/// borders.
fn scale_linear(src: &Raster, width: u32, height: u32) -> Raster {
    let channels = src.channels() as usize;
    let (sw, sh) = src.dimensions();
    let src_data = src.data();

    let scale_x = sw as f32 / width as f32;
    let scale_y = sh as f32 / height as f32;

    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    for y in 0..height {
        let fy = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (sh - 1) as f32);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(sh as usize - 1);
        let wy = fy - y0 as f32;

        for x in 0..width {
            let fx = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (sw - 1) as f32);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(sw as usize - 1);
            let wx = fx - x0 as f32;

            let off00 = (y0 * sw as usize + x0) * channels;
            let off01 = (y0 * sw as usize + x1) * channels;
            let off10 = (y1 * sw as usize + x0) * channels;
            let off11 = (y1 * sw as usize + x1) * channels;

            for c in 0..channels {
                let top = src_data[off00 + c] as f32 * (1.0 - wx)
                    + src_data[off01 + c] as f32 * wx;
                let bottom = src_data[off10 + c] as f32 * (1.0 - wx)
                    + src_data[off11 + c] as f32 * wx;
                let value = top * (1.0 - wy) + bottom * wy;
                data.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    Raster::from_vec(width, height, src.layout(), data)
        .unwrap_or_else(|_| unreachable!("buffer length computed from target dimensions"))
}
