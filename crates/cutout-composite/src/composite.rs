//! Compositing against the chosen background strategy
//!
//! Merges the working image with a refined opacity mask. The blend
//! always uses the feathered alpha value linearly: a cell at opacity
//! 128 contributes half image and half background, so the ramp the
//! refiner produced survives into the output instead of collapsing to
//! a hard step.

use crate::{CompositeError, CompositeResult};
use cutout_core::{AlphaMask, ChannelLayout, Color, Raster};
use cutout_transform::{scale_to_size, ScaleMethod};

/// What replaces the background
///
/// Chosen once per run and immutable for the remainder of that run.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Cut the background out entirely; the output gains an alpha
    /// channel carrying the mask
    Transparent,
    /// Fill the background with a constant color
    Solid(Color),
    /// Swap the background for another photograph, resized to fit
    Image(Raster),
}

/// Composite the image against the background strategy.
///
/// Output layout is Bgra for [`Background::Transparent`] and Bgr
/// otherwise.
///
/// # Errors
///
/// [`CompositeError::DimensionMismatch`] when the mask does not share
/// the image's dimensions; [`CompositeError::UnsupportedChannelLayout`]
/// when the image is not 3- or 4-channel, or a replacement background
/// is not 3-channel.
pub fn composite(
    image: &Raster,
    mask: &AlphaMask,
    background: &Background,
) -> CompositeResult<Raster> {
    if mask.dimensions() != image.dimensions() {
        return Err(CompositeError::DimensionMismatch {
            mask: mask.dimensions(),
            image: image.dimensions(),
        });
    }

    if !matches!(image.layout(), ChannelLayout::Bgr | ChannelLayout::Bgra) {
        return Err(CompositeError::UnsupportedChannelLayout {
            expected: "3 or 4",
            channels: image.channels(),
        });
    }

    match background {
        Background::Transparent => Ok(apply_transparency(image, mask)),
        Background::Solid(color) => {
            let backdrop = Raster::filled(image.width(), image.height(), *color)
                .unwrap_or_else(|_| unreachable!("image dimensions are nonzero"));
            Ok(blend_over(image, mask, &backdrop))
        }
        Background::Image(bg) => {
            if bg.layout() != ChannelLayout::Bgr {
                return Err(CompositeError::UnsupportedChannelLayout {
                    expected: "3",
                    channels: bg.channels(),
                });
            }
            let backdrop =
                scale_to_size(bg, image.width(), image.height(), ScaleMethod::Linear)?;
            Ok(blend_over(image, mask, &backdrop))
        }
    }
}

/// Carry the mask into an alpha channel, leaving color untouched.
fn apply_transparency(image: &Raster, mask: &AlphaMask) -> Raster {
    let mut out = image.convert(ChannelLayout::Bgra);
    for (px, &alpha) in out.data_mut().chunks_exact_mut(4).zip(mask.data()) {
        px[3] = alpha;
    }
    out
}

/// Linear blend of image over backdrop weighted by the mask.
///
/// Integer arithmetic with round-half-up; opacity 255 reproduces the
/// image byte exactly and opacity 0 the backdrop byte exactly.
fn blend_over(image: &Raster, mask: &AlphaMask, backdrop: &Raster) -> Raster {
    let src = image.convert(ChannelLayout::Bgr);
    let mut out = Raster::new(image.width(), image.height(), ChannelLayout::Bgr)
        .unwrap_or_else(|_| unreachable!("image dimensions are nonzero"));

    let src_data = src.data();
    let bg_data = backdrop.data();
    let dst = out.data_mut();

    for (idx, &alpha) in mask.data().iter().enumerate() {
        let a = alpha as u32;
        let off = idx * 3;
        for c in 0..3 {
            let fg = src_data[off + c] as u32;
            let bg = bg_data[off + c] as u32;
            dst[off + c] = ((fg * a + bg * (255 - a) + 127) / 255) as u8;
        }
    }

    out
}
