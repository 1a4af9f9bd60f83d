//! Synthetic test scenes
//!
//! The regression tests run on generated images instead of binary
//! fixtures. The two-tone square scene is the canonical one: a solid
//! square subject on a contrasting background.

use cutout_core::{ChannelLayout, Color, Raster, Region};

/// A solid raster of one color.
pub fn solid_raster(width: u32, height: u32, color: Color) -> Raster {
    Raster::filled(width, height, color).expect("test scene dimensions are nonzero")
}

/// A square subject of `fg` color over a `bg` background.
pub fn two_tone_scene(width: u32, height: u32, square: Region, fg: Color, bg: Color) -> Raster {
    let mut image = Raster::new(width, height, ChannelLayout::Bgr)
        .expect("test scene dimensions are nonzero");
    for y in 0..height {
        for x in 0..width {
            let color = if square.contains(x, y) { fg } else { bg };
            image
                .set_pixel(x, y, &color.to_bgr())
                .expect("coordinates are inside the scene");
        }
    }
    image
}

/// The standard scenario: a 40x40 white square centered on a 100x100
/// black image, with its `(20, 20, 60, 60)` selection box.
pub fn white_square_scene() -> (Raster, Region, Region) {
    let square = Region::new(30, 30, 40, 40);
    let image = two_tone_scene(
        100,
        100,
        square,
        Color::new(255, 255, 255),
        Color::new(0, 0, 0),
    );
    (image, square, Region::new(20, 20, 60, 60))
}
