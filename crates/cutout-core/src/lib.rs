//! cutout-core - Basic data structures for foreground extraction
//!
//! This crate provides the fundamental data structures used throughout
//! the cutout library:
//!
//! - [`Raster`] - Interleaved 8-bit image buffer (Gray / Bgr / Bgra)
//! - [`Region`] - Rectangular bounding box in full-image coordinates
//! - [`Trimap`] - Four-way per-pixel classification seeding segmentation
//! - [`BinaryMask`] / [`AlphaMask`] - Hard and feathered masks
//! - [`Scribble`] - User correction strokes and their rasterization

pub mod error;
pub mod graphics;
pub mod mask;
pub mod raster;
pub mod region;
pub mod scribble;
pub mod trimap;

pub use error::{Error, Result};
pub use mask::{AlphaMask, BinaryMask};
pub use raster::{ChannelLayout, Color, Raster};
pub use region::Region;
pub use scribble::{Scribble, ScribbleLabel, Segment};
pub use trimap::{Trimap, TrimapLabel};
