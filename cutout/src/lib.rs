//! Cutout - interactive foreground extraction for Rust
//!
//! Select a region of a photograph, separate foreground from
//! background inside it, correct the result interactively with
//! scribbles, and composite the subject over a transparent, solid
//! color, or replacement background.
//!
//! # Overview
//!
//! The pipeline runs bounding box -> trimap -> energy minimization ->
//! mask refinement -> correction rounds -> compositing:
//!
//! - [`Trimap`] construction from a [`Region`], via
//!   [`session::CorrectionSession`] or directly through
//!   [`segment::SegmentationEngine`]
//! - Mask cleanup and feathering in [`filter::refine`]
//! - Background replacement in [`composite::composite`]
//!
//! # Example
//!
//! ```
//! use cutout::{Color, Region};
//! use cutout::composite::{composite, Background};
//! use cutout::segment::MixtureMinimizer;
//! use cutout::session::{CorrectionSession, SessionConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A 60x60 two-tone image: bright 20x20 block on dark ground.
//! let mut image = cutout::Raster::filled(60, 60, Color::new(20, 20, 20))?;
//! for y in 20..40 {
//!     for x in 20..40 {
//!         image.set_pixel(x, y, &[240, 240, 240])?;
//!     }
//! }
//!
//! let session = CorrectionSession::begin(
//!     image.clone(),
//!     Region::new(10, 10, 40, 40),
//!     MixtureMinimizer::default(),
//!     SessionConfig::default(),
//! )?;
//! let mask = session.accept();
//!
//! let output = composite(&image, &mask, &Background::Solid(Color::new(0, 0, 255)))?;
//! assert_eq!(output.dimensions(), (60, 60));
//! # Ok(())
//! # }
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cutout_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use cutout_composite as composite;
pub use cutout_filter as filter;
pub use cutout_io as io;
pub use cutout_morph as morph;
pub use cutout_segment as segment;
pub use cutout_session as session;
pub use cutout_transform as transform;
