//! cutout-io - PNG input/output
//!
//! Reads and writes rasters and masks as 8-bit PNG files. The core
//! pipeline works on in-memory buffers; this crate is the boundary to
//! the filesystem for the tooling around it.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_mask_png, write_png};

use cutout_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG file into a raster.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a raster to a PNG file.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
