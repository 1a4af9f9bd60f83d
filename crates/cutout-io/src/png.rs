//! PNG image format support
//!
//! PNG is the lossless container the surrounding tooling uses; the
//! core pipeline itself mandates no encoded format. Only 8-bit
//! grayscale, RGB, and RGBA files are supported - PNG stores color
//! channels in red-first order, so rows are swapped to and from the
//! library's blue-first layout on the way through.

use crate::{IoError, IoResult};
use cutout_core::{AlphaMask, ChannelLayout, Raster};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let layout = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => ChannelLayout::Gray,
        (ColorType::Rgb, BitDepth::Eight) => ChannelLayout::Bgr,
        (ColorType::Rgba, BitDepth::Eight) => ChannelLayout::Bgra,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let channels = layout.channels() as usize;
    let bytes_per_row = output_info.line_size;
    let src = &buf[..output_info.buffer_size()];

    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    for y in 0..height as usize {
        let row = &src[y * bytes_per_row..y * bytes_per_row + width as usize * channels];
        match layout {
            ChannelLayout::Gray => data.extend_from_slice(row),
            ChannelLayout::Bgr => {
                for px in row.chunks_exact(3) {
                    data.extend_from_slice(&[px[2], px[1], px[0]]);
                }
            }
            ChannelLayout::Bgra => {
                for px in row.chunks_exact(4) {
                    data.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
                }
            }
        }
    }

    Ok(Raster::from_vec(width, height, layout, data)?)
}

/// Write a raster as a PNG image.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let color_type = match raster.layout() {
        ChannelLayout::Gray => ColorType::Grayscale,
        ChannelLayout::Bgr => ColorType::Rgb,
        ChannelLayout::Bgra => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(raster.data().len());
    match raster.layout() {
        ChannelLayout::Gray => data.extend_from_slice(raster.data()),
        ChannelLayout::Bgr => {
            for px in raster.data().chunks_exact(3) {
                data.extend_from_slice(&[px[2], px[1], px[0]]);
            }
        }
        ChannelLayout::Bgra => {
            for px in raster.data().chunks_exact(4) {
                data.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

/// Write an opacity mask as an 8-bit grayscale PNG.
pub fn write_mask_png<W: Write>(mask: &AlphaMask, writer: W) -> IoResult<()> {
    let raster = Raster::from_vec(
        mask.width(),
        mask.height(),
        ChannelLayout::Gray,
        mask.data().to_vec(),
    )?;
    write_png(&raster, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutout_core::Color;
    use std::io::Cursor;

    fn roundtrip(raster: &Raster) -> Raster {
        let mut encoded = Vec::new();
        write_png(raster, &mut encoded).unwrap();
        read_png(Cursor::new(encoded)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_bgr() {
        let mut raster = Raster::filled(5, 4, Color::new(10, 20, 30)).unwrap();
        raster.set_pixel(2, 2, &[200, 100, 50]).unwrap();
        assert_eq!(roundtrip(&raster), raster);
    }

    #[test]
    fn test_png_roundtrip_bgra() {
        let mut raster = Raster::new(3, 3, ChannelLayout::Bgra).unwrap();
        raster.set_pixel(1, 1, &[1, 2, 3, 128]).unwrap();
        assert_eq!(roundtrip(&raster), raster);
    }

    #[test]
    fn test_png_roundtrip_gray() {
        let raster =
            Raster::from_vec(4, 1, ChannelLayout::Gray, vec![0, 85, 170, 255]).unwrap();
        assert_eq!(roundtrip(&raster), raster);
    }

    #[test]
    fn test_mask_writes_as_grayscale() {
        let mask = AlphaMask::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
        let mut encoded = Vec::new();
        write_mask_png(&mask, &mut encoded).unwrap();

        let decoded = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(decoded.layout(), ChannelLayout::Gray);
        assert_eq!(decoded.data(), mask.data());
    }
}
