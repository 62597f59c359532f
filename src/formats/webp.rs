//! WebP images: a RIFF container whose first chunk decides the flavor,
//! `VP8X` (extended), `VP8 ` (lossy) or `VP8L` (lossless). Each flavor
//! stores its dimensions differently inside the 10 bytes following the
//! chunk header.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{byte, hex, read_u16_le, read_u24_le, slice, utf8};

/// Extended header: 3-byte little-endian width/height, both minus one, past
/// a flags byte and 3 reserved bytes.
fn calculate_extended(chunk: &[u8]) -> Result<ImageSize> {
    let width =
        read_u24_le(chunk, 4).ok_or_else(|| unexpected_eof!("when reading WebP width"))?;
    let height =
        read_u24_le(chunk, 7).ok_or_else(|| unexpected_eof!("when reading WebP height"))?;
    Ok(ImageSize::new(width + 1, height + 1))
}

/// Lossy frame header: two little-endian 16-bit fields masked to 14 bits.
fn calculate_lossy(chunk: &[u8]) -> Result<ImageSize> {
    let width =
        read_u16_le(chunk, 6).ok_or_else(|| unexpected_eof!("when reading WebP width"))?;
    let height =
        read_u16_le(chunk, 8).ok_or_else(|| unexpected_eof!("when reading WebP height"))?;
    Ok(ImageSize::new(
        u32::from(width & 0x3fff),
        u32::from(height & 0x3fff),
    ))
}

/// Lossless bitstream: 14-bit width and height packed across four bytes,
/// both minus one.
fn calculate_lossless(chunk: &[u8]) -> Result<ImageSize> {
    let bytes = chunk
        .get(1..5)
        .ok_or_else(|| unexpected_eof!("when reading WebP bitstream header"))?;
    let width = 1 + ((u32::from(bytes[1] & 0x3f) << 8) | u32::from(bytes[0]));
    let height = 1
        + ((u32::from(bytes[3] & 0x0f) << 10)
            | (u32::from(bytes[2]) << 2)
            | (u32::from(bytes[1] & 0xc0) >> 6));
    Ok(ImageSize::new(width, height))
}

pub struct Webp;

impl FormatHandler for Webp {
    fn validate(&self, data: &[u8]) -> bool {
        utf8(data, 0, 4) == "RIFF" && utf8(data, 8, 12) == "WEBP" && utf8(data, 12, 15) == "VP8"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let chunk_type = utf8(data, 12, 16).into_owned();
        let chunk = slice(data, 20, 30);

        if chunk_type == "VP8X" {
            let flags =
                byte(chunk, 0).ok_or_else(|| unexpected_eof!("when reading WebP flags"))?;
            // Two reserved bit ranges must be clear.
            if flags & 0xc0 == 0 && flags & 0x01 == 0 {
                return calculate_extended(chunk);
            }
            return Err(invalid_format!("invalid WebP"));
        }

        if chunk_type == "VP8 " && byte(chunk, 0) != Some(0x2f) {
            return calculate_lossy(chunk);
        }

        if chunk_type == "VP8L" && hex(chunk, 3, 6) != "9d012a" {
            return calculate_lossless(chunk);
        }

        Err(invalid_format!("invalid WebP"))
    }
}
