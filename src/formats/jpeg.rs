//! JPEG images. There is no fixed-offset size field: the marker segments
//! after the SOI signature are walked until a baseline or progressive SOF
//! frame header turns up. EXIF APP1 blocks encountered on the way are
//! searched for the orientation tag.
//!
//! Only baseline (SOF0/SOF1) and progressive (SOF2) frames are recognized.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{byte, read_u16, read_u16_be, read_u32, slice, Endian};

/// TIFF header (6 bytes into the EXIF block): 2-byte alignment mark, magic,
/// then the offset of the first IFD, assumed to be 8, right after the
/// header itself.
const EXIF_HEADER_SIZE: usize = 6;
const IFD_OFFSET: usize = 8;

const IFD_ENTRY_SIZE: usize = 12;

/// EXIF tag 274.
const ORIENTATION_TAG: u16 = 274;

fn is_exif(segment: &[u8]) -> bool {
    segment.get(2..6) == Some(b"Exif")
}

/// Walks the IFD looking for the orientation tag: data format 3 (u16) with
/// exactly one component, anything else is ignored. Corrupt or truncated
/// tables yield `None` rather than an error; orientation is optional.
fn extract_orientation(exif_block: &[u8], endian: Endian) -> Option<u16> {
    let offset = EXIF_HEADER_SIZE + IFD_OFFSET;
    let entries = read_u16(exif_block, offset, endian)? as usize;

    for index in 0..entries {
        let start = offset + 2 + index * IFD_ENTRY_SIZE;
        if start > exif_block.len() {
            return None;
        }
        let entry = slice(exif_block, start, start + IFD_ENTRY_SIZE);

        let Some(tag) = read_u16(entry, 0, endian) else {
            continue;
        };
        if tag != ORIENTATION_TAG {
            continue;
        }

        if read_u16(entry, 2, endian) != Some(3) {
            return None;
        }
        // One u16 component; more would make the value field a pointer.
        if read_u32(entry, 4, endian) != Some(1) {
            return None;
        }
        return read_u16(entry, 8, endian);
    }

    None
}

/// `segment` starts at the 2-byte APP1 length; `length` is that segment
/// length. The EXIF block spans from past the length field to the end of
/// the segment.
fn exif_orientation(segment: &[u8], length: usize) -> Option<u16> {
    let exif_block = slice(segment, 2, length);
    let endian = match exif_block.get(EXIF_HEADER_SIZE..EXIF_HEADER_SIZE + 2) {
        Some(b"MM") => Endian::Big,
        Some(b"II") => Endian::Little,
        _ => return None,
    };
    extract_orientation(exif_block, endian)
}

pub struct Jpeg;

impl FormatHandler for Jpeg {
    fn validate(&self, data: &[u8]) -> bool {
        data.get(0..2) == Some(&[0xff, 0xd8][..])
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        // Past the SOI signature and the first marker's 0xFF id.
        let mut input = slice(data, 4, data.len());
        let mut orientation = None;

        while !input.is_empty() {
            let length = read_u16_be(input, 0)
                .ok_or_else(|| unexpected_eof!("when reading JPEG segment length"))?
                as usize;

            if is_exif(input) {
                orientation = exif_orientation(input, length);
            }

            if length > input.len() {
                return Err(invalid_format!("corrupt JPEG, exceeded buffer limits"));
            }
            // Every segment boundary must carry a fresh 0xFF marker byte.
            if byte(input, length) != Some(0xff) {
                return Err(invalid_format!("invalid JPEG, marker table corrupted"));
            }

            // 0xC0 baseline, 0xC1 extended baseline, 0xC2 progressive.
            if let Some(0xc0 | 0xc1 | 0xc2) = byte(input, length + 1) {
                let height = read_u16_be(input, length + 5)
                    .ok_or_else(|| unexpected_eof!("when reading JPEG height"))?;
                let width = read_u16_be(input, length + 7)
                    .ok_or_else(|| unexpected_eof!("when reading JPEG width"))?;

                let mut size = ImageSize::new(u32::from(width), u32::from(height));
                size.orientation = orientation.filter(|&o| o != 0);
                return Ok(size);
            }

            input = slice(input, length + 2, input.len());
        }

        Err(invalid_format!("invalid JPEG, no size found"))
    }
}
