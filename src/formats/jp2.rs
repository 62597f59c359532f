//! JP2 images: a box-structured JPEG 2000 container. The signature box must
//! be followed by `ftyp`; the dimensions live in the `ihdr` box, reached
//! either directly through `jp2h` or past an `rreq` reader-requirements
//! table.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{hex, read_u16_be, read_u32_be, slice, utf8};

const BOX_JP: &str = "6a502020";
const BOX_FTYP: &str = "66747970";
const BOX_JP2H: &str = "6a703268";
const BOX_RREQ: &str = "72726571";

/// The `rreq` box body: a one-byte mask unit, a standard-flags table, then
/// a vendor-features table, both length-prefixed with 16-bit counts.
fn rreq_length(body: &[u8]) -> Result<usize> {
    let unit = body
        .first()
        .copied()
        .ok_or_else(|| unexpected_eof!("when reading rreq mask length"))? as usize;

    let mut offset = 1 + 2 * unit;
    let num_standard_flags = read_u16_be(body, offset)
        .ok_or_else(|| unexpected_eof!("when reading rreq standard flag count"))?
        as usize;
    offset += 2 + num_standard_flags * (2 + unit);

    let num_vendor_features = read_u16_be(body, offset)
        .ok_or_else(|| unexpected_eof!("when reading rreq vendor feature count"))?
        as usize;
    Ok(offset + 2 + num_vendor_features * (16 + unit))
}

/// `box_data` starts 8 bytes before the `ihdr` contents: height and width
/// are big-endian u32s at offsets 4 and 8 of the slice.
fn parse_ihdr(box_data: &[u8]) -> Result<ImageSize> {
    let height =
        read_u32_be(box_data, 4).ok_or_else(|| unexpected_eof!("when reading JP2 height"))?;
    let width =
        read_u32_be(box_data, 8).ok_or_else(|| unexpected_eof!("when reading JP2 width"))?;
    Ok(ImageSize::new(width, height))
}

pub struct Jp2;

impl FormatHandler for Jp2 {
    fn validate(&self, data: &[u8]) -> bool {
        let signature_length = match read_u32_be(data, 0) {
            Some(n) => n as usize,
            None => return false,
        };
        if hex(data, 4, 8) != BOX_JP || signature_length < 1 {
            return false;
        }

        let ftyp_start = signature_length + 4;
        let ftyp_length = match read_u32_be(data, signature_length) {
            Some(n) => n as usize,
            None => return false,
        };
        let ftyp_box = slice(data, ftyp_start, ftyp_start.saturating_add(ftyp_length));
        hex(ftyp_box, 0, 4) == BOX_FTYP
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let signature_length = read_u32_be(data, 0)
            .ok_or_else(|| unexpected_eof!("when reading JP2 signature box length"))?
            as usize;
        let ftyp_length = read_u16_be(data, signature_length + 2)
            .ok_or_else(|| unexpected_eof!("when reading JP2 ftyp box length"))?
            as usize;

        // Lands on the type field of the box following ftyp.
        let mut offset = signature_length + 4 + ftyp_length;

        match hex(data, offset, offset + 4).as_str() {
            BOX_RREQ => {
                // 4 skips the box type, the second 4 the rreq box length.
                offset = offset + 4 + 4 + rreq_length(slice(data, offset + 4, data.len()))?;
                parse_ihdr(slice(data, offset + 8, offset + 24))
            }
            BOX_JP2H => parse_ihdr(slice(data, offset + 8, offset + 24)),
            _ => Err(invalid_format!(
                "unsupported JP2 box: {:?}",
                utf8(data, offset, offset + 4)
            )),
        }
    }
}
