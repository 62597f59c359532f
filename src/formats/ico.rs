//! Windows icons. The header layout is shared with cursors ([`super::cur`]);
//! only the type field at offset 2 differs.

use crate::traits::FormatHandler;
use crate::types::{Dimensions, ImageSize, Result, SubImage};
use crate::utils::{byte, read_u16_le};

const TYPE_ICON: u16 = 1;
pub(super) const TYPE_CURSOR: u16 = 2;

/// Reserved (2) + type (2) + image count (2).
const HEADER_SIZE: usize = 6;

/// Width, height, palette size, reserved, planes/hotspot-x, bpp/hotspot-y,
/// data size (4), data offset (4).
const ENTRY_SIZE: usize = 16;

pub(super) fn validate_header(data: &[u8], image_type: u16) -> bool {
    match (
        read_u16_le(data, 0),
        read_u16_le(data, 2),
        read_u16_le(data, 4),
    ) {
        (Some(0), Some(kind), Some(count)) => count > 0 && kind == image_type,
        _ => false,
    }
}

/// A width or height byte of 0 means 256 pixels.
fn entry_extent(data: &[u8], offset: usize) -> Option<u32> {
    byte(data, offset).map(|b| if b == 0 { 256 } else { u32::from(b) })
}

fn entry_dimensions(data: &[u8], index: usize) -> Result<Dimensions> {
    let offset = HEADER_SIZE + index * ENTRY_SIZE;
    let width = entry_extent(data, offset)
        .ok_or_else(|| unexpected_eof!("when reading width of icon entry {}", index))?;
    let height = entry_extent(data, offset + 1)
        .ok_or_else(|| unexpected_eof!("when reading height of icon entry {}", index))?;
    Ok(Dimensions::new(width, height))
}

pub(super) fn calculate(data: &[u8]) -> Result<ImageSize> {
    let count = read_u16_le(data, 4)
        .ok_or_else(|| unexpected_eof!("when reading icon image count"))? as usize;

    let first = entry_dimensions(data, 0)?;
    if count == 1 {
        return Ok(first.into());
    }

    let mut images = Vec::with_capacity(count);
    images.push(SubImage {
        dimensions: first,
        kind: None,
    });
    for index in 1..count {
        images.push(SubImage {
            dimensions: entry_dimensions(data, index)?,
            kind: None,
        });
    }

    Ok(ImageSize {
        dimensions: first,
        orientation: None,
        images,
    })
}

pub struct Ico;

impl FormatHandler for Ico {
    fn validate(&self, data: &[u8]) -> bool {
        validate_header(data, TYPE_ICON)
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        calculate(data)
    }
}
