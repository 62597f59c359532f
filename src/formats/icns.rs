//! Apple icon images: an 8-byte file header followed by a list of icon
//! entries, each tagged with an OSType whose pixel size is fixed by
//! convention.

use std::str;

use crate::traits::FormatHandler;
use crate::types::{Dimensions, ImageSize, Result, SubImage};
use crate::utils::{read_u32_be, utf8};

/// Magic (4) + big-endian file length (4).
const HEADER_SIZE: usize = 8;

/// OSType tag (4) + big-endian entry length (4), length includes this
/// header.
const ENTRY_HEADER_SIZE: usize = 8;

/// Every known OSType tag and the square pixel size it stands for.
static ICON_TYPE_SIZE: &[(&str, u32)] = &[
    ("ICON", 32),
    ("ICN#", 32),
    ("icm#", 16),
    ("icm4", 16),
    ("icm8", 16),
    ("ics#", 16),
    ("ics4", 16),
    ("ics8", 16),
    ("is32", 16),
    ("s8mk", 16),
    ("icp4", 16),
    ("icl4", 32),
    ("icl8", 32),
    ("il32", 32),
    ("l8mk", 32),
    ("icp5", 32),
    ("ic11", 32),
    ("ich4", 48),
    ("ich8", 48),
    ("ih32", 48),
    ("h8mk", 48),
    ("icp6", 64),
    ("ic12", 32),
    ("it32", 128),
    ("t8mk", 128),
    ("ic07", 128),
    ("ic08", 256),
    ("ic13", 256),
    ("ic09", 512),
    ("ic14", 512),
    ("ic10", 1024),
];

struct Entry {
    image: SubImage,
    length: usize,
}

fn read_entry(data: &[u8], offset: usize) -> Result<Entry> {
    let tag = data
        .get(offset..offset + 4)
        .and_then(|t| str::from_utf8(t).ok())
        .ok_or_else(|| unexpected_eof!("when reading icon type at offset {}", offset))?;
    let length = read_u32_be(data, offset + 4)
        .ok_or_else(|| unexpected_eof!("when reading icon entry length at offset {}", offset))?
        as usize;
    if length < ENTRY_HEADER_SIZE {
        return Err(invalid_format!("bad ICNS entry length {}", length));
    }

    let (kind, size) = ICON_TYPE_SIZE
        .iter()
        .find(|&&(t, _)| t == tag)
        .copied()
        .ok_or_else(|| invalid_format!("unknown ICNS icon type {:?}", tag))?;

    Ok(Entry {
        image: SubImage {
            dimensions: Dimensions::new(size, size),
            kind: Some(kind),
        },
        length,
    })
}

pub struct Icns;

impl FormatHandler for Icns {
    fn validate(&self, data: &[u8]) -> bool {
        utf8(data, 0, 4) == "icns"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let file_length = read_u32_be(data, 4)
            .ok_or_else(|| unexpected_eof!("when reading ICNS file length"))?
            as usize;

        let mut offset = HEADER_SIZE;
        let first = read_entry(data, offset)?;
        offset += first.length;

        if offset == file_length {
            let mut size: ImageSize = first.image.dimensions.into();
            size.images = vec![first.image];
            return Ok(size);
        }

        let dimensions = first.image.dimensions;
        let mut images = vec![first.image];
        // Entries past the end of what has arrived so far are not waited
        // for; the walk stops at the buffer end.
        while offset < file_length && offset < data.len() {
            let entry = read_entry(data, offset)?;
            offset += entry.length;
            images.push(entry.image);
        }

        Ok(ImageSize {
            dimensions,
            orientation: None,
            images,
        })
    }
}
