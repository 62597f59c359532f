//! DirectDraw surfaces.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::read_u32_le;

/// "DDS " as a little-endian u32.
const DDS_MAGIC: u32 = 0x2053_4444;

pub struct Dds;

impl FormatHandler for Dds {
    fn validate(&self, data: &[u8]) -> bool {
        read_u32_le(data, 0) == Some(DDS_MAGIC)
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let height =
            read_u32_le(data, 12).ok_or_else(|| unexpected_eof!("when reading DDS height"))?;
        let width =
            read_u32_le(data, 16).ok_or_else(|| unexpected_eof!("when reading DDS width"))?;
        Ok(ImageSize::new(width, height))
    }
}
