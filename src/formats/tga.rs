//! Truevision TGA. The format has no magic number, so validation is a
//! heuristic over the color-map fields; the detector therefore tries TGA
//! late in the scan order.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::read_u16_le;

pub struct Tga;

impl FormatHandler for Tga {
    fn validate(&self, data: &[u8]) -> bool {
        read_u16_le(data, 0) == Some(0) && read_u16_le(data, 4) == Some(0)
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let width =
            read_u16_le(data, 12).ok_or_else(|| unexpected_eof!("when reading TGA width"))?;
        let height =
            read_u16_le(data, 14).ok_or_else(|| unexpected_eof!("when reading TGA height"))?;
        Ok(ImageSize::new(u32::from(width), u32::from(height)))
    }
}
