//! GIF images. Both the 87a and 89a flavors carry the logical screen size
//! right after the six-byte signature.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::read_u16_le;

pub struct Gif;

impl FormatHandler for Gif {
    fn validate(&self, data: &[u8]) -> bool {
        matches!(data.get(0..6), Some(b"GIF87a") | Some(b"GIF89a"))
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let width =
            read_u16_le(data, 6).ok_or_else(|| unexpected_eof!("when reading GIF width"))?;
        let height =
            read_u16_le(data, 8).ok_or_else(|| unexpected_eof!("when reading GIF height"))?;
        Ok(ImageSize::new(u32::from(width), u32::from(height)))
    }
}
