//! Khronos KTX 11 textures.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{read_u32_le, utf8};

pub struct Ktx;

impl FormatHandler for Ktx {
    fn validate(&self, data: &[u8]) -> bool {
        utf8(data, 1, 7) == "KTX 11"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let width =
            read_u32_le(data, 36).ok_or_else(|| unexpected_eof!("when reading KTX width"))?;
        let height =
            read_u32_le(data, 40).ok_or_else(|| unexpected_eof!("when reading KTX height"))?;
        Ok(ImageSize::new(width, height))
    }
}
