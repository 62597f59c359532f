//! Adobe Photoshop documents.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{read_u32_be, utf8};

pub struct Psd;

impl FormatHandler for Psd {
    fn validate(&self, data: &[u8]) -> bool {
        utf8(data, 0, 4) == "8BPS"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let height =
            read_u32_be(data, 14).ok_or_else(|| unexpected_eof!("when reading PSD height"))?;
        let width =
            read_u32_be(data, 18).ok_or_else(|| unexpected_eof!("when reading PSD width"))?;
        Ok(ImageSize::new(width, height))
    }
}
