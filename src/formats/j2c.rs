//! Raw JPEG 2000 codestreams: an SOC marker immediately followed by SIZ.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{hex, read_u32_be};

pub struct J2c;

impl FormatHandler for J2c {
    fn validate(&self, data: &[u8]) -> bool {
        hex(data, 0, 4) == "ff4fff51"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let width =
            read_u32_be(data, 8).ok_or_else(|| unexpected_eof!("when reading J2C width"))?;
        let height =
            read_u32_be(data, 12).ok_or_else(|| unexpected_eof!("when reading J2C height"))?;
        Ok(ImageSize::new(width, height))
    }
}
