//! Windows bitmaps.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{read_i32_le, read_u32_le, slice};

pub struct Bmp;

impl FormatHandler for Bmp {
    fn validate(&self, data: &[u8]) -> bool {
        slice(data, 0, 2) == b"BM"
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let width = read_u32_le(data, 18).ok_or_else(|| unexpected_eof!("when reading BMP width"))?;
        // The height field is signed: a negative value marks a top-down row
        // order, the magnitude is the dimension.
        let height =
            read_i32_le(data, 22).ok_or_else(|| unexpected_eof!("when reading BMP height"))?;
        Ok(ImageSize::new(width, height.unsigned_abs()))
    }
}
