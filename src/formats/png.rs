//! PNG images, including "fried" PNGs: Apple-optimized files with a
//! nonstandard `CgBI` chunk in front of `IHDR` that shifts every header
//! offset by 16 bytes.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::{read_u32_be, utf8};

const PNG_SIGNATURE: &str = "PNG\r\n\x1a\n";
const IHDR_CHUNK: &str = "IHDR";
const FRIED_CHUNK: &str = "CgBI";

fn is_fried(data: &[u8]) -> bool {
    utf8(data, 12, 16) == FRIED_CHUNK
}

pub struct Png;

impl FormatHandler for Png {
    fn validate(&self, data: &[u8]) -> bool {
        if utf8(data, 1, 8) != PNG_SIGNATURE {
            return false;
        }
        let mut chunk = utf8(data, 12, 16);
        if chunk == FRIED_CHUNK {
            chunk = utf8(data, 28, 32);
        }
        chunk == IHDR_CHUNK
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let offset = if is_fried(data) { 32 } else { 16 };
        let width = read_u32_be(data, offset)
            .ok_or_else(|| unexpected_eof!("when reading PNG width"))?;
        let height = read_u32_be(data, offset + 4)
            .ok_or_else(|| unexpected_eof!("when reading PNG height"))?;
        Ok(ImageSize::new(width, height))
    }
}
