//! Windows cursors: an ICO directory whose type field is 2. Entry layout is
//! identical, so the size logic lives in [`super::ico`].

use super::ico;
use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};

pub struct Cur;

impl FormatHandler for Cur {
    fn validate(&self, data: &[u8]) -> bool {
        ico::validate_header(data, ico::TYPE_CURSOR)
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        ico::calculate(data)
    }
}
