//! Netpbm family: PBM/PGM/PPM (plain and raw), PAM and PFM. The header is
//! text, so the dimension fields are parsed out of whitespace-separated
//! lines rather than fixed offsets.

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::utf8;

const TAGS: [&[u8]; 8] = [b"P1", b"P2", b"P3", b"P4", b"P5", b"P6", b"P7", b"PF"];

/// Only lines closed by a line terminator are eligible: the trailing
/// partial line of a growing buffer may hold a truncated number, and
/// parsing it would report a wrong size that more data later contradicts.
fn terminated_lines(text: &str) -> impl Iterator<Item = &str> {
    let terminated = match text.rfind(['\r', '\n']) {
        Some(pos) => &text[..pos + 1],
        None => "",
    };
    terminated
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
}

/// Every variant except PAM: the first line that is not a `#` comment holds
/// width and height.
fn parse_default(text: &str) -> Result<ImageSize> {
    for line in terminated_lines(text) {
        if line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let dimensions = (fields.next(), fields.next(), fields.next());
        if let (Some(width), Some(height), None) = dimensions {
            if let (Ok(width), Ok(height)) = (width.parse(), height.parse()) {
                return Ok(ImageSize::new(width, height));
            }
        }
        break;
    }
    Err(invalid_format!("invalid PNM"))
}

/// PAM: `KEY VALUE` lines up to `ENDHDR`, scanned case-insensitively for
/// WIDTH and HEIGHT. Long or non-ASCII-looking lines are skipped, since the
/// binary raster follows the header in the same buffer.
fn parse_pam(text: &str) -> Result<ImageSize> {
    let mut width = None;
    let mut height = None;

    for line in terminated_lines(text) {
        if line.len() > 16 || line.as_bytes().first().is_some_and(|&b| b > 128) {
            continue;
        }
        let mut fields = line.split_whitespace();
        if let (Some(key), Some(value)) = (fields.next(), fields.next()) {
            if key.eq_ignore_ascii_case("width") {
                width = value.parse::<u32>().ok();
            } else if key.eq_ignore_ascii_case("height") {
                height = value.parse::<u32>().ok();
            }
        }
        if width.is_some() && height.is_some() {
            break;
        }
    }

    match (width, height) {
        (Some(width), Some(height)) => Ok(ImageSize::new(width, height)),
        _ => Err(invalid_format!("invalid PAM")),
    }
}

pub struct Pnm;

impl FormatHandler for Pnm {
    fn validate(&self, data: &[u8]) -> bool {
        data.get(0..2).is_some_and(|tag| TAGS.contains(&tag))
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let is_pam = data.get(0..2) == Some(b"P7");
        // The header text starts past the tag and its separator.
        let text = utf8(data, 3, data.len());
        if is_pam {
            parse_pam(&text)
        } else {
            parse_default(&text)
        }
    }
}
