//! SVG images. The only text-first format here: the buffer is decoded as
//! UTF-8 and the `<svg ...>` root tag is searched for `width`, `height` and
//! `viewBox` attributes. Lengths with unit suffixes are converted to pixels
//! with the CSS conversion factors.

use std::sync::LazyLock;

use regex::Regex;

use crate::traits::FormatHandler;
use crate::types::{ImageSize, Result};
use crate::utils::utf8;

static ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<svg\s([^>"']|"[^"]*"|'[^']*')*>"#).unwrap());
// The attribute patterns reject percentage values; quote pairing is spelled
// out as an alternation since backreferences are unavailable.
static WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\swidth=(?:"([^%"]+?)"|'([^%']+?)')"#).unwrap());
static HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sheight=(?:"([^%"]+?)"|'([^%']+?)')"#).unwrap());
static VIEWBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\sviewBox=(?:"([^"]+?)"|'([^']+?)')"#).unwrap());
static LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9.]+(?:e\d+)?)(in|cm|em|ex|m|mm|pc|pt|px)?$").unwrap());

const INCH_CM: f64 = 2.54;

fn unit_factor(unit: &str) -> f64 {
    match unit {
        "in" => 96.0,
        "cm" => 96.0 / INCH_CM,
        "em" => 16.0,
        "ex" => 8.0,
        "m" => 96.0 / INCH_CM * 100.0,
        "mm" => 96.0 / INCH_CM / 10.0,
        "pc" => 96.0 / 72.0 / 12.0,
        "pt" => 96.0 / 72.0,
        _ => 1.0,
    }
}

/// Resolves a length such as `2in` or `37.5` to whole pixels. Unparseable
/// input resolves to 0, which callers treat as "attribute absent".
fn parse_length(value: &str) -> u32 {
    let Some(captures) = LENGTH.captures(value) else {
        return 0;
    };
    let number: f64 = match captures[1].parse() {
        Ok(n) => n,
        Err(_) => return 0,
    };
    let factor = captures
        .get(2)
        .map_or(1.0, |unit| unit_factor(unit.as_str()));
    (number * factor).round() as u32
}

fn attribute(pattern: &Regex, root: &str) -> u32 {
    pattern
        .captures(root)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map_or(0, |value| parse_length(value.as_str()))
}

/// `viewBox="min-x min-y width height"`; only the extent matters here.
fn parse_viewbox(root: &str) -> Option<(u32, u32)> {
    let captures = VIEWBOX.captures(root)?;
    let value = captures.get(1).or_else(|| captures.get(2))?.as_str();
    let mut bounds = value.split_whitespace().skip(2);
    let width = parse_length(bounds.next()?);
    let height = parse_length(bounds.next()?);
    (width > 0 && height > 0).then_some((width, height))
}

pub struct Svg;

impl FormatHandler for Svg {
    fn validate(&self, data: &[u8]) -> bool {
        ROOT.is_match(&utf8(data, 0, data.len()))
    }

    fn calculate(&self, data: &[u8]) -> Result<ImageSize> {
        let text = utf8(data, 0, data.len());
        let root = ROOT
            .find(&text)
            .ok_or_else(|| invalid_format!("invalid SVG"))?
            .as_str();

        let width = attribute(&WIDTH, root);
        let height = attribute(&HEIGHT, root);

        if width > 0 && height > 0 {
            return Ok(ImageSize::new(width, height));
        }

        if let Some((vb_width, vb_height)) = parse_viewbox(root) {
            let ratio = f64::from(vb_width) / f64::from(vb_height);
            return Ok(if width > 0 {
                ImageSize::new(width, (f64::from(width) / ratio).floor() as u32)
            } else if height > 0 {
                ImageSize::new((f64::from(height) * ratio).floor() as u32, height)
            } else {
                ImageSize::new(vb_width, vb_height)
            });
        }

        Err(invalid_format!("invalid SVG"))
    }
}
