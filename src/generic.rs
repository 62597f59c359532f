use tracing::{debug, trace};

use crate::formats;
use crate::traits::FormatHandler;
use crate::types::{ImageResult, ImageType};

fn handler(format: ImageType) -> &'static dyn FormatHandler {
    match format {
        ImageType::Bmp => &formats::bmp::Bmp,
        ImageType::Cur => &formats::cur::Cur,
        ImageType::Dds => &formats::dds::Dds,
        ImageType::Gif => &formats::gif::Gif,
        ImageType::Icns => &formats::icns::Icns,
        ImageType::Ico => &formats::ico::Ico,
        ImageType::J2c => &formats::j2c::J2c,
        ImageType::Jp2 => &formats::jp2::Jp2,
        ImageType::Jpg => &formats::jpeg::Jpeg,
        ImageType::Ktx => &formats::ktx::Ktx,
        ImageType::Png => &formats::png::Png,
        ImageType::Pnm => &formats::pnm::Pnm,
        ImageType::Psd => &formats::psd::Psd,
        ImageType::Svg => &formats::svg::Svg,
        ImageType::Tga => &formats::tga::Tga,
        ImageType::Webp => &formats::webp::Webp,
    }
}

/// Formats whose signatures pin down the first byte of the file, so a
/// single table lookup usually avoids running every validator.
fn fast_path(first: u8) -> Option<ImageType> {
    match first {
        0x38 => Some(ImageType::Psd),
        0x42 => Some(ImageType::Bmp),
        0x44 => Some(ImageType::Dds),
        0x47 => Some(ImageType::Gif),
        0x52 => Some(ImageType::Webp),
        0x69 => Some(ImageType::Icns),
        0x89 => Some(ImageType::Png),
        0xff => Some(ImageType::Jpg),
        _ => None,
    }
}

/// Identifies the format of the buffer, if any.
///
/// The first byte short-circuits to the most likely candidate; if that
/// candidate's validator rejects the buffer, or the first byte matches no
/// candidate, every registered format is tried in [`ImageType::ALL`] order.
/// An empty or too-short buffer matches nothing.
pub fn image_type(data: &[u8]) -> Option<ImageType> {
    if let Some(candidate) = data.first().and_then(|&b| fast_path(b)) {
        if handler(candidate).validate(data) {
            return Some(candidate);
        }
    }

    ImageType::ALL
        .into_iter()
        .find(|&format| handler(format).validate(data))
}

/// Detects the format of a complete buffer and computes its size.
///
/// Returns `None` when no format is identified or when the identified
/// format's header cannot be parsed out of this buffer; there is no more
/// data coming, so a handler failure is terminal here.
pub fn size_from_buffer(data: &[u8]) -> Option<ImageResult> {
    let format = image_type(data)?;
    trace!(format = %format, len = data.len(), "format identified");

    match handler(format).calculate(data) {
        Ok(size) => Some(ImageResult { format, size }),
        Err(e) => {
            debug!(format = %format, error = %e, "size calculation failed");
            None
        }
    }
}
