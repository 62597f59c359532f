use std::borrow::Cow;
use std::fmt;
use std::io;

use thiserror::Error as ThisError;

/// All the ways header inspection can fail.
///
/// None of these are fatal: the detector and the streaming accumulator
/// convert them to "try more data" or "no result".
#[derive(Debug, ThisError)]
pub enum Error {
    /// The buffer matched a format's signature but the structure behind it
    /// does not parse (missing marker, unsupported inner box, bad table).
    #[error("invalid image format: {0}")]
    InvalidFormat(Cow<'static, str>),

    /// The buffer ends before a field the parser needs. While streaming this
    /// simply means "not enough data yet".
    #[error("unexpected end of data: {0}")]
    UnexpectedEndOfData(Cow<'static, str>),

    /// An I/O error from one of the byte-source adapters.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Width and height of an image, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    #[inline]
    fn from((width, height): (u32, u32)) -> Dimensions {
        Dimensions { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One entry of a multi-resolution container (ICO, CUR, ICNS).
///
/// `kind` is the ICNS OSType tag of the entry; ICO and CUR entries carry no
/// per-entry tag.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SubImage {
    pub dimensions: Dimensions,
    pub kind: Option<&'static str>,
}

/// What a format handler's `calculate` produces: the primary dimensions
/// plus format-specific extras.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageSize {
    /// The primary dimensions. For multi-resolution containers this is the
    /// first entry's size.
    pub dimensions: Dimensions,
    /// EXIF orientation (tag 274), reported by the JPEG handler only and
    /// only when present and nonzero.
    pub orientation: Option<u16>,
    /// Every entry of a multi-resolution container, in file order. Empty
    /// for single-image formats and single-entry containers.
    pub images: Vec<SubImage>,
}

impl ImageSize {
    #[inline]
    pub fn new(width: u32, height: u32) -> ImageSize {
        Dimensions::new(width, height).into()
    }
}

impl From<Dimensions> for ImageSize {
    fn from(dimensions: Dimensions) -> ImageSize {
        ImageSize {
            dimensions,
            orientation: None,
            images: Vec::new(),
        }
    }
}

/// The set of supported image container formats.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ImageType {
    Bmp,
    Cur,
    Dds,
    Gif,
    Icns,
    Ico,
    J2c,
    Jp2,
    Jpg,
    Ktx,
    Png,
    Pnm,
    Psd,
    Svg,
    Tga,
    Webp,
}

impl ImageType {
    /// Every supported format, in the order the detector scans them.
    pub const ALL: [ImageType; 16] = [
        ImageType::Bmp,
        ImageType::Cur,
        ImageType::Dds,
        ImageType::Gif,
        ImageType::Icns,
        ImageType::Ico,
        ImageType::J2c,
        ImageType::Jp2,
        ImageType::Jpg,
        ImageType::Ktx,
        ImageType::Png,
        ImageType::Pnm,
        ImageType::Psd,
        ImageType::Svg,
        ImageType::Tga,
        ImageType::Webp,
    ];

    /// The conventional lowercase tag for this format.
    pub fn name(self) -> &'static str {
        match self {
            ImageType::Bmp => "bmp",
            ImageType::Cur => "cur",
            ImageType::Dds => "dds",
            ImageType::Gif => "gif",
            ImageType::Icns => "icns",
            ImageType::Ico => "ico",
            ImageType::J2c => "j2c",
            ImageType::Jp2 => "jp2",
            ImageType::Jpg => "jpg",
            ImageType::Ktx => "ktx",
            ImageType::Png => "png",
            ImageType::Pnm => "pnm",
            ImageType::Psd => "psd",
            ImageType::Svg => "svg",
            ImageType::Tga => "tga",
            ImageType::Webp => "webp",
        }
    }

    /// The MIME type commonly associated with this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageType::Bmp => "image/bmp",
            ImageType::Cur => "image/x-icon",
            ImageType::Dds => "image/vnd-ms.dds",
            ImageType::Gif => "image/gif",
            ImageType::Icns => "image/icns",
            ImageType::Ico => "image/x-icon",
            ImageType::J2c => "image/x-jp2-codestream",
            ImageType::Jp2 => "image/jp2",
            ImageType::Jpg => "image/jpeg",
            ImageType::Ktx => "image/ktx",
            ImageType::Png => "image/png",
            ImageType::Pnm => "image/x-portable-anymap",
            ImageType::Psd => "image/vnd.adobe.photoshop",
            ImageType::Svg => "image/svg+xml",
            ImageType::Tga => "image/x-tga",
            ImageType::Webp => "image/webp",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successful detection: the identified format and its size data.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageResult {
    pub format: ImageType,
    pub size: ImageSize,
}
