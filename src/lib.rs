//! imsize is a library for detecting the format of an image and extracting
//! its pixel dimensions (plus a few bits of format-specific metadata, like
//! EXIF orientation or multi-resolution icon lists) by reading headers only.
//! Pixel data is never decoded, so only the first few hundred bytes of a
//! file are usually needed.
//!
//! Sixteen container formats are supported: BMP, CUR, DDS, GIF, ICNS, ICO,
//! JPEG 2000 codestream (J2C), JP2, JPEG, KTX, PNG, PNM, PSD, SVG, TGA and
//! WebP.
//!
//! The input can be a complete buffer or a stream of chunks; in the latter
//! case detection is retried after every chunk until the header resolves or
//! the source runs dry. Malformed or truncated input is never fatal: the
//! worst observable outcome is an absent result.
//!
//! ```
//! let data = b"GIF89a\x40\x01\xf0\x00";
//! let result = imsize::size_from_buffer(data).unwrap();
//! assert_eq!(result.format, imsize::ImageType::Gif);
//! assert_eq!(result.size.dimensions, imsize::Dimensions::from((320, 240)));
//! ```

pub use crate::generic::{image_type, size_from_buffer};
#[cfg(feature = "tokio")]
pub use crate::stream::size_from_async_reader;
pub use crate::stream::{
    size_from_chunks, size_from_file, size_from_file_with_chunk_size, size_from_reader,
    size_from_reader_with_chunk_size, Accumulator, DEFAULT_CHUNK_SIZE,
};
pub use crate::traits::FormatHandler;
pub use crate::types::{Dimensions, Error, ImageResult, ImageSize, ImageType, Result, SubImage};

#[macro_use]
mod macros;
mod generic;
mod stream;
mod traits;
mod types;
mod utils;

pub mod formats;
