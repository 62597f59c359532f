//! One handler per supported container format.
//!
//! Each module exposes a unit struct implementing
//! [`FormatHandler`](crate::FormatHandler); the detector in the crate root
//! owns the registration order, so the modules here know nothing about each
//! other.

pub mod bmp;
pub mod cur;
pub mod dds;
pub mod gif;
pub mod icns;
pub mod ico;
pub mod j2c;
pub mod jp2;
pub mod jpeg;
pub mod ktx;
pub mod png;
pub mod pnm;
pub mod psd;
pub mod svg;
pub mod tga;
pub mod webp;
