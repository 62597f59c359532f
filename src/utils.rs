//! Bounds-checked primitives for reading fixed-width integers and text out
//! of a byte buffer. Reads past the end of the buffer yield `None` and
//! slicing clamps instead of panicking, so truncated input degrades into
//! recoverable parse failures.

use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Endian {
    Little,
    Big,
}

#[inline]
pub fn byte(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

#[inline]
pub fn read_u16(data: &[u8], offset: usize, endian: Endian) -> Option<u16> {
    let s = data.get(offset..offset.checked_add(2)?)?;
    Some(match endian {
        Endian::Little => LittleEndian::read_u16(s),
        Endian::Big => BigEndian::read_u16(s),
    })
}

#[inline]
pub fn read_u32(data: &[u8], offset: usize, endian: Endian) -> Option<u32> {
    let s = data.get(offset..offset.checked_add(4)?)?;
    Some(match endian {
        Endian::Little => LittleEndian::read_u32(s),
        Endian::Big => BigEndian::read_u32(s),
    })
}

#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
    read_u16(data, offset, Endian::Little)
}

#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
    read_u16(data, offset, Endian::Big)
}

#[inline]
pub fn read_u24_le(data: &[u8], offset: usize) -> Option<u32> {
    let s = data.get(offset..offset.checked_add(3)?)?;
    Some(LittleEndian::read_u24(s))
}

#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    read_u32(data, offset, Endian::Little)
}

#[inline]
pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    read_u32(data, offset, Endian::Big)
}

#[inline]
pub fn read_i32_le(data: &[u8], offset: usize) -> Option<i32> {
    let s = data.get(offset..offset.checked_add(4)?)?;
    Some(LittleEndian::read_i32(s))
}

/// Returns `data[start..end]` with both indices clamped to the buffer
/// length. Never copies, never panics.
#[inline]
pub fn slice(data: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(data.len());
    let start = start.min(end);
    &data[start..end]
}

/// Lossily decodes a clamped byte range as UTF-8.
#[inline]
pub fn utf8(data: &[u8], start: usize, end: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(slice(data, start, end))
}

/// Renders a clamped byte range as a lowercase hex string.
#[inline]
pub fn hex(data: &[u8], start: usize, end: usize) -> String {
    hex::encode(slice(data, start, end))
}
