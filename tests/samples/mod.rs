//! Minimal valid header samples, built byte by byte per each format's
//! published layout.

#![allow(dead_code)]

/// 320x240.
pub fn gif() -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&320u16.to_le_bytes());
    data.extend_from_slice(&240u16.to_le_bytes());
    data.extend_from_slice(&[0xf7, 0x00, 0x00]);
    data
}

/// 800x600, with the height encoded as -600 (top-down row order).
pub fn bmp_top_down() -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.resize(18, 0);
    data.extend_from_slice(&800u32.to_le_bytes());
    data.extend_from_slice(&(-600i32).to_le_bytes());
    data
}

/// 1024x768.
pub fn dds() -> Vec<u8> {
    let mut data = b"DDS ".to_vec();
    data.extend_from_slice(&124u32.to_le_bytes()); // header size
    data.extend_from_slice(&0x1007u32.to_le_bytes()); // flags
    data.extend_from_slice(&768u32.to_le_bytes());
    data.extend_from_slice(&1024u32.to_le_bytes());
    data
}

/// 640x480.
pub fn png() -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&640u32.to_be_bytes());
    data.extend_from_slice(&480u32.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data
}

/// 640x480, CgBI-wrapped so the header sits 16 bytes deeper.
pub fn png_fried() -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&4u32.to_be_bytes());
    data.extend_from_slice(b"CgBI");
    data.extend_from_slice(&[0x50, 0x00, 0x20, 0x02]); // CgBI payload
    data.extend_from_slice(&[0, 0, 0, 0]); // CgBI crc
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&640u32.to_be_bytes());
    data.extend_from_slice(&480u32.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data
}

fn icon_directory(image_type: u16, entries: &[(u8, u8)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&image_type.to_le_bytes());
    data.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for &(width, height) in entries {
        let mut entry = [0u8; 16];
        entry[0] = width;
        entry[1] = height;
        data.extend_from_slice(&entry);
    }
    data
}

/// A single 256x256 entry (encoded as width/height bytes of 0).
pub fn ico_single() -> Vec<u8> {
    icon_directory(1, &[(0, 0)])
}

/// Entries 16x16, 32x32, 48x48.
pub fn ico_multi() -> Vec<u8> {
    icon_directory(1, &[(16, 16), (32, 32), (48, 48)])
}

/// A cursor with a single 32x32 entry.
pub fn cur() -> Vec<u8> {
    icon_directory(2, &[(32, 32)])
}

fn icns_from(entries: &[&[u8; 4]]) -> Vec<u8> {
    let file_length = 8 + 8 * entries.len() as u32;
    let mut data = b"icns".to_vec();
    data.extend_from_slice(&file_length.to_be_bytes());
    for tag in entries {
        data.extend_from_slice(*tag);
        data.extend_from_slice(&8u32.to_be_bytes());
    }
    data
}

/// One `ic07` entry: 128x128.
pub fn icns_single() -> Vec<u8> {
    icns_from(&[b"ic07"])
}

/// `is32` (16x16) followed by `ic08` (256x256).
pub fn icns_multi() -> Vec<u8> {
    icns_from(&[b"is32", b"ic08"])
}

/// 512x256.
pub fn j2c() -> Vec<u8> {
    let mut data = vec![0xff, 0x4f, 0xff, 0x51];
    data.extend_from_slice(&47u16.to_be_bytes()); // SIZ length
    data.extend_from_slice(&0u16.to_be_bytes()); // capabilities
    data.extend_from_slice(&512u32.to_be_bytes());
    data.extend_from_slice(&256u32.to_be_bytes());
    data
}

/// 512x256 inside a signature box, `ftyp` and a `jp2h`/`ihdr` pair.
pub fn jp2() -> Vec<u8> {
    let mut data = Vec::new();
    // signature box
    data.extend_from_slice(&12u32.to_be_bytes());
    data.extend_from_slice(b"jP  ");
    data.extend_from_slice(&[0x0d, 0x0a, 0x87, 0x0a]);
    // ftyp box, 20 bytes
    data.extend_from_slice(&20u32.to_be_bytes());
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(b"jp2 ");
    data.extend_from_slice(&0u32.to_be_bytes());
    data.extend_from_slice(b"jp2 ");
    // jp2h superbox holding ihdr
    data.extend_from_slice(&30u32.to_be_bytes());
    data.extend_from_slice(b"jp2h");
    data.extend_from_slice(&22u32.to_be_bytes());
    data.extend_from_slice(b"ihdr");
    data.extend_from_slice(&256u32.to_be_bytes()); // height
    data.extend_from_slice(&512u32.to_be_bytes()); // width
    data.extend_from_slice(&[0x00, 0x03, 0x07, 0x00, 0x00, 0x00]);
    data
}

/// 512x256 with an `rreq` reader-requirements box between `ftyp` and `jp2h`.
pub fn jp2_rreq() -> Vec<u8> {
    let mut data = Vec::new();
    // signature box
    data.extend_from_slice(&12u32.to_be_bytes());
    data.extend_from_slice(b"jP  ");
    data.extend_from_slice(&[0x0d, 0x0a, 0x87, 0x0a]);
    // ftyp box, 20 bytes
    data.extend_from_slice(&20u32.to_be_bytes());
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(b"jp2 ");
    data.extend_from_slice(&0u32.to_be_bytes());
    data.extend_from_slice(b"jp2 ");
    // rreq box: 1-byte mask unit, a mask pair, empty standard-flag and
    // vendor-feature tables
    data.extend_from_slice(&15u32.to_be_bytes());
    data.extend_from_slice(b"rreq");
    data.extend_from_slice(&[1, 0, 0]);
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());
    // jp2h superbox holding ihdr
    data.extend_from_slice(&30u32.to_be_bytes());
    data.extend_from_slice(b"jp2h");
    data.extend_from_slice(&22u32.to_be_bytes());
    data.extend_from_slice(b"ihdr");
    data.extend_from_slice(&256u32.to_be_bytes()); // height
    data.extend_from_slice(&512u32.to_be_bytes()); // width
    data.extend_from_slice(&[0x00, 0x03, 0x07, 0x00, 0x00, 0x00]);
    data
}

/// 1280x857, baseline, no EXIF.
pub fn jpeg() -> Vec<u8> {
    let mut data = vec![0xff, 0xd8, 0xff, 0xe0];
    data.extend_from_slice(&16u16.to_be_bytes()); // APP0 length
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    data.extend_from_slice(&[0xff, 0xc0]); // SOF0
    data.extend_from_slice(&17u16.to_be_bytes());
    data.push(8); // precision
    data.extend_from_slice(&857u16.to_be_bytes());
    data.extend_from_slice(&1280u16.to_be_bytes());
    data
}

/// 1280x857 with an EXIF APP1 carrying orientation 6.
pub fn jpeg_with_orientation() -> Vec<u8> {
    let mut data = vec![0xff, 0xd8, 0xff, 0xe1];
    data.extend_from_slice(&30u16.to_be_bytes()); // APP1 length
    data.extend_from_slice(b"Exif\0\0");
    data.extend_from_slice(b"II"); // little-endian TIFF
    data.extend_from_slice(&[0x2a, 0x00]);
    data.extend_from_slice(&8u32.to_le_bytes()); // first IFD offset
    data.extend_from_slice(&1u16.to_le_bytes()); // entry count
    data.extend_from_slice(&274u16.to_le_bytes()); // orientation tag
    data.extend_from_slice(&3u16.to_le_bytes()); // data format: u16
    data.extend_from_slice(&1u32.to_le_bytes()); // component count
    data.extend_from_slice(&6u32.to_le_bytes()); // value
    data.extend_from_slice(&[0xff, 0xc0]); // SOF0
    data.extend_from_slice(&17u16.to_be_bytes());
    data.push(8);
    data.extend_from_slice(&857u16.to_be_bytes());
    data.extend_from_slice(&1280u16.to_be_bytes());
    data
}

/// A JPEG whose second marker byte is not 0xFF.
pub fn jpeg_corrupt_marker() -> Vec<u8> {
    let mut data = jpeg();
    data[20] = 0x00; // was the 0xff introducing SOF0
    data
}

/// 256x128.
pub fn ktx() -> Vec<u8> {
    let mut data = vec![0xab];
    data.extend_from_slice(b"KTX 11");
    data.extend_from_slice(&[0xbb, 0x0d, 0x0a, 0x1a, 0x0a]);
    data.extend_from_slice(&0x04030201u32.to_le_bytes()); // endianness probe
    data.resize(36, 0);
    data.extend_from_slice(&256u32.to_le_bytes());
    data.extend_from_slice(&128u32.to_le_bytes());
    data.extend_from_slice(&[0; 8]);
    data
}

/// 640x480 raw PPM.
pub fn pnm() -> Vec<u8> {
    b"P6\n# sample\n640 480\n255\n".to_vec()
}

/// 640x480 PAM.
pub fn pnm_pam() -> Vec<u8> {
    b"P7\nWIDTH 640\nDEPTH 3\nHEIGHT 480\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n".to_vec()
}

/// 300x200.
pub fn psd() -> Vec<u8> {
    let mut data = b"8BPS".to_vec();
    data.extend_from_slice(&1u16.to_be_bytes()); // version
    data.extend_from_slice(&[0; 6]); // reserved
    data.extend_from_slice(&3u16.to_be_bytes()); // channels
    data.extend_from_slice(&200u32.to_be_bytes());
    data.extend_from_slice(&300u32.to_be_bytes());
    data
}

/// 100x50 via explicit attributes.
pub fn svg() -> Vec<u8> {
    br#"<svg xmlns="http://www.w3.org/2000/svg" width="100px" height="50px"></svg>"#.to_vec()
}

/// 100x50 via the viewBox alone.
pub fn svg_viewbox() -> Vec<u8> {
    br#"<svg viewBox="0 0 100 50"></svg>"#.to_vec()
}

/// 320x200, uncompressed true-color.
pub fn tga() -> Vec<u8> {
    let mut data = vec![0u8; 12];
    data[2] = 2; // image type
    data.extend_from_slice(&320u16.to_le_bytes());
    data.extend_from_slice(&200u16.to_le_bytes());
    data.extend_from_slice(&[24, 0]);
    data
}

fn riff_webp(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&(12 + payload.len() as u32).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(chunk_type);
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// 800x600 extended WebP: dims are stored minus one (799, 599).
pub fn webp_vp8x() -> Vec<u8> {
    let mut payload = vec![0x00, 0x00, 0x00, 0x00]; // flags + reserved
    payload.extend_from_slice(&799u32.to_le_bytes()[..3]);
    payload.extend_from_slice(&599u32.to_le_bytes()[..3]);
    riff_webp(b"VP8X", &payload)
}

/// 550x368 lossy WebP.
pub fn webp_vp8() -> Vec<u8> {
    let mut payload = vec![0x10, 0x00, 0x00]; // frame tag
    payload.extend_from_slice(&[0x9d, 0x01, 0x2a]); // keyframe sync code
    payload.extend_from_slice(&550u16.to_le_bytes());
    payload.extend_from_slice(&368u16.to_le_bytes());
    riff_webp(b"VP8 ", &payload)
}

/// The RIFF/WEBP wrapper around a chunk flavor no parser exists for.
pub fn webp_unknown_flavor() -> Vec<u8> {
    riff_webp(b"VP8Z", &[0u8; 10])
}

/// 100x50 lossless WebP: 14-bit dims packed from bit 0 of the second byte.
pub fn webp_vp8l() -> Vec<u8> {
    let width_bits = 100u32 - 1;
    let height_bits = 50u32 - 1;
    let packed = [
        (width_bits & 0xff) as u8,
        ((width_bits >> 8) & 0x3f) as u8 | ((height_bits & 0x03) << 6) as u8,
        ((height_bits >> 2) & 0xff) as u8,
        ((height_bits >> 10) & 0x0f) as u8,
    ];
    let mut payload = vec![0x2f];
    payload.extend_from_slice(&packed);
    payload.push(0x00);
    riff_webp(b"VP8L", &payload)
}
