//! Minimal but structurally complete image files for the integration tests.
//!
//! Each builder returns the file bytes together with the offset one past the
//! last dimension byte, so tests can truncate just before it.

#![allow(dead_code)]

use imginfo::{Dimensions, ImageFormat};

pub struct Fixture {
    pub name: &'static str,
    pub format: ImageFormat,
    pub dimensions: Dimensions,
    pub bytes: Vec<u8>,
    /// Length of the shortest prefix that yields the dimensions.
    pub dimensions_end: usize,
}

pub fn png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    chunk
}

pub fn png(width: u32, height: u32) -> Fixture {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend(png_chunk(b"IHDR", &ihdr));
    bytes.extend(png_chunk(b"gAMA", &[0x00, 0x00, 0xB1, 0x8F]));
    bytes.extend(png_chunk(b"IDAT", &[0x78, 0x9C, 0x63, 0x60, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01]));
    bytes.extend(png_chunk(b"IEND", &[]));

    Fixture {
        name: "png",
        format: ImageFormat::Png,
        dimensions: Dimensions::new(width, height),
        bytes,
        dimensions_end: 24,
    }
}

/// JFIF with a quantization table ahead of a baseline frame header.
pub fn jpeg(width: u16, height: u16) -> Fixture {
    let mut bytes = vec![0xFF, 0xD8];
    bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    bytes.extend_from_slice(b"JFIF\x00\x01\x01\x01\x00\x60\x00\x60\x00\x00");
    bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00]);
    bytes.extend((0..64u8).map(|i| i % 12 + 1));
    let sof = bytes.len();
    bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    bytes.extend_from_slice(&[0xFF, 0xD9]);

    Fixture {
        name: "jpeg",
        format: ImageFormat::Jpeg,
        dimensions: Dimensions::new(u32::from(width), u32::from(height)),
        bytes,
        dimensions_end: sof + 9,
    }
}

pub fn gif(width: u16, height: u16) -> Fixture {
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&[0x80, 0x00, 0x00]);
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]);
    bytes.extend_from_slice(&[0x2C, 0, 0, 0, 0, 0x01, 0, 0x01, 0, 0x00]);
    bytes.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00, 0x3B]);

    Fixture {
        name: "gif",
        format: ImageFormat::Gif,
        dimensions: Dimensions::new(u32::from(width), u32::from(height)),
        bytes,
        dimensions_end: 10,
    }
}

pub fn bmp(width: u32, height: u32) -> Fixture {
    let row = (width as usize * 3).div_ceil(4) * 4;
    let pixels = row * height as usize;

    let mut bytes = b"BM".to_vec();
    bytes.extend_from_slice(&((54 + pixels) as u32).to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&54u32.to_le_bytes());
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[0; 24]);
    bytes.resize(54 + pixels, 0x7F);

    Fixture {
        name: "bmp",
        format: ImageFormat::Bmp,
        dimensions: Dimensions::new(width, height),
        bytes,
        dimensions_end: 26,
    }
}

fn riff(chunk_tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut bytes = b"RIFF".to_vec();
    bytes.extend_from_slice(&((body.len() + 12) as u32).to_le_bytes());
    bytes.extend_from_slice(b"WEBP");
    bytes.extend_from_slice(chunk_tag);
    bytes.extend_from_slice(&(body.len() as u32).to_le_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// Extended WEBP canvas, stored as size-1 in 24-bit fields.
pub fn webp_extended(width: u32, height: u32) -> Fixture {
    let mut body = vec![0x00, 0x00, 0x00, 0x00];
    body.extend_from_slice(&(width - 1).to_le_bytes()[..3]);
    body.extend_from_slice(&(height - 1).to_le_bytes()[..3]);

    Fixture {
        name: "webp-vp8x",
        format: ImageFormat::WebP,
        dimensions: Dimensions::new(width, height),
        bytes: riff(b"VP8X", &body),
        dimensions_end: 30,
    }
}

pub fn webp_lossless(width: u32, height: u32) -> Fixture {
    let bits = (width - 1) | ((height - 1) << 14) | (1 << 28);
    let mut body = vec![0x2F];
    body.extend_from_slice(&bits.to_le_bytes());
    body.extend_from_slice(&[0x00, 0x00, 0x00]);

    Fixture {
        name: "webp-vp8l",
        format: ImageFormat::WebP,
        dimensions: Dimensions::new(width, height),
        bytes: riff(b"VP8L", &body),
        dimensions_end: 25,
    }
}

pub fn webp_lossy(width: u16, height: u16) -> Fixture {
    let mut body = vec![0x50, 0x02, 0x00];
    body.extend_from_slice(&[0x9D, 0x01, 0x2A]);
    body.extend_from_slice(&width.to_le_bytes());
    body.extend_from_slice(&height.to_le_bytes());
    body.extend_from_slice(&[0x00; 8]);

    Fixture {
        name: "webp-vp8",
        format: ImageFormat::WebP,
        dimensions: Dimensions::new(u32::from(width), u32::from(height)),
        bytes: riff(b"VP8 ", &body),
        dimensions_end: 30,
    }
}

/// Little-endian TIFF whose first IFD holds width as SHORT and height as
/// LONG, followed by a few unrelated tags.
pub fn tiff_little_endian(width: u16, height: u32) -> Fixture {
    let mut bytes = b"II*\0".to_vec();
    bytes.extend_from_slice(&8u32.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());

    let mut entry = |tag: u16, field_type: u16, count: u32, value: u32| {
        bytes.extend_from_slice(&tag.to_le_bytes());
        bytes.extend_from_slice(&field_type.to_le_bytes());
        bytes.extend_from_slice(&count.to_le_bytes());
        bytes.extend_from_slice(&value.to_le_bytes());
    };
    entry(254, 4, 1, 0);
    entry(256, 3, 1, u32::from(width));
    entry(257, 4, 1, height);
    entry(258, 3, 1, 8);

    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&[0x80; 16]);

    Fixture {
        name: "tiff-le",
        format: ImageFormat::Tiff,
        dimensions: Dimensions::new(u32::from(width), height),
        bytes,
        // Third entry (ImageLength) spans 34..46.
        dimensions_end: 46,
    }
}

pub fn tiff_big_endian(width: u32, height: u16) -> Fixture {
    let mut bytes = b"MM\0*".to_vec();
    bytes.extend_from_slice(&16u32.to_be_bytes());
    bytes.extend_from_slice(&[0xAA; 8]);
    bytes.extend_from_slice(&2u16.to_be_bytes());

    bytes.extend_from_slice(&256u16.to_be_bytes());
    bytes.extend_from_slice(&4u16.to_be_bytes());
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());

    bytes.extend_from_slice(&257u16.to_be_bytes());
    bytes.extend_from_slice(&3u16.to_be_bytes());
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[0, 0]);

    bytes.extend_from_slice(&0u32.to_be_bytes());

    Fixture {
        name: "tiff-be",
        format: ImageFormat::Tiff,
        dimensions: Dimensions::new(width, u32::from(height)),
        bytes,
        dimensions_end: 42,
    }
}

pub fn all() -> Vec<Fixture> {
    vec![
        jpeg(2048, 1536),
        jpeg(1, 1),
        png(172, 178),
        png(400, 300),
        gif(250, 297),
        gif(217, 217),
        bmp(72, 48),
        bmp(20, 20),
        webp_extended(550, 368),
        webp_lossless(400, 301),
        webp_lossy(400, 301),
        tiff_little_endian(640, 480),
        tiff_big_endian(232, 205),
    ]
}
