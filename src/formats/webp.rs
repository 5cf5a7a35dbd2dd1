use super::{FormatParser, bytes_at, le_u16, le_u32};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WEBP_TAG: [u8; 4] = *b"WEBP";

/// Bytes needed to see both RIFF and WEBP tags.
const SIGNATURE_LEN: usize = 12;
const CHUNK_TAG: usize = 12;

const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];
const VP8L_SIGNATURE: u8 = 0x2F;

const DIMENSION_MASK: u32 = 0x3FFF;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebpParser;

impl FormatParser for WebpParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::WebP
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        if data.len() < SIGNATURE_LEN {
            return Verdict::NeedMoreData;
        }
        if data[..4] == RIFF_TAG && data[8..12] == WEBP_TAG {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }

    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        let Some(tag) = bytes_at::<4>(data, CHUNK_TAG) else {
            return Probe::NeedMoreData;
        };

        match &tag {
            b"VP8 " => lossy_dimensions(data),
            b"VP8L" => lossless_dimensions(data),
            b"VP8X" => extended_dimensions(data),
            _ => {
                tracing::trace!(?tag, "webp: unknown first chunk");
                Probe::Invalid
            }
        }
    }
}

/// Key frame header: 3 byte frame tag, start code, then two 16-bit fields
/// whose top two bits hold the upscaling factor.
fn lossy_dimensions(data: &[u8]) -> Probe<Dimensions> {
    let Some(start_code) = bytes_at::<3>(data, 23) else {
        return Probe::NeedMoreData;
    };
    if start_code != VP8_START_CODE {
        return Probe::Invalid;
    }

    match (le_u16(data, 26), le_u16(data, 28)) {
        (Some(width), Some(height)) => Probe::Valid(Dimensions::new(
            u32::from(width) & DIMENSION_MASK,
            u32::from(height) & DIMENSION_MASK,
        )),
        _ => Probe::NeedMoreData,
    }
}

/// Signature byte followed by 14 bits of width-1 and 14 bits of height-1.
fn lossless_dimensions(data: &[u8]) -> Probe<Dimensions> {
    let Some(&signature) = data.get(20) else {
        return Probe::NeedMoreData;
    };
    if signature != VP8L_SIGNATURE {
        return Probe::Invalid;
    }

    let Some(bits) = le_u32(data, 21) else {
        return Probe::NeedMoreData;
    };
    Probe::Valid(Dimensions::new(
        (bits & DIMENSION_MASK) + 1,
        ((bits >> 14) & DIMENSION_MASK) + 1,
    ))
}

/// Canvas size as two 24-bit fields holding width-1 and height-1.
fn extended_dimensions(data: &[u8]) -> Probe<Dimensions> {
    match (bytes_at::<3>(data, 24), bytes_at::<3>(data, 27)) {
        (Some([w0, w1, w2]), Some([h0, h1, h2])) => Probe::Valid(Dimensions::new(
            u32::from_le_bytes([w0, w1, w2, 0]) + 1,
            u32::from_le_bytes([h0, h1, h2, 0]) + 1,
        )),
        _ => Probe::NeedMoreData,
    }
}
