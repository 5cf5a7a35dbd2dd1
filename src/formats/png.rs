use super::{FormatParser, be_u32, bytes_at};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";

pub const IDAT: [u8; 4] = *b"IDAT";

pub const PLTE: [u8; 4] = *b"PLTE";

pub const IEND: [u8; 4] = *b"IEND";

/// Length, type and CRC around every chunk payload.
const CHUNK_OVERHEAD: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngParser;

impl FormatParser for PngParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        Verdict::of_signature(data, &PNG_SIGNATURE)
    }

    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        let mut pos = PNG_SIGNATURE.len();

        loop {
            let (Some(length), Some(chunk_type)) = (be_u32(data, pos), bytes_at::<4>(data, pos + 4))
            else {
                return Probe::NeedMoreData;
            };

            if !chunk_type.iter().all(u8::is_ascii_alphabetic) {
                tracing::trace!(pos, ?chunk_type, "png: malformed chunk type");
                return Probe::Invalid;
            }

            if chunk_type == IHDR {
                let (Some(width), Some(height)) = (be_u32(data, pos + 8), be_u32(data, pos + 12))
                else {
                    return Probe::NeedMoreData;
                };
                return Probe::Valid(Dimensions::new(width, height));
            }

            // Image data or the end marker before IHDR cannot be a PNG.
            if chunk_type == IDAT || chunk_type == PLTE || chunk_type == IEND {
                tracing::trace!(pos, ?chunk_type, "png: critical chunk before IHDR");
                return Probe::Invalid;
            }

            let Some(next) = (length as usize)
                .checked_add(CHUNK_OVERHEAD)
                .and_then(|size| pos.checked_add(size))
            else {
                return Probe::Invalid;
            };
            pos = next;
        }
    }
}
