use super::{FormatParser, le_u16};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

/// Shared by GIF87a and GIF89a.
pub const GIF_SIGNATURE: [u8; 3] = *b"GIF";

/// Logical screen descriptor, right after the 6 byte header.
const SCREEN_WIDTH: usize = 6;
const SCREEN_HEIGHT: usize = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct GifParser;

impl FormatParser for GifParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::Gif
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        Verdict::of_signature(data, &GIF_SIGNATURE)
    }

    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        match (le_u16(data, SCREEN_WIDTH), le_u16(data, SCREEN_HEIGHT)) {
            (Some(width), Some(height)) => {
                Probe::Valid(Dimensions::new(u32::from(width), u32::from(height)))
            }
            _ => Probe::NeedMoreData,
        }
    }
}
