use super::{FormatParser, le_u32};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// Bitmap info header fields, after the 14 byte file header and the 4 byte
/// header size.
const WIDTH: usize = 18;
const HEIGHT: usize = 22;

#[derive(Debug, Clone, Copy, Default)]
pub struct BmpParser;

impl FormatParser for BmpParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::Bmp
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        Verdict::of_signature(data, &BMP_SIGNATURE)
    }

    // Fields are read as stored; a top-down bitmap keeps its raw height.
    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        match (le_u32(data, WIDTH), le_u32(data, HEIGHT)) {
            (Some(width), Some(height)) => Probe::Valid(Dimensions::new(width, height)),
            _ => Probe::NeedMoreData,
        }
    }
}
