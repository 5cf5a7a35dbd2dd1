use super::{FormatParser, be_u16};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Length field of the segment that follows SOI.
const FIRST_SEGMENT_LENGTH: usize = 4;

/// `FF Cn`, segment length, precision, height, width.
const SOF_PREFIX_LEN: usize = 9;

/// Start-of-frame markers that carry the frame dimensions.
///
/// C0..C3 are Huffman coded (baseline, extended, progressive, lossless),
/// C9..CB the arithmetic coded equivalents.
#[inline]
pub fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xC3 | 0xC9..=0xCB)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JpegParser;

impl FormatParser for JpegParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::Jpeg
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        Verdict::of_signature(data, &JPEG_SOI)
    }

    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        let Some(mut segment_len) = be_u16(data, FIRST_SEGMENT_LENGTH) else {
            return Probe::NeedMoreData;
        };
        let mut pos = FIRST_SEGMENT_LENGTH;

        loop {
            pos += usize::from(segment_len);

            if data.len() < pos + SOF_PREFIX_LEN {
                return Probe::NeedMoreData;
            }

            if data[pos] != 0xFF {
                tracing::trace!(pos, byte = data[pos], "jpeg: expected marker");
                return Probe::Invalid;
            }

            let marker = data[pos + 1];

            // Fill byte ahead of the real marker.
            if marker == 0xFF {
                pos += 1;
                segment_len = 0;
                continue;
            }

            if is_sof_marker(marker) {
                let (Some(height), Some(width)) = (be_u16(data, pos + 5), be_u16(data, pos + 7))
                else {
                    return Probe::NeedMoreData;
                };
                return Probe::Valid(Dimensions::new(u32::from(width), u32::from(height)));
            }

            pos += 2;
            let Some(len) = be_u16(data, pos) else {
                return Probe::NeedMoreData;
            };
            segment_len = len;
        }
    }
}
