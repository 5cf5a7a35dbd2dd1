use super::{FormatParser, be_u16, be_u32, bytes_at, le_u16, le_u32};
use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

pub const TIFF_LITTLE_ENDIAN: [u8; 4] = *b"II*\0";
pub const TIFF_BIG_ENDIAN: [u8; 4] = *b"MM\0*";

const VERSION: u16 = 42;
const IFD_ENTRY_LEN: usize = 12;

pub const TAG_IMAGE_WIDTH: u16 = 256;
pub const TAG_IMAGE_LENGTH: u16 = 257;

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn u16(self, data: &[u8], pos: usize) -> Option<u16> {
        match self {
            Self::Little => le_u16(data, pos),
            Self::Big => be_u16(data, pos),
        }
    }

    fn u32(self, data: &[u8], pos: usize) -> Option<u32> {
        match self {
            Self::Little => le_u32(data, pos),
            Self::Big => be_u32(data, pos),
        }
    }
}

/// A single IFD entry: tag, field type, value count and the value itself
/// (inline, since only single SHORT/LONG values are of interest).
#[derive(Debug, Clone, Copy)]
struct IfdEntry {
    tag: u16,
    value: Option<u32>,
}

impl IfdEntry {
    fn parse(order: ByteOrder, raw: &[u8; IFD_ENTRY_LEN]) -> Option<Self> {
        let tag = order.u16(raw, 0)?;
        let field_type = order.u16(raw, 2)?;
        let count = order.u32(raw, 4)?;

        let value = match (field_type, count) {
            (TYPE_SHORT, 1) => order.u16(raw, 8).map(u32::from),
            (TYPE_LONG, 1) => order.u32(raw, 8),
            _ => None,
        };
        Some(Self { tag, value })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TiffParser;

impl FormatParser for TiffParser {
    fn format(&self) -> ImageFormat {
        ImageFormat::Tiff
    }

    fn detect(&self, data: &[u8]) -> Verdict {
        match Verdict::of_signature(data, &TIFF_LITTLE_ENDIAN) {
            Verdict::Invalid => Verdict::of_signature(data, &TIFF_BIG_ENDIAN),
            verdict => verdict,
        }
    }

    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        let order = match data.first() {
            Some(b'I') => ByteOrder::Little,
            Some(b'M') => ByteOrder::Big,
            Some(_) => return Probe::Invalid,
            None => return Probe::NeedMoreData,
        };

        let (Some(version), Some(ifd_offset)) = (order.u16(data, 2), order.u32(data, 4)) else {
            return Probe::NeedMoreData;
        };
        if version != VERSION {
            tracing::trace!(version, "tiff: unsupported version");
            return Probe::Invalid;
        }

        let ifd = ifd_offset as usize;
        let Some(entry_count) = order.u16(data, ifd) else {
            return Probe::NeedMoreData;
        };

        let mut width = None;
        let mut height = None;

        for index in 0..usize::from(entry_count) {
            let Some(raw) = ifd
                .checked_add(2 + index * IFD_ENTRY_LEN)
                .and_then(|pos| bytes_at::<IFD_ENTRY_LEN>(data, pos))
            else {
                return Probe::NeedMoreData;
            };
            let Some(entry) = IfdEntry::parse(order, &raw) else {
                return Probe::NeedMoreData;
            };

            match (entry.tag, entry.value) {
                (TAG_IMAGE_WIDTH, Some(value)) => width = Some(value),
                (TAG_IMAGE_LENGTH, Some(value)) => height = Some(value),
                _ => {}
            }

            if let (Some(width), Some(height)) = (width, height) {
                return Probe::Valid(Dimensions::new(width, height));
            }
        }

        tracing::trace!(entry_count, ?width, ?height, "tiff: dimension tags missing");
        Probe::Invalid
    }
}
