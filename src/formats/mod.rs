//! Per-format header parsers.
//!
//! Every parser works on a prefix of the file. Reads are bounds-checked and
//! a read past the end of the prefix turns into `Probe::NeedMoreData`, so the
//! same buffer can be re-examined as it grows.

pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;
pub mod tiff;
pub mod webp;

pub use bmp::BmpParser;
pub use gif::GifParser;
pub use jpeg::JpegParser;
pub use png::PngParser;
pub use tiff::TiffParser;
pub use webp::WebpParser;

use crate::types::{Dimensions, ImageFormat, Probe, Verdict};

/// Signature detection and dimension extraction for one image format.
///
/// Implementations are stateless, so a single instance can be shared by
/// every caller.
pub trait FormatParser: Send + Sync {
    /// The format this parser recognises.
    fn format(&self) -> ImageFormat;

    /// Classifies the buffer by its fixed-position signature bytes.
    fn detect(&self, data: &[u8]) -> Verdict;

    /// Locates the dimension fields, assuming `detect` already matched.
    fn dimensions(&self, data: &[u8]) -> Probe<Dimensions>;

    /// Detects the signature, then reads the dimensions.
    fn measure(&self, data: &[u8]) -> Probe<Dimensions> {
        match self.detect(data) {
            Verdict::Valid => self.dimensions(data),
            Verdict::NeedMoreData => Probe::NeedMoreData,
            _ => Probe::Invalid,
        }
    }
}

#[inline]
pub(crate) fn bytes_at<const N: usize>(data: &[u8], pos: usize) -> Option<[u8; N]> {
    let end = pos.checked_add(N)?;
    data.get(pos..end)?.try_into().ok()
}

#[inline]
pub(crate) fn be_u16(data: &[u8], pos: usize) -> Option<u16> {
    bytes_at(data, pos).map(u16::from_be_bytes)
}

#[inline]
pub(crate) fn le_u16(data: &[u8], pos: usize) -> Option<u16> {
    bytes_at(data, pos).map(u16::from_le_bytes)
}

#[inline]
pub(crate) fn be_u32(data: &[u8], pos: usize) -> Option<u32> {
    bytes_at(data, pos).map(u32::from_be_bytes)
}

#[inline]
pub(crate) fn le_u32(data: &[u8], pos: usize) -> Option<u32> {
    bytes_at(data, pos).map(u32::from_le_bytes)
}
