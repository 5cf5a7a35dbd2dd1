//! Image format and dimension detection from a byte prefix.
//!
//! Only headers and container structures are inspected; pixel data is never
//! decoded. Every call answers with a [`Probe`]: `NeedMoreData` when the
//! prefix is too short to decide, otherwise `Valid` or `Invalid`.
//!
//! ```
//! use imginfo::{Dimensions, ImageFormat, Probe};
//!
//! let gif = b"GIF89a\xFA\x00\x29\x01";
//! assert_eq!(imginfo::detect_format(gif), Probe::Valid(ImageFormat::Gif));
//! assert_eq!(imginfo::get_dimensions(&gif[..8]), Probe::NeedMoreData);
//! assert_eq!(imginfo::get_dimensions(gif), Probe::Valid(Dimensions::new(250, 297)));
//! ```

mod error;
pub mod formats;
pub mod io;
mod registry;
mod types;

pub use error::{Error, Result};
pub use formats::FormatParser;
pub use io::{
    ByteSource, Decision, FeedOptions, FeedState, Feeder, detect_format_from_file,
    detect_format_from_source, get_dimensions_from_file, get_dimensions_from_source,
    get_info_from_file, get_info_from_source,
};
pub use registry::Registry;
pub use types::{Dimensions, ImageFormat, ImageInfo, Probe, Verdict};

/// Identifies the image format of `data`.
pub fn detect_format(data: &[u8]) -> Probe<ImageFormat> {
    Registry::global().detect_format(data)
}

/// Reads the pixel dimensions of `data`.
pub fn get_dimensions(data: &[u8]) -> Probe<Dimensions> {
    Registry::global().get_dimensions(data)
}

/// Reads both format and dimensions of `data`.
pub fn get_info(data: &[u8]) -> Probe<ImageInfo> {
    Registry::global().get_info(data)
}
