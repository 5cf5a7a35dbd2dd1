//! Parser registry and detection dispatch
//!
//! Holds exactly one parser per image format and combines their verdicts.
//! The registry is never mutated after construction, so the process-wide
//! instance is shared across threads without locking.

use crate::error::{Error, Result};
use crate::formats::{
    BmpParser, FormatParser, GifParser, JpegParser, PngParser, TiffParser, WebpParser,
};
use crate::types::{Dimensions, ImageFormat, ImageInfo, Probe, Verdict};
use std::sync::LazyLock;

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// Registry of format parsers
///
/// Signatures of the supported formats are mutually exclusive, so the order
/// in which parsers are consulted never changes a verdict.
///
/// # Example
///
/// ```
/// use imginfo::{ImageFormat, Probe, Registry};
///
/// let registry = Registry::global();
/// let gif = b"GIF89a\x01\x00\x01\x00";
/// assert_eq!(registry.detect_format(gif), Probe::Valid(ImageFormat::Gif));
/// ```
pub struct Registry {
    parsers: Vec<Box<dyn FormatParser>>,
}

impl Registry {
    /// Shared registry with every supported format.
    pub fn global() -> &'static Registry {
        &STANDARD
    }

    /// Creates a registry with every supported format
    pub fn standard() -> Self {
        Self {
            parsers: vec![
                Box::new(JpegParser),
                Box::new(PngParser),
                Box::new(GifParser),
                Box::new(BmpParser),
                Box::new(WebpParser),
                Box::new(TiffParser),
            ],
        }
    }

    /// Creates a registry consulting `parsers` in the given order
    ///
    /// Fails if two parsers claim the same format.
    pub fn from_parsers(parsers: Vec<Box<dyn FormatParser>>) -> Result<Self> {
        let mut seen: Vec<ImageFormat> = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            let format = parser.format();
            if seen.contains(&format) {
                return Err(Error::DuplicateParser(format));
            }
            seen.push(format);
        }
        Ok(Self { parsers })
    }

    /// Iterates `(format, parser)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ImageFormat, &dyn FormatParser)> {
        self.parsers
            .iter()
            .map(|parser| (parser.format(), &**parser))
    }

    /// Returns the parser registered for `format`
    pub fn get(&self, format: ImageFormat) -> Option<&dyn FormatParser> {
        self.parsers
            .iter()
            .find(|parser| parser.format() == format)
            .map(|parser| &**parser)
    }

    /// Returns the registered formats in registration order
    pub fn formats(&self) -> Vec<ImageFormat> {
        self.parsers.iter().map(|parser| parser.format()).collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Identifies the format of `data`
    ///
    /// A match wins over a parser that still needs data, which in turn wins
    /// over unanimous rejection.
    pub fn detect_format(&self, data: &[u8]) -> Probe<ImageFormat> {
        let mut need_more_data = false;

        for (format, parser) in self.iter() {
            match parser.detect(data) {
                Verdict::Valid => return Probe::Valid(format),
                Verdict::NeedMoreData => need_more_data = true,
                _ => {}
            }
        }

        if need_more_data {
            Probe::NeedMoreData
        } else {
            Probe::Invalid
        }
    }

    /// Reads the dimensions of `data` with the parser of its detected format
    pub fn get_dimensions(&self, data: &[u8]) -> Probe<Dimensions> {
        self.detect_format(data).and_then(|format| match self.get(format) {
            Some(parser) => parser.measure(data),
            None => Probe::Invalid,
        })
    }

    /// Combines format detection and dimension extraction
    pub fn get_info(&self, data: &[u8]) -> Probe<ImageInfo> {
        self.detect_format(data).and_then(|format| {
            self.get_dimensions(data)
                .map(|dimensions| ImageInfo { format, dimensions })
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("formats", &self.formats())
            .finish()
    }
}
