use serde::Serialize;
use std::fmt;

/// Image formats the parsers know how to identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Unknown,
    Jpeg,
    Png,
    Gif,
    Bmp,
    WebP,
    Tiff,
}

impl ImageFormat {
    /// Every identifiable format, excluding `Unknown`.
    pub const ALL: [ImageFormat; 6] = [
        Self::Jpeg,
        Self::Png,
        Self::Gif,
        Self::Bmp,
        Self::WebP,
        Self::Tiff,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::WebP => "WEBP",
            Self::Tiff => "TIFF",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
            Self::Tiff => "tiff",
            Self::Unknown => "bin",
        }
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::WebP => "image/webp",
            Self::Tiff => "image/tiff",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of classifying a byte prefix.
///
/// `NeedMoreData` asks the caller to supply a longer prefix; `Valid` and
/// `Invalid` are definitive and never change as more bytes arrive.
/// `Unknown` only exists as the default placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    #[default]
    Unknown,
    NeedMoreData,
    Valid,
    Invalid,
}

impl Verdict {
    #[must_use]
    pub const fn is_definitive(&self) -> bool {
        matches!(self, Self::Valid | Self::Invalid)
    }

    /// Verdict for a buffer that must start with `signature`.
    pub(crate) fn of_signature(data: &[u8], signature: &[u8]) -> Self {
        if data.len() < signature.len() {
            Self::NeedMoreData
        } else if data.starts_with(signature) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::NeedMoreData => "NeedMoreData",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

/// A verdict that carries its value when valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    NeedMoreData,
    Valid(T),
    Invalid,
}

impl<T> Probe<T> {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::NeedMoreData => Verdict::NeedMoreData,
            Self::Valid(_) => Verdict::Valid,
            Self::Invalid => Verdict::Invalid,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the value of a `Valid` probe.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Self::NeedMoreData => Probe::NeedMoreData,
            Self::Valid(value) => Probe::Valid(f(value)),
            Self::Invalid => Probe::Invalid,
        }
    }

    /// Chains a probe that only runs once this one is valid.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Probe<U>) -> Probe<U> {
        match self {
            Self::NeedMoreData => Probe::NeedMoreData,
            Self::Valid(value) => f(value),
            Self::Invalid => Probe::Invalid,
        }
    }
}

/// Pixel dimensions as stated by the image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub dimensions: Dimensions,
}
