use crate::types::ImageFormat;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Hard failures. Undersized or malformed image data is never an error; it
/// is reported as a `Verdict`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Source ended after {consumed} bytes before a verdict was reached")]
    SourceExhausted { consumed: usize },

    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    #[error("Duplicate parser registered for {0}")]
    DuplicateParser(ImageFormat),
}

pub type Result<T> = std::result::Result<T, Error>;
