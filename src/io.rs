//! Incremental feeding of byte sources into the detection dispatcher.
//!
//! A [`Feeder`] pulls fixed-size chunks from a [`ByteSource`], appends them to
//! its buffer and re-examines the whole buffer after every chunk until the
//! verdict is definitive. Parsers are stateless over the buffer prefix, so
//! re-examining from offset zero is what keeps the result identical no matter
//! how the input was split.

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::{Dimensions, ImageFormat, ImageInfo, Probe, Verdict};
use bytes::BytesMut;
use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 128;

/// Largest accepted chunk size; a read buffer of this size is allocated up front.
pub const MAX_CHUNK_SIZE: usize = 1 << 20;

/// Anything that hands out the next chunk of a byte stream.
///
/// `read_chunk` fills the front of `buffer` and returns how many bytes were
/// written; `Ok(0)` means the source is exhausted. Every [`Read`]
/// implementation is a source.
pub trait ByteSource {
    fn read_chunk(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
}

impl<R: Read + ?Sized> ByteSource for R {
    fn read_chunk(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.read(buffer) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}

/// Per-session feeding options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    chunk_size: NonZeroUsize,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl FeedOptions {
    /// Sets the number of bytes requested per read
    ///
    /// Small chunks stop reading sooner on typical header sizes. Zero and
    /// anything above [`MAX_CHUNK_SIZE`] are rejected.
    pub fn with_chunk_size(mut self, size: usize) -> Result<Self> {
        if size > MAX_CHUNK_SIZE {
            return Err(Error::InvalidChunkSize(size));
        }
        self.chunk_size = NonZeroUsize::new(size).ok_or(Error::InvalidChunkSize(size))?;
        Ok(self)
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Accumulating,
    Decided(Verdict),
    Exhausted,
}

/// Definitive outcome of a feeding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<T> {
    /// Either `Valid` or `Invalid`.
    pub verdict: Verdict,
    /// Present when `verdict` is `Valid`.
    pub value: Option<T>,
    /// Total bytes read from the source.
    pub consumed: usize,
}

impl<T> Decision<T> {
    fn new(probe: Probe<T>, consumed: usize) -> Self {
        Self {
            verdict: probe.verdict(),
            value: probe.valid(),
            consumed,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }
}

/// Accumulates chunks from a source until a probe reaches a verdict.
pub struct Feeder<S> {
    source: S,
    buffer: BytesMut,
    chunk_size: usize,
    state: FeedState,
}

impl<S: ByteSource> Feeder<S> {
    pub fn new(source: S, options: &FeedOptions) -> Self {
        Self {
            source,
            buffer: BytesMut::with_capacity(options.chunk_size()),
            chunk_size: options.chunk_size(),
            state: FeedState::Accumulating,
        }
    }

    #[inline]
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Bytes read from the source so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Reads chunks until `probe` returns a definitive verdict
    ///
    /// Source errors and a source that ends before a verdict are returned
    /// as errors and leave the feeder exhausted. A decided feeder first
    /// re-runs `probe` on the buffered bytes and only reads again if that
    /// is not conclusive.
    pub fn run<T>(&mut self, probe: impl Fn(&[u8]) -> Probe<T>) -> Result<Decision<T>> {
        match self.state {
            FeedState::Decided(_) => {
                let buffered = probe(&self.buffer[..]);
                let verdict = buffered.verdict();
                if verdict.is_definitive() {
                    self.state = FeedState::Decided(verdict);
                    return Ok(Decision::new(buffered, self.consumed()));
                }
                self.state = FeedState::Accumulating;
            }
            FeedState::Exhausted => {
                return Err(Error::SourceExhausted {
                    consumed: self.consumed(),
                });
            }
            FeedState::Accumulating => {}
        }

        let mut chunk = vec![0u8; self.chunk_size];

        loop {
            let read = match self.source.read_chunk(&mut chunk) {
                Ok(read) => read,
                Err(e) => {
                    tracing::debug!(consumed = self.consumed(), error = %e, "source read failed");
                    self.state = FeedState::Exhausted;
                    return Err(e.into());
                }
            };

            if read == 0 {
                tracing::debug!(consumed = self.consumed(), "source exhausted before a verdict");
                self.state = FeedState::Exhausted;
                return Err(Error::SourceExhausted {
                    consumed: self.consumed(),
                });
            }

            self.buffer.extend_from_slice(&chunk[..read]);
            tracing::trace!(read, consumed = self.consumed(), "chunk appended");

            let probe = probe(&self.buffer[..]);
            let verdict = probe.verdict();
            if verdict.is_definitive() {
                tracing::debug!(%verdict, consumed = self.consumed(), "verdict reached");
                self.state = FeedState::Decided(verdict);
                return Ok(Decision::new(probe, self.consumed()));
            }
        }
    }
}

/// Identifies the format of a stream, reading only as much as needed
pub fn detect_format_from_source<S: ByteSource>(
    source: S,
    options: &FeedOptions,
) -> Result<Decision<ImageFormat>> {
    let registry = Registry::global();
    Feeder::new(source, options).run(|data| registry.detect_format(data))
}

/// Reads the dimensions of a stream, reading only as much as needed
pub fn get_dimensions_from_source<S: ByteSource>(
    source: S,
    options: &FeedOptions,
) -> Result<Decision<Dimensions>> {
    let registry = Registry::global();
    Feeder::new(source, options).run(|data| registry.get_dimensions(data))
}

/// Reads format and dimensions of a stream, reading only as much as needed
pub fn get_info_from_source<S: ByteSource>(
    source: S,
    options: &FeedOptions,
) -> Result<Decision<ImageInfo>> {
    let registry = Registry::global();
    Feeder::new(source, options).run(|data| registry.get_info(data))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn detect_format_from_file(
    path: impl AsRef<Path>,
    options: &FeedOptions,
) -> Result<Decision<ImageFormat>> {
    detect_format_from_source(open(path.as_ref())?, options)
}

pub fn get_dimensions_from_file(
    path: impl AsRef<Path>,
    options: &FeedOptions,
) -> Result<Decision<Dimensions>> {
    get_dimensions_from_source(open(path.as_ref())?, options)
}

pub fn get_info_from_file(
    path: impl AsRef<Path>,
    options: &FeedOptions,
) -> Result<Decision<ImageInfo>> {
    get_info_from_source(open(path.as_ref())?, options)
}
