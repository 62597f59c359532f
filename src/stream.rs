//! The streaming accumulator and the byte-source adapters built on it.
//!
//! The accumulator keeps the whole prefix seen so far and retries full
//! detection after every chunk; real image headers are small, so buffers
//! stay in the hundreds of bytes for well-formed input. Nothing here caps
//! buffer growth: a source that never yields a resolvable header and never
//! terminates will accumulate without bound, and bounding it (e.g. giving
//! up after N bytes) is the byte source's policy to impose.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use crate::generic::size_from_buffer;
use crate::types::{ImageResult, Result};

/// How many bytes the file and reader adapters pull per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Merges incoming byte chunks and re-attempts detection after each one.
///
/// Handler failures on the accumulated prefix are swallowed: more bytes may
/// resolve them. The buffer is exclusively owned by this value and is
/// discarded with it; abandoning the accumulator is all the cancellation
/// there is.
#[derive(Default)]
pub struct Accumulator {
    buf: Vec<u8>,
}

impl Accumulator {
    pub fn new() -> Accumulator {
        Accumulator { buf: Vec::new() }
    }

    /// Appends a chunk and re-runs detection over everything seen so far.
    ///
    /// Returns the result the first time the accumulated prefix both
    /// identifies a format and yields a size.
    pub fn push(&mut self, chunk: &[u8]) -> Option<ImageResult> {
        self.buf.extend_from_slice(chunk);
        trace!(chunk = chunk.len(), total = self.buf.len(), "chunk merged");
        size_from_buffer(&self.buf)
    }

    /// The number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Runs detection over an ordered sequence of byte chunks.
///
/// Stops pulling as soon as a result is produced; returns `None` when the
/// sequence is exhausted without one.
pub fn size_from_chunks<I>(chunks: I) -> Option<ImageResult>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut acc = Accumulator::new();
    for chunk in chunks {
        if let Some(result) = acc.push(chunk.as_ref()) {
            return Some(result);
        }
    }
    debug!(total = acc.len(), "byte source exhausted without a result");
    None
}

/// Reads `DEFAULT_CHUNK_SIZE`-byte chunks from `r` until a result is found
/// or the reader is exhausted (`Ok(None)`). I/O errors surface as
/// [`Error::Io`](crate::Error::Io).
pub fn size_from_reader<R: Read + ?Sized>(r: &mut R) -> Result<Option<ImageResult>> {
    size_from_reader_with_chunk_size(r, DEFAULT_CHUNK_SIZE)
}

pub fn size_from_reader_with_chunk_size<R: Read + ?Sized>(
    r: &mut R,
    chunk_size: usize,
) -> Result<Option<ImageResult>> {
    let mut acc = Accumulator::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        let n = r.read(&mut chunk)?;
        if n == 0 {
            debug!(total = acc.len(), "reader exhausted without a result");
            return Ok(None);
        }
        if let Some(result) = acc.push(&chunk[..n]) {
            return Ok(Some(result));
        }
    }
}

/// Opens the file at `path` and runs [`size_from_reader`] over it.
pub fn size_from_file<P: AsRef<Path>>(path: P) -> Result<Option<ImageResult>> {
    size_from_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
}

pub fn size_from_file_with_chunk_size<P: AsRef<Path>>(
    path: P,
    chunk_size: usize,
) -> Result<Option<ImageResult>> {
    let mut f = File::open(path)?;
    size_from_reader_with_chunk_size(&mut f, chunk_size)
}

/// Asynchronous flavor of [`size_from_reader`]: pulls chunks from any
/// `AsyncRead`, yielding to the runtime between reads. Available with the
/// `tokio` feature.
#[cfg(feature = "tokio")]
pub async fn size_from_async_reader<R>(r: &mut R) -> Result<Option<ImageResult>>
where
    R: tokio::io::AsyncRead + Unpin + ?Sized,
{
    use tokio::io::AsyncReadExt;

    let mut acc = Accumulator::new();
    let mut chunk = [0u8; DEFAULT_CHUNK_SIZE];
    loop {
        let n = r.read(&mut chunk).await?;
        if n == 0 {
            debug!(total = acc.len(), "async reader exhausted without a result");
            return Ok(None);
        }
        if let Some(result) = acc.push(&chunk[..n]) {
            return Ok(Some(result));
        }
    }
}
