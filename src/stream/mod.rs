//! Streaming line reader
//!
//! This module turns an arbitrary byte stream into a lazy, forward-only
//! sequence of text lines, designed to handle arbitrarily large `.out`
//! files with a memory footprint bounded by the chunk size and the longest
//! line.
//!
//! ## Guarantees
//!
//! - **Chunk-boundary invariant**: a chunk may end anywhere, including
//!   between `\r` and `\n` or inside a multi-byte UTF-8 character. The
//!   produced lines do not depend on where the boundaries fall.
//! - **Terminators**: both `\n` and `\r\n` are recognized and stripped.
//! - **Lossless tail**: a final line without terminator is still produced.
//! - **Never fails on content**: invalid UTF-8 is replaced with U+FFFD.
//!   The only errors surfaced are I/O errors of the underlying reader.
//!
//! ## Example
//!
//! ```rust
//! use outplot::stream::LineStreamer;
//!
//! let data = "Time A\r\ns m\n0 1\n1 2";
//! let mut streamer = LineStreamer::with_chunk_size(data.as_bytes(), 3);
//!
//! let mut lines = Vec::new();
//! while let Some(line) = streamer.next_line()? {
//!     lines.push(line);
//! }
//! assert_eq!(lines, ["Time A", "s m", "0 1", "1 2"]);
//! # Ok::<(), outplot::stream::StreamError>(())
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

pub use decoder::LineDecoder;
pub use error::StreamError;
pub use iterators::{ChunkLines, Lines};

mod decoder;
mod error;
mod iterators;


/// Default chunk size for reading input (64KB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Pull-based line reader over any [`Read`] source
///
/// Each call to [`next_line`](Self::next_line) reads further chunks from the
/// source only when the already buffered bytes do not hold a complete line.
/// The streamer is a single forward pass: once exhausted it keeps returning
/// `Ok(None)`, and a new parse needs a new streamer over a fresh source.
pub struct LineStreamer<R: Read> {
    reader: R,
    decoder: LineDecoder,
    chunk: Vec<u8>,
    exhausted: bool,
}

impl<R: Read> LineStreamer<R> {
    /// Create a new streamer with the default chunk size
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Create a new streamer that reads at most `chunk_size` bytes per read
    ///
    /// A `chunk_size` of zero is treated as one.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            decoder: LineDecoder::new(),
            chunk: vec![0; chunk_size.max(1)],
            exhausted: false,
        }
    }

    /// Read the next line, with its terminator stripped
    ///
    /// Returns `Ok(None)` once the source is exhausted and every buffered
    /// byte has been emitted.
    pub fn next_line(&mut self) -> Result<Option<String>, StreamError> {
        loop {
            if let Some(line) = self.decoder.next_line() {
                return Ok(Some(line));
            }
            if self.exhausted {
                return Ok(None);
            }

            let read = match self.reader.read(&mut self.chunk) {
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if read == 0 {
                self.exhausted = true;
                self.decoder.finish();
            } else {
                self.decoder.push_chunk(&self.chunk[..read]);
            }
        }
    }

    /// Iterate over all remaining lines
    pub fn lines(self) -> Lines<R> {
        Lines { streamer: self }
    }

    /// Total number of bytes read from the source so far
    pub fn bytes_read(&self) -> u64 {
        self.decoder.bytes_consumed()
    }

    /// Number of lines produced so far
    pub fn lines_read(&self) -> usize {
        self.decoder.lines_emitted()
    }
}

impl LineStreamer<File> {
    /// Open a file for streaming with the default chunk size (64KB)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        Self::open_with_buffer_size(path, DEFAULT_CHUNK_SIZE)
    }

    /// Open a file for streaming with a custom chunk size
    ///
    /// # Example
    /// ```rust,no_run
    /// use outplot::stream::LineStreamer;
    ///
    /// // Use 256KB reads for better throughput on large files
    /// let streamer = LineStreamer::open_with_buffer_size("run.out", 256 * 1024)?;
    /// # Ok::<(), outplot::stream::StreamError>(())
    /// ```
    pub fn open_with_buffer_size<P: AsRef<Path>>(
        path: P,
        chunk_size: usize,
    ) -> Result<Self, StreamError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::with_chunk_size(file, chunk_size))
    }
}
