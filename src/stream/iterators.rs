use std::io::Read;

use super::{LineDecoder, LineStreamer, StreamError};

/// Iterator over the lines of a [`LineStreamer`]
pub struct Lines<R: Read> {
    pub(super) streamer: LineStreamer<R>,
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<String, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.streamer.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Iterator over the lines of an already chunked byte sequence
///
/// This is the adapter for callers that receive the bytes themselves, for
/// example from a network body or an upload widget, and hand them over as
/// a sequence of chunks with arbitrary boundaries. Chunks are pulled only
/// when the buffered bytes hold no complete line.
pub struct ChunkLines<I> {
    chunks: I,
    decoder: LineDecoder,
}

impl<I> ChunkLines<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Wrap a chunk sequence
    pub fn new<C>(chunks: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            chunks: chunks.into_iter(),
            decoder: LineDecoder::new(),
        }
    }
}

impl<I> Iterator for ChunkLines<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.decoder.next_line() {
                return Some(line);
            }
            if self.decoder.is_finished() {
                return None;
            }
            match self.chunks.next() {
                Some(chunk) => self.decoder.push_chunk(chunk.as_ref()),
                None => self.decoder.finish(),
            }
        }
    }
}
