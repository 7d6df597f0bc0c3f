const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Incremental line splitter over pushed byte chunks
///
/// State is limited to the bytes not yet emitted and a scan cursor, so the
/// decoder never rescans bytes it already searched for a terminator.
/// Lines are split on raw bytes before decoding: `\n` never occurs inside
/// a multi-byte UTF-8 sequence, so a chunk ending mid-character just leaves
/// the partial character pending until its remaining bytes arrive.
#[derive(Debug, Default)]
pub struct LineDecoder {
    pending: Vec<u8>,
    /// Start of the first line not yet emitted
    start: usize,
    /// Everything in `pending[start..scan]` is known to contain no `\n`
    scan: usize,
    finished: bool,
    bom_checked: bool,
    bytes_consumed: u64,
    lines_emitted: usize,
}

impl LineDecoder {
    /// Create an empty decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of raw bytes
    ///
    /// Chunks pushed after [`finish`](Self::finish) are ignored.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        if self.finished || chunk.is_empty() {
            return;
        }

        // Reclaim emitted bytes once they make up at least half the buffer
        if self.start > 0 && self.start * 2 >= self.pending.len() {
            self.pending.drain(..self.start);
            self.scan -= self.start;
            self.start = 0;
        }

        self.pending.extend_from_slice(chunk);
        self.bytes_consumed += chunk.len() as u64;
        self.check_bom();
    }

    /// Mark the end of the stream
    ///
    /// After this call the undelimited remainder, if any, becomes available
    /// as the final line.
    pub fn finish(&mut self) {
        self.finished = true;
        self.check_bom();
    }

    /// Whether [`finish`](Self::finish) has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the next complete line, if one is buffered
    pub fn next_line(&mut self) -> Option<String> {
        if !self.bom_checked {
            return None;
        }

        if let Some(offset) = self.pending[self.scan..].iter().position(|&b| b == b'\n') {
            let newline = self.scan + offset;
            let mut end = newline;
            if end > self.start && self.pending[end - 1] == b'\r' {
                end -= 1;
            }
            let line = decode(&self.pending[self.start..end]);
            self.start = newline + 1;
            self.scan = self.start;
            self.lines_emitted += 1;
            return Some(line);
        }
        self.scan = self.pending.len();

        if self.finished && self.start < self.pending.len() {
            let line = decode(&self.pending[self.start..]);
            self.start = self.pending.len();
            self.scan = self.start;
            self.lines_emitted += 1;
            return Some(line);
        }

        None
    }

    /// Number of bytes buffered but not yet emitted as part of a line
    pub fn buffered(&self) -> usize {
        self.pending.len() - self.start
    }

    /// Total number of bytes pushed
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    /// Number of lines emitted so far
    pub fn lines_emitted(&self) -> usize {
        self.lines_emitted
    }

    fn check_bom(&mut self) {
        if self.bom_checked {
            return;
        }
        let n = self.pending.len().min(UTF8_BOM.len());
        if self.pending[..n] != UTF8_BOM[..n] {
            self.bom_checked = true;
        } else if n == UTF8_BOM.len() {
            self.start = n;
            self.scan = n;
            self.bom_checked = true;
        } else if self.finished {
            self.bom_checked = true;
        }
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
