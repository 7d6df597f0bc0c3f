use crate::stream::StreamError;

/// Structural failures that reject a whole file
///
/// Row-level problems are not errors; they only show up in
/// [`ParseStats`](super::ParseStats).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No line containing the word `Time` before end of input
    #[error("no header row containing 'Time' found ({lines_read} lines read)")]
    NoHeaderFound {
        /// Lines consumed before giving up
        lines_read: usize,
    },

    /// A header was found but no data row was accepted
    #[error("header found but no valid data rows ({malformed_rows} malformed rows skipped)")]
    NoDataRows {
        /// Rows skipped because of a token count mismatch
        malformed_rows: usize,
    },

    /// Error reading the underlying byte stream
    #[error("Stream error: {0}")]
    StreamError(#[from] StreamError),
}

impl ParseError {
    /// Whether the input was readable but has the wrong shape or no body
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::NoHeaderFound { .. } | Self::NoDataRows { .. })
    }
}
