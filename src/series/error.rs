use crate::table::ParseError;

/// Errors that can occur while discovering and ingesting files
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A file version could not be parsed
    #[error("failed to ingest {source_id}: {source}")]
    ParseError {
        /// Identity of the rejected file version
        source_id: String,
        /// Underlying parse failure
        source: ParseError,
    },

    /// Error reading file metadata
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error walking an input directory
    #[error("Directory walk error: {0}")]
    WalkError(#[from] jwalk::Error),

    /// A search pattern could not be compiled
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl IngestError {
    /// Identity of the file version this error belongs to, if any
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::ParseError { source_id, .. } => Some(source_id),
            _ => None,
        }
    }
}
