/// Errors that can occur while reading a line stream
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// I/O error from the underlying source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
