//! Triple source errors

use thiserror::Error;

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors reading statements from a triple source
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Malformed statement at line {line}: {content}")]
    Malformed { line: usize, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::Malformed { .. } => "TRIPLEX_MALFORMED_TRIPLE",
            IngestError::Io(_) => "TRIPLEX_IO_ERROR",
        }
    }
}
