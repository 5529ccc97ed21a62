//! Store error types

use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::index::IndexError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the encoding pipeline and pattern queries
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("{0}")]
    Dictionary(#[from] DictionaryError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("Pattern {0} is not anchored on a leading run of bound terms")]
    UnanchoredPattern(String),
}

impl StoreError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Dictionary(e) => e.code().code(),
            StoreError::Index(e) => e.code().code(),
            StoreError::UnanchoredPattern(_) => "TRIPLEX_UNANCHORED_PATTERN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: StoreError = DictionaryError::unknown_term("Zed").into();
        assert_eq!(err.code(), "TRIPLEX_UNKNOWN_TERM");

        let err: StoreError = IndexError::invalid_prefix_length(0).into();
        assert_eq!(err.code(), "TRIPLEX_INVALID_PREFIX_LENGTH");
    }
}
