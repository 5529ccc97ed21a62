//! Dictionary error types
//!
//! Error codes:
//! - TRIPLEX_UNKNOWN_TERM (ERROR)
//! - TRIPLEX_INVALID_ID (FATAL)

use std::fmt;

use crate::model::TermId;

/// Severity levels shared by the core error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller supplied something the structure does not hold
    Error,
    /// Upstream programming error; do not retry
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Dictionary-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryErrorCode {
    /// Term was not part of the population the dictionary was built from
    UnknownTerm,
    /// Id outside `[0, N)`
    InvalidId,
}

impl DictionaryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryErrorCode::UnknownTerm => "TRIPLEX_UNKNOWN_TERM",
            DictionaryErrorCode::InvalidId => "TRIPLEX_INVALID_ID",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            DictionaryErrorCode::UnknownTerm => Severity::Error,
            DictionaryErrorCode::InvalidId => Severity::Fatal,
        }
    }
}

impl fmt::Display for DictionaryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dictionary error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryError {
    code: DictionaryErrorCode,
    message: String,
}

impl DictionaryError {
    /// Term lookup failed while encoding
    pub fn unknown_term(term: &str) -> Self {
        Self {
            code: DictionaryErrorCode::UnknownTerm,
            message: format!("Unknown term '{}'", term),
        }
    }

    /// Id lookup out of range
    pub fn invalid_id(id: TermId, len: usize) -> Self {
        Self {
            code: DictionaryErrorCode::InvalidId,
            message: format!("Id {} outside dictionary range [0, {})", id, len),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DictionaryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for DictionaryError {}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DictionaryErrorCode::UnknownTerm.code(), "TRIPLEX_UNKNOWN_TERM");
        assert_eq!(DictionaryErrorCode::InvalidId.code(), "TRIPLEX_INVALID_ID");
    }

    #[test]
    fn test_invalid_id_is_fatal() {
        assert!(DictionaryError::invalid_id(7, 5).is_fatal());
        assert!(!DictionaryError::unknown_term("Zed").is_fatal());
    }

    #[test]
    fn test_error_display() {
        let err = DictionaryError::invalid_id(7, 5);
        let display = err.to_string();
        assert!(display.contains("FATAL"));
        assert!(display.contains("TRIPLEX_INVALID_ID"));
        assert!(display.contains("[0, 5)"));
    }
}
