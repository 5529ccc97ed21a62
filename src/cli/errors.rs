//! CLI-specific error types

use std::fmt;
use std::io;

use crate::ingest::IngestError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag error
    ConfigError,
    /// I/O error (stdout, triple file)
    IoError,
    /// Triple source could not be read or indexed
    LoadFailed,
    /// Query rejected
    QueryFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TRIPLEX_CLI_CONFIG_ERROR",
            Self::IoError => "TRIPLEX_CLI_IO_ERROR",
            Self::LoadFailed => "TRIPLEX_CLI_LOAD_FAILED",
            Self::QueryFailed => "TRIPLEX_CLI_QUERY_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Load failed
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::LoadFailed, msg)
    }

    /// Query failed
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::QueryFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the error was already written as a JSON error response
    pub fn is_reported(&self) -> bool {
        self.code == CliErrorCode::QueryFailed
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<IngestError> for CliError {
    fn from(e: IngestError) -> Self {
        Self::load_failed(format!("{}: {}", e.code(), e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::load_failed(format!("{}: {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CliError::config_error("missing triples_path");
        assert_eq!(err.to_string(), "TRIPLEX_CLI_CONFIG_ERROR: missing triples_path");
    }

    #[test]
    fn test_only_query_failures_are_reported() {
        assert!(CliError::query_failed("unknown term").is_reported());
        assert!(!CliError::config_error("no source").is_reported());
        assert!(!CliError::load_failed("missing file").is_reported());
    }

    #[test]
    fn test_from_ingest_error() {
        let err: CliError = IngestError::Malformed {
            line: 3,
            content: "oops".to_string(),
        }
        .into();
        assert_eq!(err.code(), &CliErrorCode::LoadFailed);
        assert!(err.message().contains("TRIPLEX_MALFORMED_TRIPLE"));
    }
}
