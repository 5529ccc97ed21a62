//! Index error types
//!
//! Error codes:
//! - TRIPLEX_INVALID_PREFIX_LENGTH (ERROR)
//! - TRIPLEX_INVALID_BRANCHING_FACTOR (FATAL)
//! - TRIPLEX_INDEX_STRUCTURE_VIOLATION (FATAL)

use std::fmt;

use crate::dictionary::Severity;

/// Index-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Prefix query with 0 or more than 3 components
    InvalidPrefixLength,
    /// Tree constructed with `t < 2`
    InvalidBranchingFactor,
    /// Structural check found a broken tree
    StructureViolation,
}

impl IndexErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::InvalidPrefixLength => "TRIPLEX_INVALID_PREFIX_LENGTH",
            IndexErrorCode::InvalidBranchingFactor => "TRIPLEX_INVALID_BRANCHING_FACTOR",
            IndexErrorCode::StructureViolation => "TRIPLEX_INDEX_STRUCTURE_VIOLATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            IndexErrorCode::InvalidPrefixLength => Severity::Error,
            IndexErrorCode::InvalidBranchingFactor | IndexErrorCode::StructureViolation => {
                Severity::Fatal
            }
        }
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Index error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexError {
    code: IndexErrorCode,
    message: String,
}

impl IndexError {
    /// Prefix length outside `1..=3`
    pub fn invalid_prefix_length(len: usize) -> Self {
        Self {
            code: IndexErrorCode::InvalidPrefixLength,
            message: format!("Prefix has {} components, expected 1 to 3", len),
        }
    }

    /// Branching factor below the minimum of 2
    pub fn invalid_branching_factor(t: usize) -> Self {
        Self {
            code: IndexErrorCode::InvalidBranchingFactor,
            message: format!("Branching factor {} is below the minimum of 2", t),
        }
    }

    /// Structural invariant broken
    pub fn structure_violation(reason: impl Into<String>) -> Self {
        Self {
            code: IndexErrorCode::StructureViolation,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IndexErrorCode {
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

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for IndexError {}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;
