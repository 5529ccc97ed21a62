//! Dictionary encoder for triplex
//!
//! Bidirectional mapping between string terms and dense integer ids.
//!
//! # Invariants
//!
//! - Ids form the dense range `[0, N)`
//! - Ids are assigned by descending frequency, ties by first appearance
//! - `term_of(id_of(t)) == t` for every known term
//! - Immutable once built

mod dictionary;
mod errors;

pub use dictionary::Dictionary;
pub use errors::{DictionaryError, DictionaryErrorCode, DictionaryResult, Severity};
