//! Ordered index for triplex
//!
//! A height-balanced multi-way tree over `EncodedTriple` keys, answering
//! prefix queries ("this subject", "this subject and predicate") without
//! scanning every statement.
//!
//! # Invariants
//!
//! - In-order traversal is non-decreasing
//! - Non-root nodes hold `[t-1, 2t-1]` keys; all leaves share one depth
//! - Prefix search returns exactly the stored triples starting with the prefix
//!
//! No deletion, no persistence, no concurrent mutation.

mod btree;
mod errors;
mod prefix;
mod render;
mod search;

pub use btree::{IndexTree, Iter, DEFAULT_BRANCHING_FACTOR, MIN_BRANCHING_FACTOR};
pub use errors::{IndexError, IndexErrorCode, IndexResult};
pub use prefix::Prefix;
