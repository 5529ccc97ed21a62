//! Triple store for triplex
//!
//! Owns the encoding pipeline: collects statements, builds the dictionary
//! once, loads the ordered index, then answers prefix and pattern queries.
//!
//! The dictionary is an explicit value owned by the loaded store; there is
//! no process-wide term table.

mod errors;
mod pattern;
mod store;

pub use errors::{StoreError, StoreResult};
pub use pattern::{Bindings, PatternTerm, TriplePattern};
pub use store::{LoadedStore, TripleStore};
