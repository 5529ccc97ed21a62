//! triplex - dictionary-encoded ordered index over RDF-style triples
//!
//! Statements are bulk-loaded once: every term is mapped to a dense integer
//! id (most frequent first), each statement becomes a fixed-width
//! `EncodedTriple`, and all of them go into a height-balanced tree that
//! answers prefix queries ("this subject", "this subject and predicate").
//!
//! ```ignore
//! use triplex::model::Triple;
//! use triplex::store::TripleStore;
//!
//! let mut store = TripleStore::new(3)?;
//! store.add(Triple::new("Alice", "knows", "Bob"));
//! let loaded = store.build()?;
//! let hits = loaded.prefix_search_terms(&["Alice"])?;
//! ```

pub mod cli;
pub mod dictionary;
pub mod index;
pub mod ingest;
pub mod model;
pub mod observability;
pub mod store;
