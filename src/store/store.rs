//! Encoding pipeline: statements -> dictionary -> ordered index
//!
//! Two phases with an explicit hand-off:
//! - `TripleStore` collects statements (set semantics)
//! - `build()` consumes it, builds the dictionary, encodes every statement
//!   and inserts it, returning a read-only `LoadedStore`

use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::index::{IndexError, IndexTree, Prefix, DEFAULT_BRANCHING_FACTOR, MIN_BRANCHING_FACTOR};
use crate::model::{EncodedTriple, TermId, Triple};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

use super::errors::{StoreError, StoreResult};
use super::pattern::{Bindings, TriplePattern};

/// Statements collected before the bulk load
#[derive(Debug, Clone)]
pub struct TripleStore {
    branching_factor: usize,
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl TripleStore {
    /// Creates an empty store whose index will use branching factor `t`.
    pub fn new(branching_factor: usize) -> StoreResult<Self> {
        if branching_factor < MIN_BRANCHING_FACTOR {
            return Err(IndexError::invalid_branching_factor(branching_factor).into());
        }

        Ok(Self {
            branching_factor,
            triples: Vec::new(),
            seen: HashSet::new(),
        })
    }

    /// Add a statement. Returns false if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Add many statements, returning how many were new
    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> usize {
        let mut added = 0;
        for triple in triples {
            if self.add(triple) {
                added += 1;
            }
        }
        added
    }

    /// Number of distinct statements collected
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether no statements were collected
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Run the bulk load.
    pub fn build(self) -> StoreResult<LoadedStore> {
        let triples_field = self.triples.len().to_string();
        let scope =
            ObservationScope::with_fields("BULK_LOAD", &[("triples", triples_field.as_str())]);

        let dictionary = Dictionary::build(&self.triples);
        let mut index = IndexTree::new(self.branching_factor)?;

        for triple in &self.triples {
            match dictionary.encode(triple) {
                Ok(encoded) => index.insert(encoded),
                Err(e) => {
                    // Unreachable with a dictionary built from these statements
                    scope.fail(e.message());
                    return Err(e.into());
                }
            }
        }

        let terms = dictionary.len().to_string();
        let height = index.height().to_string();
        scope.complete_with_fields(&[("terms", terms.as_str()), ("height", height.as_str())]);

        Ok(LoadedStore { dictionary, index })
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
            triples: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

/// Read-only dictionary and index after the bulk load
#[derive(Debug, Clone)]
pub struct LoadedStore {
    dictionary: Dictionary,
    index: IndexTree,
}

impl LoadedStore {
    /// Term dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Ordered index over encoded statements
    pub fn index(&self) -> &IndexTree {
        &self.index
    }

    /// Number of indexed statements
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Encoded prefix search.
    pub fn search_encoded(&self, components: &[TermId]) -> StoreResult<Vec<EncodedTriple>> {
        match self.index.search(components) {
            Ok(hits) => {
                log_query(components.len(), hits.len());
                Ok(hits)
            }
            Err(e) => {
                log_rejected(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Prefix search by terms, decoded.
    ///
    /// An unknown term is an error, never a silent empty result.
    pub fn prefix_search_terms<S: AsRef<str>>(&self, terms: &[S]) -> StoreResult<Vec<Triple>> {
        let ids = self.dictionary.encode_terms(terms).map_err(|e| {
            log_rejected(e.message());
            StoreError::from(e)
        })?;

        self.search_encoded(&ids)?
            .into_iter()
            .map(|hit| self.dictionary.decode(hit).map_err(StoreError::from))
            .collect()
    }

    /// Whether a statement was indexed
    pub fn contains(&self, triple: &Triple) -> bool {
        match self.dictionary.encode(triple) {
            Ok(encoded) => self.index.count_prefix(&Prefix::from(encoded)) > 0,
            Err(_) => false,
        }
    }

    /// Distinct variable bindings for a prefix-anchored pattern, in index order.
    ///
    /// A bound term absent from the dictionary cannot match anything and
    /// yields an empty result.
    pub fn matches(&self, pattern: &TriplePattern) -> StoreResult<Vec<Bindings>> {
        let bound = pattern.bound_prefix().map_err(|e| {
            log_rejected(&e.to_string());
            e
        })?;

        let ids: Option<Vec<TermId>> = bound.iter().map(|t| self.dictionary.id_of(t)).collect();
        let Some(ids) = ids else {
            log_query(bound.len(), 0);
            return Ok(Vec::new());
        };

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        for hit in self.search_encoded(&ids)? {
            let triple = self.dictionary.decode(hit)?;
            if let Some(bindings) = pattern.bind(triple.terms()) {
                if seen.insert(bindings.clone()) {
                    results.push(bindings);
                }
            }
        }
        Ok(results)
    }

    /// Every indexed statement, decoded, in index order
    pub fn triples(&self) -> StoreResult<Vec<Triple>> {
        self.index
            .iter()
            .map(|hit| self.dictionary.decode(hit).map_err(StoreError::from))
            .collect()
    }
}

fn log_query(arity: usize, results: usize) {
    let arity = arity.to_string();
    let results = results.to_string();
    log_event_with_fields(
        Event::QueryExecuted,
        &[("prefix_len", arity.as_str()), ("results", results.as_str())],
    );
}

fn log_rejected(reason: &str) {
    log_event_with_fields(Event::QueryRejected, &[("reason", reason)]);
}
