//! Frequency-ordered term dictionary
//!
//! Built once from the full term population. Frequent terms (usually
//! predicates and hub entities) receive the smallest ids, which keeps
//! encoded tuples readable when debugging.

use std::collections::HashMap;
use std::fmt;

use crate::model::{EncodedTriple, TermId, Triple};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{DictionaryError, DictionaryResult};

/// Immutable bidirectional term <-> id mapping
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Terms indexed by id
    terms: Vec<String>,
    /// Occurrence counts indexed by id
    frequencies: Vec<u64>,
    /// Reverse mapping for O(1) term lookup
    ids: HashMap<String, TermId>,
}

impl Dictionary {
    /// Build from every subject, predicate and object occurrence.
    pub fn build<'a, I>(triples: I) -> Self
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        Self::from_terms(triples.into_iter().flat_map(|t| t.terms()))
    }

    /// Build from a raw stream of term occurrences.
    ///
    /// Ids are assigned by descending occurrence count; equal counts keep
    /// the order in which terms were first seen.
    pub fn from_terms<I, S>(occurrences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // (term, count) in first-seen order
        let mut counted: Vec<(String, u64)> = Vec::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut total: u64 = 0;

        for term in occurrences {
            let term = term.as_ref();
            total += 1;
            match first_seen.get(term) {
                Some(&pos) => counted[pos].1 += 1,
                None => {
                    first_seen.insert(term.to_string(), counted.len());
                    counted.push((term.to_string(), 1));
                }
            }
        }

        // Stable: ties stay in first-seen order
        counted.sort_by(|a, b| b.1.cmp(&a.1));

        let mut terms = Vec::with_capacity(counted.len());
        let mut frequencies = Vec::with_capacity(counted.len());
        let mut ids = HashMap::with_capacity(counted.len());
        for (id, (term, count)) in counted.into_iter().enumerate() {
            ids.insert(term.clone(), id as TermId);
            terms.push(term);
            frequencies.push(count);
        }

        let occurrences = total.to_string();
        let distinct = terms.len().to_string();
        log_event_with_fields(
            Event::DictionaryBuilt,
            &[("occurrences", occurrences.as_str()), ("terms", distinct.as_str())],
        );

        Self {
            terms,
            frequencies,
            ids,
        }
    }

    /// Id of a term, or `None` if the term was never seen.
    ///
    /// `None` is a normal outcome; callers must check it before using the
    /// id as an index key.
    pub fn id_of(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Term for an id in `[0, N)`
    pub fn term_of(&self, id: TermId) -> DictionaryResult<&str> {
        self.terms
            .get(id as usize)
            .map(String::as_str)
            .ok_or_else(|| DictionaryError::invalid_id(id, self.terms.len()))
    }

    /// Number of occurrences counted for an id at build time
    pub fn frequency(&self, id: TermId) -> DictionaryResult<u64> {
        self.frequencies
            .get(id as usize)
            .copied()
            .ok_or_else(|| DictionaryError::invalid_id(id, self.terms.len()))
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms were seen
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(id, term)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(id, term)| (id as TermId, term.as_str()))
    }

    /// Look up a sequence of terms, failing on the first unknown one
    pub fn encode_terms<S: AsRef<str>>(&self, terms: &[S]) -> DictionaryResult<Vec<TermId>> {
        terms
            .iter()
            .map(|t| {
                let t = t.as_ref();
                self.id_of(t).ok_or_else(|| DictionaryError::unknown_term(t))
            })
            .collect()
    }

    /// Encode a statement. Any unknown term fails the whole statement.
    pub fn encode(&self, triple: &Triple) -> DictionaryResult<EncodedTriple> {
        let [s, p, o] = triple.terms();
        let lookup = |t: &str| self.id_of(t).ok_or_else(|| DictionaryError::unknown_term(t));

        Ok(EncodedTriple::new(lookup(s)?, lookup(p)?, lookup(o)?))
    }

    /// Decode a statement back to its terms
    pub fn decode(&self, encoded: EncodedTriple) -> DictionaryResult<Triple> {
        Ok(Triple::new(
            self.term_of(encoded.s)?,
            self.term_of(encoded.p)?,
            self.term_of(encoded.o)?,
        ))
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, (term, count)) in self.terms.iter().zip(&self.frequencies).enumerate() {
            writeln!(f, "{}\t{}\t{}", id, term, count)?;
        }
        Ok(())
    }
}
