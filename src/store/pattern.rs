//! Triple patterns with variables
//!
//! A pattern fixes a leading run of terms and leaves the rest as `?name`
//! variables, e.g. `<Alice, knows, ?who>`. Only prefix-anchored patterns are
//! answerable by a single ordered index.

use std::collections::BTreeMap;
use std::fmt;

use super::errors::{StoreError, StoreResult};

/// Variable name -> bound term
pub type Bindings = BTreeMap<String, String>;

/// One position of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternTerm {
    /// A concrete term
    Bound(String),
    /// A named variable, stored without the leading `?`
    Variable(String),
}

impl PatternTerm {
    /// `?name` becomes a variable; anything else is a bound term
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix('?') {
            Some(name) => PatternTerm::Variable(name.to_string()),
            None => PatternTerm::Bound(s.to_string()),
        }
    }

    /// Whether this position is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self, PatternTerm::Variable(_))
    }
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternTerm::Bound(term) => write!(f, "{}", term),
            PatternTerm::Variable(name) => write!(f, "?{}", name),
        }
    }
}

/// Subject, predicate and object pattern terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    terms: [PatternTerm; 3],
}

impl TriplePattern {
    /// Build a pattern from three terms
    pub fn new(subject: PatternTerm, predicate: PatternTerm, object: PatternTerm) -> Self {
        Self {
            terms: [subject, predicate, object],
        }
    }

    /// Parse three strings, treating `?name` as a variable
    pub fn parse(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(
            PatternTerm::parse(subject),
            PatternTerm::parse(predicate),
            PatternTerm::parse(object),
        )
    }

    /// Pattern terms in subject, predicate, object order
    pub fn terms(&self) -> &[PatternTerm; 3] {
        &self.terms
    }

    /// The leading bound terms.
    ///
    /// Fails when no term is bound, or when a bound term follows a variable.
    pub fn bound_prefix(&self) -> StoreResult<Vec<&str>> {
        let mut prefix = Vec::with_capacity(3);
        let mut seen_variable = false;

        for term in &self.terms {
            match term {
                PatternTerm::Bound(t) if !seen_variable => prefix.push(t.as_str()),
                PatternTerm::Bound(_) => return Err(StoreError::UnanchoredPattern(self.to_string())),
                PatternTerm::Variable(_) => seen_variable = true,
            }
        }

        if prefix.is_empty() {
            return Err(StoreError::UnanchoredPattern(self.to_string()));
        }
        Ok(prefix)
    }

    /// Bind this pattern's variables against a matching statement.
    ///
    /// Returns `None` when a repeated variable would take two different values.
    pub fn bind(&self, terms: [&str; 3]) -> Option<Bindings> {
        let mut bindings = Bindings::new();

        for (term, value) in self.terms.iter().zip(terms) {
            if let PatternTerm::Variable(name) = term {
                match bindings.get(name) {
                    Some(existing) if existing != value => return None,
                    Some(_) => {}
                    None => {
                        bindings.insert(name.clone(), value.to_string());
                    }
                }
            }
        }
        Some(bindings)
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s, p, o] = &self.terms;
        write!(f, "<{}, {}, {}>", s, p, o)
    }
}
