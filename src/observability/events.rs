//! Observable events for triplex
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration and input
    /// Configuration loaded
    ConfigLoaded,
    /// Triple source read
    TriplesLoaded,
    /// Triple source line rejected
    TripleRejected,

    // Bulk load
    /// Dictionary built from the term population
    DictionaryBuilt,
    /// Tree grew by one level
    IndexRootSplit,

    // Queries
    /// Query answered
    QueryExecuted,
    /// Query rejected before touching the index
    QueryRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TriplesLoaded => "TRIPLES_LOADED",
            Event::TripleRejected => "TRIPLE_REJECTED",
            Event::DictionaryBuilt => "DICTIONARY_BUILT",
            Event::IndexRootSplit => "INDEX_ROOT_SPLIT",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }

    /// Whether this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::TripleRejected | Event::QueryRejected)
    }

    /// Whether this event is only interesting at trace level
    pub fn is_trace(&self) -> bool {
        matches!(self, Event::IndexRootSplit)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
