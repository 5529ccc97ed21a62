//! Store Query Tests
//!
//! End-to-end: triple file -> dictionary -> index -> queries.

use std::io::Write;

use triplex::cli::{load_from_config, Config};
use triplex::ingest::read_triples;
use triplex::model::Triple;
use triplex::store::{TriplePattern, TripleStore};

// =============================================================================
// Helper Functions
// =============================================================================

const PEOPLE: &str = "\
# people
<Alice, knows, Bob>
<Bob, knows, Charlie>
<Alice, isFriend, Charlie>
<Charlie, knows, Alice>

<Alice, knows, Bob>
";

fn people_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PEOPLE.as_bytes()).unwrap();
    file
}

// =============================================================================
// Bulk Load
// =============================================================================

/// Repeated statements are stored once.
#[test]
fn test_load_deduplicates_statements() {
    let file = people_file();
    let store = load_from_config(&Config::for_triples(file.path())).unwrap();

    assert_eq!(store.len(), 4);
    store.index().check_invariants().unwrap();
}

/// Every loaded statement is retrievable by its own subject.
#[test]
fn test_every_statement_found_by_subject() {
    let triples = read_triples(PEOPLE.as_bytes()).unwrap();
    let mut store = TripleStore::new(2).unwrap();
    store.extend(triples.clone());
    let loaded = store.build().unwrap();

    for triple in &triples {
        let hits = loaded.prefix_search_terms(&[triple.subject.as_str()]).unwrap();
        assert!(hits.contains(triple));
        assert!(loaded.contains(triple));
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Subject + predicate prefix.
#[test]
fn test_subject_predicate_query() {
    let file = people_file();
    let store = load_from_config(&Config::for_triples(file.path())).unwrap();

    let hits = store.prefix_search_terms(&["Alice", "knows"]).unwrap();
    assert_eq!(hits, vec![Triple::new("Alice", "knows", "Bob")]);
}

/// Unknown term in a prefix is an error, not an empty result.
#[test]
fn test_unknown_term_query() {
    let file = people_file();
    let store = load_from_config(&Config::for_triples(file.path())).unwrap();

    let err = store.prefix_search_terms(&["Dave"]).unwrap_err();
    assert_eq!(err.code(), "TRIPLEX_UNKNOWN_TERM");
}

/// Pattern bindings decode back to terms.
#[test]
fn test_pattern_bindings() {
    let file = people_file();
    let store = load_from_config(&Config::for_triples(file.path())).unwrap();

    let results = store
        .matches(&TriplePattern::parse("Charlie", "?p", "?o"))
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["p"], "knows");
    assert_eq!(results[0]["o"], "Alice");
}

/// Larger generated graph, small branching factor.
#[test]
fn test_generated_graph() {
    let mut store = TripleStore::new(2).unwrap();
    for i in 0..300 {
        store.add(Triple::new(
            format!("person{}", i % 30),
            if i % 2 == 0 { "knows" } else { "likes" },
            format!("thing{}", i),
        ));
    }
    let loaded = store.build().unwrap();
    loaded.index().check_invariants().unwrap();

    // person8 appears for i = 8, 38, ..., 278: always even, always "knows"
    let hits = loaded.prefix_search_terms(&["person8", "knows"]).unwrap();
    assert_eq!(hits.len(), 10);
    assert!(hits.iter().all(|t| t.subject == "person8" && t.predicate == "knows"));
    assert!(loaded.prefix_search_terms(&["person8", "likes"]).unwrap().is_empty());

    let rendered = loaded.index().render_levels();
    assert_eq!(rendered.len(), loaded.index().height());
}
