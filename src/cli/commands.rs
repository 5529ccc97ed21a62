//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Resolve configuration
//! 2. Read the triple file
//! 3. Bulk load (dictionary, then index)
//! 4. Answer one request and exit

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::ingest;
use crate::model::Triple;
use crate::observability::Logger;
use crate::store::{Bindings, LoadedStore, StoreError, TriplePattern, TripleStore};

use super::args::{Command, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_lines, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Dict { source } => dict(&source),
        Command::Query { source, terms } => query(&source, &terms),
        Command::Match {
            source,
            subject,
            predicate,
            object,
        } => match_pattern(&source, &TriplePattern::parse(&subject, &predicate, &object)),
        Command::Tree { source } => tree(&source),
    }
}

/// Resolve config, read the triple file and run the bulk load
pub fn load(source: &SourceArgs) -> CliResult<LoadedStore> {
    let config = Config::resolve(source)?;
    Logger::set_min_severity(config.severity());
    config.log_loaded();
    load_from_config(&config)
}

/// Read and index the triple file named by `config`
pub fn load_from_config(config: &Config) -> CliResult<LoadedStore> {
    let triples = ingest::load_file(&config.triples_path)?;

    let mut store = TripleStore::new(config.branching_factor)?;
    store.extend(triples);
    Ok(store.build()?)
}

/// Print the term dictionary
pub fn dict(source: &SourceArgs) -> CliResult<()> {
    let store = load(source)?;
    write_response(dictionary_json(store.dictionary()))
}

/// Prefix search by leading terms
pub fn query(source: &SourceArgs, terms: &[String]) -> CliResult<()> {
    let store = load(source)?;
    let result = store.prefix_search_terms(terms);
    respond(result.map(|hits| triples_json(&hits)))
}

/// Pattern match with variables
pub fn match_pattern(source: &SourceArgs, pattern: &TriplePattern) -> CliResult<()> {
    let store = load(source)?;
    let result = store.matches(pattern);
    respond(result.map(|bindings| bindings_json(&bindings)))
}

/// Print the index one level per line
pub fn tree(source: &SourceArgs) -> CliResult<()> {
    let store = load(source)?;
    write_lines(&store.index().render_levels())
}

/// Write the query outcome; a rejected query still exits non-zero.
///
/// The returned error is already reported on stdout.
fn respond(result: Result<Value, StoreError>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
            Err(CliError::query_failed(e.to_string()))
        }
    }
}

/// `[{"id":0,"term":"...","frequency":3}, ...]` in id order
pub fn dictionary_json(dictionary: &Dictionary) -> Value {
    let entries: Vec<Value> = dictionary
        .iter()
        .map(|(id, term)| {
            json!({
                "id": id,
                "term": term,
                "frequency": dictionary.frequency(id).unwrap_or(0),
            })
        })
        .collect();
    Value::Array(entries)
}

/// `[{"subject":..,"predicate":..,"object":..}, ...]`
pub fn triples_json(triples: &[Triple]) -> Value {
    json!(triples)
}

/// `[{"var": "term", ...}, ...]`
pub fn bindings_json(bindings: &[Bindings]) -> Value {
    json!(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn triple_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "<Alice, knows, Bob>").unwrap();
        writeln!(file, "<Bob, knows, Charlie>").unwrap();
        writeln!(file, "<Alice, isFriend, Charlie>").unwrap();
        writeln!(file, "<Charlie, knows, Alice>").unwrap();
        file
    }

    #[test]
    fn test_load_from_config() {
        let file = triple_file();
        let store = load_from_config(&Config::for_triples(file.path())).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.dictionary().id_of("Charlie"), Some(2));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_config(&Config::for_triples("/nonexistent/triples.txt")).unwrap_err();
        assert_eq!(err.code_str(), "TRIPLEX_CLI_LOAD_FAILED");
    }

    #[test]
    fn test_dictionary_json() {
        let file = triple_file();
        let store = load_from_config(&Config::for_triples(file.path())).unwrap();

        let value = dictionary_json(store.dictionary());
        assert_eq!(value[0], json!({"id": 0, "term": "Alice", "frequency": 3}));
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_triples_json() {
        let value = triples_json(&[Triple::new("Alice", "knows", "Bob")]);
        assert_eq!(
            value,
            json!([{"subject": "Alice", "predicate": "knows", "object": "Bob"}])
        );
    }

    #[test]
    fn test_bindings_json() {
        let file = triple_file();
        let store = load_from_config(&Config::for_triples(file.path())).unwrap();
        let bindings = store
            .matches(&TriplePattern::parse("Bob", "knows", "?who"))
            .unwrap();

        assert_eq!(bindings_json(&bindings), json!([{"who": "Charlie"}]));
    }
}
