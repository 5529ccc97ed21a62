//! CLI Output Tests
//!
//! Runs the `triplex` binary and checks that stdout carries exactly one
//! response line per command, with log events kept off it.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

// =============================================================================
// Helper Functions
// =============================================================================

const PEOPLE: &str = "\
<Alice, knows, Bob>
<Bob, knows, Charlie>
<Alice, isFriend, Charlie>
<Charlie, knows, Alice>
";

fn people_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("people.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(PEOPLE.as_bytes()).unwrap();
    path
}

fn triplex(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triplex"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn single_response(output: &Output) -> Value {
    let lines = stdout_lines(output);
    assert_eq!(lines.len(), 1, "stdout: {:?}", lines);
    serde_json::from_str(&lines[0]).unwrap()
}

// =============================================================================
// Successful Commands
// =============================================================================

/// With the default log level a query prints only its response.
#[test]
fn test_query_prints_one_response_line() {
    let dir = tempfile::tempdir().unwrap();
    let triples = people_file(dir.path());

    let output = triplex(dir.path(), &["query", "--triples", triples.to_str().unwrap(), "Alice"]);

    assert!(output.status.success());
    let response = single_response(&output);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["data"].as_array().unwrap().len(), 2);
    assert!(response.get("event").is_none());
}

/// Every JSON command keeps stdout to a single line.
#[test]
fn test_dict_and_match_print_one_response_line() {
    let dir = tempfile::tempdir().unwrap();
    let triples = people_file(dir.path());
    let path = triples.to_str().unwrap();

    let dict = triplex(dir.path(), &["dict", "--triples", path]);
    assert_eq!(single_response(&dict)["data"][0]["term"], "Alice");

    let matched = triplex(dir.path(), &["match", "--triples", path, "Bob", "knows", "?who"]);
    assert_eq!(single_response(&matched)["data"][0]["who"], "Charlie");
}

/// Lowering the level brings INFO events back, including the config event.
#[test]
fn test_info_level_emits_config_event() {
    let dir = tempfile::tempdir().unwrap();
    let triples = people_file(dir.path());

    let output = triplex(
        dir.path(),
        &["query", "--triples", triples.to_str().unwrap(), "--log-level", "info", "Alice"],
    );

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l.contains("\"CONFIG_LOADED\"")));
    assert!(lines.len() > 1);
}

// =============================================================================
// Configuration
// =============================================================================

/// A flag replaces an out-of-range file value before validation.
#[test]
fn test_flag_overrides_invalid_config_value() {
    let dir = tempfile::tempdir().unwrap();
    let triples = people_file(dir.path());
    let config = dir.path().join("triplex.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"triples_path": {:?}, "branching_factor": 1}}"#,
            triples.to_str().unwrap()
        ),
    )
    .unwrap();

    let rejected = triplex(dir.path(), &["dict"]);
    assert!(!rejected.status.success());
    assert!(stdout_lines(&rejected).is_empty());

    let accepted = triplex(dir.path(), &["dict", "--branching-factor", "3"]);
    assert!(accepted.status.success());
    assert_eq!(single_response(&accepted)["status"], "ok");
}

// =============================================================================
// Rejected Queries
// =============================================================================

/// A rejected query is answered once, on stdout, and still exits non-zero.
#[test]
fn test_rejected_query_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let triples = people_file(dir.path());

    let output = triplex(dir.path(), &["query", "--triples", triples.to_str().unwrap(), "Dave"]);

    assert!(!output.status.success());
    let response = single_response(&output);
    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "TRIPLEX_UNKNOWN_TERM");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("TRIPLEX_CLI_QUERY_FAILED"));
}
