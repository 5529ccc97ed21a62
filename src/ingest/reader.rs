//! Line-oriented statement reader
//!
//! One statement per line: `<subject, predicate, object>`.
//! Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::Triple;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{IngestError, IngestResult};

const SEPARATOR: &str = ", ";

/// Parse one line. `Ok(None)` for blank and comment lines.
///
/// `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> IngestResult<Option<Triple>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let malformed = || IngestError::Malformed {
        line: line_no,
        content: trimmed.to_string(),
    };

    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(malformed)?;

    let terms: Vec<&str> = inner.split(SEPARATOR).map(str::trim).collect();
    match terms.as_slice() {
        [s, p, o] if !s.is_empty() && !p.is_empty() && !o.is_empty() => {
            Ok(Some(Triple::new(*s, *p, *o)))
        }
        _ => Err(malformed()),
    }
}

/// Read every statement from a buffered source, in order.
pub fn read_triples<R: BufRead>(reader: R) -> IngestResult<Vec<Triple>> {
    let mut triples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, idx + 1) {
            Ok(Some(triple)) => triples.push(triple),
            Ok(None) => {}
            Err(e) => {
                let line_no = (idx + 1).to_string();
                let reason = e.to_string();
                log_event_with_fields(
                    Event::TripleRejected,
                    &[("line", line_no.as_str()), ("reason", reason.as_str())],
                );
                return Err(e);
            }
        }
    }

    Ok(triples)
}

/// Read every statement from a file.
pub fn load_file(path: &Path) -> IngestResult<Vec<Triple>> {
    let file = File::open(path)?;
    let triples = read_triples(BufReader::new(file))?;

    let shown = path.display().to_string();
    let count = triples.len().to_string();
    log_event_with_fields(
        Event::TriplesLoaded,
        &[("path", shown.as_str()), ("triples", count.as_str())],
    );
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        let triple = parse_line("<Alice, knows, Bob>", 1).unwrap().unwrap();
        assert_eq!(triple, Triple::new("Alice", "knows", "Bob"));
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let triple = parse_line("   <Alice, knows, Bob>  \r", 1).unwrap().unwrap();
        assert_eq!(triple.object, "Bob");
    }

    #[test]
    fn test_skips_blank_and_comments() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   ", 1).unwrap().is_none());
        assert!(parse_line("# people", 1).unwrap().is_none());
    }

    #[test]
    fn test_malformed_lines() {
        for bad in ["Alice, knows, Bob", "<Alice, knows>", "<Alice, knows, Bob, Carol>", "<, knows, Bob>"] {
            let err = parse_line(bad, 7).unwrap_err();
            assert_eq!(err.code(), "TRIPLEX_MALFORMED_TRIPLE");
            assert!(err.to_string().contains("line 7"));
        }
    }

    #[test]
    fn test_read_triples() {
        let input = "<Alice, knows, Bob>\n\n# comment\n<Bob, knows, Charlie>\n";
        let triples = read_triples(Cursor::new(input)).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1], Triple::new("Bob", "knows", "Charlie"));
    }

    #[test]
    fn test_read_triples_reports_line_number() {
        let input = "<Alice, knows, Bob>\nnot a triple\n";
        match read_triples(Cursor::new(input)) {
            Err(IngestError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/nonexistent/triples.txt")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
