//! JSON output for CLI commands
//!
//! - Success: `{"status":"ok","data":...}`
//! - Failure: `{"status":"error","code":...,"message":...}`
//! - One JSON object per line on stdout

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_error_to(&mut io::stdout(), code, message)
}

/// Write plain text lines to stdout
pub fn write_lines(lines: &[String]) -> CliResult<()> {
    let mut stdout = io::stdout();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(())
}

fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = json!({
        "status": "ok",
        "data": data
    });
    write_value(writer, &response)
}

fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_value(writer, &response)
}

fn write_value<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let mut buffer = Vec::new();
        write_response_to(&mut buffer, json!([1, 2])).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"], json!([1, 2]));
    }

    #[test]
    fn test_error_shape() {
        let mut buffer = Vec::new();
        write_error_to(&mut buffer, "TRIPLEX_UNKNOWN_TERM", "Unknown term 'Dave'").unwrap();

        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "TRIPLEX_UNKNOWN_TERM");
        assert_eq!(parsed["message"], "Unknown term 'Dave'");
    }
}
