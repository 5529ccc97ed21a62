//! Observability for triplex
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//! - Begin/complete scopes around bulk phases
//!
//! Observability is read-only: nothing here affects index state.
//!
//! ```ignore
//! use triplex::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryExecuted, &[("results", "3")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Warn
    } else if event.is_trace() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity() {
        assert_eq!(severity_for(Event::QueryExecuted), Severity::Info);
        assert_eq!(severity_for(Event::QueryRejected), Severity::Warn);
        assert_eq!(severity_for(Event::IndexRootSplit), Severity::Trace);
    }

    #[test]
    fn test_event_line_uses_event_severity() {
        let event = Event::TripleRejected;
        let line = logger::capture_log(severity_for(event), event.as_str(), &[("line", "7")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "TRIPLE_REJECTED");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["line"], "7");
    }

    #[test]
    fn test_trace_events_hidden_at_default_threshold() {
        assert!(!Logger::enabled(severity_for(Event::IndexRootSplit)));
        assert!(Logger::enabled(severity_for(Event::QueryRejected)));
    }
}
