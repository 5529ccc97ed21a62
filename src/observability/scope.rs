//! ObservationScope for begin/complete logging around a phase
//!
//! - `{NAME}_BEGIN` on creation
//! - `{NAME}_COMPLETE` with `elapsed_us` on `complete()`
//! - `{NAME}_FAILED` on `fail()`
//! - `{NAME}_INCOMPLETE` if dropped without either

use std::time::Instant;

use super::logger::Logger;

/// A scope that logs the start and outcome of a named phase
///
/// ```ignore
/// let scope = ObservationScope::new("BULK_LOAD");
/// // ... insert every statement ...
/// scope.complete_with_fields(&[("triples", "42")]);
/// ```
pub struct ObservationScope {
    name: &'static str,
    started: Instant,
    finished: bool,
    fields: Vec<(&'static str, String)>,
}

impl ObservationScope {
    /// Open a scope, logging `{name}_BEGIN`
    pub fn new(name: &'static str) -> Self {
        Self::with_fields(name, &[])
    }

    /// Open a scope whose fields are repeated on every event it logs
    pub fn with_fields(name: &'static str, fields: &[(&'static str, &str)]) -> Self {
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            started: Instant::now(),
            finished: false,
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    /// Microseconds since the scope was opened
    pub fn elapsed_us(&self) -> u128 {
        self.started.elapsed().as_micros()
    }

    /// Close the scope successfully
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Close the scope successfully with result fields
    pub fn complete_with_fields(mut self, extra_fields: &[(&str, &str)]) {
        let elapsed = self.elapsed_us().to_string();
        let mut extra = extra_fields.to_vec();
        extra.push(("elapsed_us", elapsed.as_str()));

        let (event, fields) = self.close("COMPLETE", &extra);
        Logger::info(&event, &field_refs(&fields));
    }

    /// Close the scope as failed
    pub fn fail(mut self, reason: &str) {
        let (event, fields) = self.close("FAILED", &[("reason", reason)]);
        Logger::error(&event, &field_refs(&fields));
    }

    /// Mark finished and build the closing event: scope fields, then `extra`
    fn close(&mut self, outcome: &str, extra: &[(&str, &str)]) -> (String, Vec<(String, String)>) {
        self.finished = true;

        let fields = self
            .fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .chain(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .collect();
        (format!("{}_{}", self.name, outcome), fields)
    }

    /// Whether `complete` or `fail` has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn field_refs(fields: &[(String, String)]) -> Vec<(&str, &str)> {
    fields.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
