//! String-valued statements

use std::fmt;

use serde::{Deserialize, Serialize};

/// A subject-predicate-object statement over string terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term
    pub subject: String,
    /// Predicate term
    pub predicate: String,
    /// Object term
    pub object: String,
}

impl Triple {
    /// Create a triple from three terms
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Terms in subject, predicate, object order
    pub fn terms(&self) -> [&str; 3] {
        [&self.subject, &self.predicate, &self.object]
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_order() {
        let t = Triple::new("Alice", "knows", "Bob");
        assert_eq!(t.terms(), ["Alice", "knows", "Bob"]);
    }

    #[test]
    fn test_display() {
        let t = Triple::new("Alice", "knows", "Bob");
        assert_eq!(t.to_string(), "<Alice, knows, Bob>");
    }
}
