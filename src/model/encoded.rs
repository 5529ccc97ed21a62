//! Fixed-width integer statements
//!
//! Ordering is lexicographic over (s, p, o). Field declaration order
//! carries the ordering through the derived `Ord`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense dictionary identifier in `[0, N)`
pub type TermId = u32;

/// A statement whose terms have been replaced by dictionary ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct EncodedTriple {
    /// Subject id
    pub s: TermId,
    /// Predicate id
    pub p: TermId,
    /// Object id
    pub o: TermId,
}

impl EncodedTriple {
    /// Create an encoded triple
    pub const fn new(s: TermId, p: TermId, o: TermId) -> Self {
        Self { s, p, o }
    }

    /// Components in s, p, o order
    pub fn components(&self) -> [TermId; 3] {
        [self.s, self.p, self.o]
    }
}

impl From<(TermId, TermId, TermId)> for EncodedTriple {
    fn from((s, p, o): (TermId, TermId, TermId)) -> Self {
        Self::new(s, p, o)
    }
}

impl From<[TermId; 3]> for EncodedTriple {
    fn from([s, p, o]: [TermId; 3]) -> Self {
        Self::new(s, p, o)
    }
}

impl fmt::Display for EncodedTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_ordering() {
        let keys = vec![
            EncodedTriple::new(0, 0, 0),
            EncodedTriple::new(0, 0, 9),
            EncodedTriple::new(0, 1, 0),
            EncodedTriple::new(1, 0, 0),
            EncodedTriple::new(1, 9, 3),
            EncodedTriple::new(1, 9, 4),
            EncodedTriple::new(2, 5, 7),
        ];

        for i in 1..keys.len() {
            assert!(keys[i - 1] < keys[i], "{} should sort before {}", keys[i - 1], keys[i]);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(EncodedTriple::new(1, 9, 3).to_string(), "(1, 9, 3)");
    }
}
