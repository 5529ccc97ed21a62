//! Prefix keys for range retrieval

use std::cmp::Ordering;

use crate::model::{EncodedTriple, TermId};

use super::errors::{IndexError, IndexResult};

/// Leading 1 to 3 components of an encoded triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    components: [TermId; 3],
    arity: usize,
}

impl Prefix {
    /// Longest allowed prefix
    pub const MAX_ARITY: usize = 3;

    /// Build a prefix from 1 to 3 leading ids
    pub fn new(components: &[TermId]) -> IndexResult<Self> {
        if components.is_empty() || components.len() > Self::MAX_ARITY {
            return Err(IndexError::invalid_prefix_length(components.len()));
        }

        let mut fixed = [0; 3];
        fixed[..components.len()].copy_from_slice(components);
        Ok(Self {
            components: fixed,
            arity: components.len(),
        })
    }

    /// Number of fixed components
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Fixed components
    pub fn components(&self) -> &[TermId] {
        &self.components[..self.arity]
    }

    /// Ordering of `key`, truncated to this prefix's arity, against the prefix.
    ///
    /// Monotone over sorted keys: a run of `Less`, then `Equal`, then `Greater`.
    pub fn key_ordering(&self, key: &EncodedTriple) -> Ordering {
        key.components()[..self.arity].cmp(self.components())
    }

    /// Whether `key` starts with this prefix
    pub fn matches(&self, key: &EncodedTriple) -> bool {
        self.key_ordering(key) == Ordering::Equal
    }
}

impl From<EncodedTriple> for Prefix {
    fn from(key: EncodedTriple) -> Self {
        Self {
            components: key.components(),
            arity: Self::MAX_ARITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexErrorCode;

    #[test]
    fn test_rejects_bad_lengths() {
        assert_eq!(
            Prefix::new(&[]).unwrap_err().code(),
            IndexErrorCode::InvalidPrefixLength
        );
        assert!(Prefix::new(&[1, 2, 3, 4]).is_err());
        assert!(Prefix::new(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_key_ordering() {
        let prefix = Prefix::new(&[1, 9]).unwrap();

        assert_eq!(prefix.key_ordering(&EncodedTriple::new(1, 6, 2)), Ordering::Less);
        assert_eq!(prefix.key_ordering(&EncodedTriple::new(1, 9, 0)), Ordering::Equal);
        assert_eq!(prefix.key_ordering(&EncodedTriple::new(1, 9, 99)), Ordering::Equal);
        assert_eq!(prefix.key_ordering(&EncodedTriple::new(2, 0, 0)), Ordering::Greater);
    }

    #[test]
    fn test_full_prefix_matches_only_itself() {
        let prefix = Prefix::from(EncodedTriple::new(1, 9, 3));
        assert_eq!(prefix.arity(), 3);
        assert!(prefix.matches(&EncodedTriple::new(1, 9, 3)));
        assert!(!prefix.matches(&EncodedTriple::new(1, 9, 4)));
    }
}
