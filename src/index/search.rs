//! Prefix-bounded range retrieval
//!
//! Keys in a node are sorted, so against a fixed prefix they form a run of
//! `Less`, then `Equal`, then `Greater`. Leaves emit the `Equal` run and stop
//! at the first `Greater`. Internal nodes descend only into children whose
//! separator bounds can hold an `Equal` key; a value equal to a separator
//! may sit on both sides of it, so both neighbours are visited.

use std::cmp::Ordering;

use crate::model::{EncodedTriple, TermId};

use super::btree::{IndexTree, Node};
use super::errors::IndexResult;
use super::prefix::Prefix;

impl IndexTree {
    /// Every stored triple starting with `prefix`, ascending.
    pub fn prefix_search(&self, prefix: &Prefix) -> Vec<EncodedTriple> {
        let mut results = Vec::new();
        visit(self.root(), prefix, &mut |key| results.push(*key));
        results
    }

    /// Prefix search from raw components.
    ///
    /// Rejects 0 or more than 3 components before touching the tree.
    pub fn search(&self, components: &[TermId]) -> IndexResult<Vec<EncodedTriple>> {
        let prefix = Prefix::new(components)?;
        Ok(self.prefix_search(&prefix))
    }

    /// Number of stored triples starting with `prefix`
    pub fn count_prefix(&self, prefix: &Prefix) -> usize {
        let mut count = 0;
        visit(self.root(), prefix, &mut |_| count += 1);
        count
    }
}

fn visit<F>(node: &Node, prefix: &Prefix, emit: &mut F)
where
    F: FnMut(&EncodedTriple),
{
    let keys = node.keys();
    match node {
        Node::Leaf { .. } => {
            let start = keys.partition_point(|k| prefix.key_ordering(k) == Ordering::Less);
            keys[start..]
                .iter()
                .take_while(|k| prefix.matches(k))
                .for_each(|k| emit(k));
        }
        Node::Internal { children, .. } => {
            // Child i spans [keys[i-1], keys[i]]
            let first = keys.partition_point(|k| prefix.key_ordering(k) == Ordering::Less);
            let last = keys.partition_point(|k| prefix.key_ordering(k) != Ordering::Greater);
            for child in &children[first..=last] {
                visit(child, prefix, emit);
            }
        }
    }
}
