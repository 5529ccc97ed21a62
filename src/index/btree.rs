//! Height-balanced multi-way tree over encoded triples
//!
//! Every stored triple lives in exactly one leaf. Internal nodes hold
//! separator copies used only for routing.
//!
//! # Invariants
//!
//! - Non-root nodes hold between `t-1` and `2t-1` keys
//! - Internal nodes hold one more child than keys
//! - Child `i` holds keys in `[keys[i-1], keys[i]]`
//! - All leaves are at the same depth
//!
//! Full nodes are split on the way down, so an insert never has to walk
//! back up the tree.

use std::mem;

use crate::model::EncodedTriple;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{IndexError, IndexResult};

/// Smallest branching factor with a valid tree
pub const MIN_BRANCHING_FACTOR: usize = 2;

/// Branching factor used when none is configured
pub const DEFAULT_BRANCHING_FACTOR: usize = 3;

/// A tree node
#[derive(Debug, Clone)]
pub(crate) enum Node {
    /// Sorted data triples
    Leaf { keys: Vec<EncodedTriple> },
    /// Sorted separators and `keys.len() + 1` children
    Internal {
        keys: Vec<EncodedTriple>,
        children: Vec<Node>,
    },
}

impl Node {
    fn empty_leaf() -> Self {
        Node::Leaf { keys: Vec::new() }
    }

    pub(crate) fn keys(&self) -> &[EncodedTriple] {
        match self {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys,
        }
    }

    pub(crate) fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Internal { children, .. } => children,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn is_full(&self, t: usize) -> bool {
        self.keys().len() == 2 * t - 1
    }

    /// Insert into a node known not to be full.
    fn insert_non_full(&mut self, triple: EncodedTriple, t: usize) {
        match self {
            Node::Leaf { keys } => {
                // After any equal keys already present
                let pos = keys.partition_point(|k| *k <= triple);
                keys.insert(pos, triple);
            }
            Node::Internal { keys, children } => {
                let mut i = child_slot(keys, &triple);
                if children[i].is_full(t) {
                    split_child(keys, children, i, t);
                    if triple >= keys[i] {
                        i += 1;
                    }
                }
                children[i].insert_non_full(triple, t);
            }
        }
    }
}

/// Index of the child after the greatest separator `triple` is not less than
fn child_slot(keys: &[EncodedTriple], triple: &EncodedTriple) -> usize {
    keys.partition_point(|k| k <= triple)
}

/// Split the full child at `index`, promoting a separator into `keys`.
///
/// Leaf: the separator is a copy of the median; the left leaf keeps the
/// `t-1` keys before it, the new right leaf takes the median and the rest.
/// Internal: the median moves up; each half keeps `t-1` keys and `t` children.
fn split_child(keys: &mut Vec<EncodedTriple>, children: &mut Vec<Node>, index: usize, t: usize) {
    let (separator, sibling) = match &mut children[index] {
        Node::Leaf { keys: child_keys } => {
            let right = child_keys.split_off(t - 1);
            (right[0], Node::Leaf { keys: right })
        }
        Node::Internal {
            keys: child_keys,
            children: grandchildren,
        } => {
            let right_keys = child_keys.split_off(t);
            let median = child_keys[t - 1];
            child_keys.truncate(t - 1);
            let right_children = grandchildren.split_off(t);
            (
                median,
                Node::Internal {
                    keys: right_keys,
                    children: right_children,
                },
            )
        }
    };

    keys.insert(index, separator);
    children.insert(index + 1, sibling);
}

/// Ordered index over encoded triples.
///
/// Single writer during bulk load; read-only afterwards.
#[derive(Debug, Clone)]
pub struct IndexTree {
    root: Node,
    t: usize,
    len: usize,
    height: usize,
}

impl IndexTree {
    /// Creates an empty tree with branching factor `t`.
    ///
    /// Fails with `TRIPLEX_INVALID_BRANCHING_FACTOR` when `t < 2`.
    pub fn new(t: usize) -> IndexResult<Self> {
        if t < MIN_BRANCHING_FACTOR {
            return Err(IndexError::invalid_branching_factor(t));
        }

        Ok(Self {
            root: Node::empty_leaf(),
            t,
            len: 0,
            height: 1,
        })
    }

    /// Insert a triple, keeping all keys sorted. Duplicates are kept.
    pub fn insert(&mut self, triple: EncodedTriple) {
        if self.root.is_full(self.t) {
            let old_root = mem::replace(&mut self.root, Node::empty_leaf());
            let mut keys = Vec::with_capacity(1);
            let mut children = vec![old_root];
            split_child(&mut keys, &mut children, 0, self.t);
            self.root = Node::Internal { keys, children };
            self.height += 1;

            let height = self.height.to_string();
            log_event_with_fields(Event::IndexRootSplit, &[("height", height.as_str())]);
        }

        self.root.insert_non_full(triple, self.t);
        self.len += 1;
    }

    /// Number of stored triples, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a lone leaf root has height 1
    pub fn height(&self) -> usize {
        self.height
    }

    /// Branching factor `t`
    pub fn branching_factor(&self) -> usize {
        self.t
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// All stored triples in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![&self.root],
            current: [].iter(),
        }
    }

    /// Verify every structural invariant.
    ///
    /// Returns `TRIPLEX_INDEX_STRUCTURE_VIOLATION` naming the first broken one.
    pub fn check_invariants(&self) -> IndexResult<()> {
        let mut leaf_depth = None;
        let mut counted = 0;
        self.check_node(&self.root, 1, None, None, &mut leaf_depth, &mut counted)?;

        if counted != self.len {
            return Err(IndexError::structure_violation(format!(
                "leaves hold {} triples, expected {}",
                counted, self.len
            )));
        }
        if leaf_depth != Some(self.height) {
            return Err(IndexError::structure_violation(format!(
                "leaf depth {:?} does not match height {}",
                leaf_depth, self.height
            )));
        }
        Ok(())
    }

    fn check_node(
        &self,
        node: &Node,
        depth: usize,
        lower: Option<EncodedTriple>,
        upper: Option<EncodedTriple>,
        leaf_depth: &mut Option<usize>,
        counted: &mut usize,
    ) -> IndexResult<()> {
        let keys = node.keys();
        let is_root = depth == 1;
        let max = 2 * self.t - 1;

        if keys.len() > max || (!is_root && keys.len() < self.t - 1) {
            return Err(IndexError::structure_violation(format!(
                "node at depth {} holds {} keys, allowed [{}, {}]",
                depth,
                keys.len(),
                self.t - 1,
                max
            )));
        }
        if keys.windows(2).any(|w| w[0] > w[1]) {
            return Err(IndexError::structure_violation(format!(
                "unsorted keys at depth {}",
                depth
            )));
        }
        let out_of_bounds = keys.iter().any(|k| {
            lower.map_or(false, |lo| *k < lo) || upper.map_or(false, |hi| *k > hi)
        });
        if out_of_bounds {
            return Err(IndexError::structure_violation(format!(
                "key outside separator bounds at depth {}",
                depth
            )));
        }

        match node {
            Node::Leaf { keys } => {
                *counted += keys.len();
                match *leaf_depth {
                    None => *leaf_depth = Some(depth),
                    Some(d) if d != depth => {
                        return Err(IndexError::structure_violation(format!(
                            "leaves at depths {} and {}",
                            d, depth
                        )));
                    }
                    Some(_) => {}
                }
            }
            Node::Internal { keys, children } => {
                if children.len() != keys.len() + 1 {
                    return Err(IndexError::structure_violation(format!(
                        "internal node at depth {} has {} keys and {} children",
                        depth,
                        keys.len(),
                        children.len()
                    )));
                }
                for (i, child) in children.iter().enumerate() {
                    let lo = if i == 0 { lower } else { Some(keys[i - 1]) };
                    let hi = keys.get(i).copied().or(upper);
                    self.check_node(child, depth + 1, lo, hi, leaf_depth, counted)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a IndexTree {
    type Item = EncodedTriple;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal of the leaves, driven by an explicit stack
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    current: std::slice::Iter<'a, EncodedTriple>,
}

impl Iterator for Iter<'_> {
    type Item = EncodedTriple;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.current.next() {
                return Some(*key);
            }
            match self.stack.pop()? {
                Node::Leaf { keys } => self.current = keys.iter(),
                Node::Internal { children, .. } => self.stack.extend(children.iter().rev()),
            }
        }
    }
}
