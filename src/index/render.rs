//! Level-by-level rendering of the tree
//!
//! Purely observational; used by the `tree` command and when debugging tests.

use std::fmt;

use super::btree::{IndexTree, Node};

fn render_node(node: &Node) -> String {
    let keys: Vec<String> = node.keys().iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(" "))
}

impl IndexTree {
    /// One line per depth: `level N: [k k] | [k]`
    pub fn render_levels(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height());
        let mut level: Vec<&Node> = vec![self.root()];
        let mut depth = 0;

        while !level.is_empty() {
            let nodes: Vec<String> = level.iter().map(|n| render_node(n)).collect();
            lines.push(format!("level {}: {}", depth, nodes.join(" | ")));

            level = level.iter().flat_map(|n| n.children()).collect();
            depth += 1;
        }
        lines
    }
}

impl fmt::Display for IndexTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_levels() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
