//! Outline generation: one indented label per visited node.

use super::utils::indent;
use crate::debug_println;
use crate::document::{Node, NodeExt};
use crate::outline::OutlineTree;
use crate::resolver::resolve_label;
use std::convert::Infallible;

pub struct OutlineGenerator {
    output: String,
    visited: usize,
}

impl OutlineGenerator {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            visited: 0,
        }
    }

    /// Render the tree depth-first. The root is not emitted: section titles
    /// sit at depth 0 and their entries start at depth 1.
    pub fn generate(mut self, tree: &OutlineTree<'_>) -> String {
        for section in &tree.sections {
            self.line(0, section.title);
            for entry in &section.entries {
                let _ = entry.walk(1, &mut |node: &Node, depth| {
                    self.line(depth, &resolve_label(node));
                    Ok::<(), Infallible>(())
                });
            }
        }
        debug_println!(
            "outline: emitted {} lines for {} nodes",
            self.visited,
            tree.sections
                .iter()
                .flat_map(|section| &section.entries)
                .map(|entry| entry.count())
                .sum::<usize>()
        );
        self.output
    }

    fn line(&mut self, depth: usize, label: &str) {
        if self.visited > 0 {
            self.output.push('\n');
        }
        indent(&mut self.output, depth);
        self.output.push_str(label);
        self.visited += 1;
    }
}

impl Default for OutlineGenerator {
    fn default() -> Self {
        Self::new()
    }
}
