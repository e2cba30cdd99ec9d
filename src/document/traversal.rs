//! Tree traversal for program nodes.

use super::Node;

pub trait NodeExt {
    /// Walk the subtree in depth-first pre-order
    ///
    /// Calls visitor on the current node (with its depth) before its children,
    /// in insertion order. Return Err to stop early.
    fn walk<F, E>(&self, depth: usize, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Node, usize) -> Result<(), E>;

    /// Number of nodes in the subtree, including this one
    fn count(&self) -> usize;
}

impl NodeExt for Node {
    fn walk<F, E>(&self, depth: usize, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Node, usize) -> Result<(), E>,
    {
        visitor(self, depth)?;
        for child in &self.children {
            child.walk(depth + 1, visitor)?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(NodeExt::count).sum::<usize>()
    }
}
