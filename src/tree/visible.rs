//! Visible order: pre-order over nodes whose whole ancestor chain is
//! expanded.

use super::{NodeId, Tree};

/// Pre-order iterator over visible nodes, yielding `(id, depth)`.
pub struct VisibleNodes<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for VisibleNodes<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            if node.expanded {
                self.stack
                    .extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
            }
            return Some((id, depth));
        }
    }
}

impl Tree {
    pub fn visible_nodes(&self) -> VisibleNodes<'_> {
        VisibleNodes {
            tree: self,
            stack: self.root.map(|root| (root, 0)).into_iter().collect(),
        }
    }

    /// 0-based position of `id` in visible order, `None` if it is hidden
    /// inside a collapsed ancestor or stale.
    pub fn visible_rank(&self, id: NodeId) -> Option<usize> {
        if !self.is_visible(id) {
            return None;
        }
        self.visible_nodes().position(|(visible, _)| visible == id)
    }

    /// Number of nodes in visible order.
    pub fn visible_len(&self) -> usize {
        self.visible_nodes().count()
    }
}
