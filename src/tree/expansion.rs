//! Expanded/collapsed state.
//!
//! A node's own flag only decides whether its children are shown. Whether
//! the node itself is shown is derived from its ancestors at traversal time
//! and never cached.

use super::{NodeId, Tree};

impl Tree {
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.expanded)
    }

    /// Set the flag of exactly one node. Returns `false` for a stale id.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.expanded = expanded;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.expanded = !node.expanded;
                true
            }
            None => false,
        }
    }

    /// Expand `id` and every node below it.
    pub fn expand_all(&mut self, id: NodeId) -> bool {
        self.set_subtree_expanded(id, true)
    }

    /// Collapse `id` and every node below it.
    pub fn collapse_all(&mut self, id: NodeId) -> bool {
        self.set_subtree_expanded(id, false)
    }

    fn set_subtree_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.get_mut(current) {
                node.expanded = expanded;
                stack.extend(node.children.iter().copied());
            }
        }
        true
    }

    /// Expand every collapsed ancestor of `id`. Returns how many flags
    /// changed.
    pub fn expand_ancestors(&mut self, id: NodeId) -> usize {
        let collapsed: Vec<NodeId> = self
            .ancestors(id)
            .filter(|ancestor| !self.is_expanded(*ancestor))
            .collect();
        for ancestor in &collapsed {
            self.set_expanded(*ancestor, true);
        }
        collapsed.len()
    }

    /// Whether every ancestor of `id` is expanded, i.e. `id` takes part in
    /// visible order.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.contains(id) && self.ancestors(id).all(|ancestor| self.is_expanded(ancestor))
    }
}
