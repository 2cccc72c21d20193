//! Cursor movement through visible order.
//!
//! Both directions only walk the ancestor chain or descend a single branch,
//! so a step costs O(depth) rather than O(nodes).

use log::trace;

use super::{NodeId, Tree};

impl Tree {
    /// Move the selection to the next node in visible order.
    ///
    /// With no selection the root is selected. Returns `false` and leaves
    /// the selection alone when nothing follows.
    pub fn select_next(&mut self) -> bool {
        let next = match self.selected {
            None => self.root,
            Some(selected) => self.next_visible(selected),
        };
        trace!("tree: select_next {:?} -> {:?}", self.selected, next);
        match next {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    /// Move the selection to the previous node in visible order.
    ///
    /// Returns `false` with no selection or when the root is selected.
    pub fn select_previous(&mut self) -> bool {
        let previous = self.selected.and_then(|id| self.previous_visible(id));
        trace!("tree: select_previous {:?} -> {:?}", self.selected, previous);
        match previous {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    /// Node following `id` in visible order.
    ///
    /// A leaf still climbs to the next sibling of its nearest ancestor that
    /// has one.
    pub fn next_visible(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if node.expanded {
            if let Some(first) = node.children.first() {
                return Some(*first);
            }
        }

        let mut current = id;
        loop {
            let (parent, index) = self.sibling_position(current)?;
            let siblings = self.children(parent);
            if let Some(next) = siblings.get(index + 1) {
                return Some(*next);
            }
            current = parent;
        }
    }

    /// Node preceding `id` in visible order. `None` for the root.
    pub fn previous_visible(&self, id: NodeId) -> Option<NodeId> {
        let (parent, index) = self.sibling_position(id)?;
        if index == 0 {
            return Some(parent);
        }
        let previous = self.children(parent)[index - 1];
        Some(self.last_visible_descendant(previous))
    }

    /// Deepest last node shown under `id`: follows last children while they
    /// are expanded.
    pub fn last_visible_descendant(&self, id: NodeId) -> NodeId {
        let mut candidate = id;
        while let Some(node) = self.get(candidate) {
            match node.children.last() {
                Some(last) if node.expanded => candidate = *last,
                _ => break,
            }
        }
        candidate
    }

    /// Final node of visible order.
    pub fn last_visible(&self) -> Option<NodeId> {
        self.root.map(|root| self.last_visible_descendant(root))
    }

    /// Parent of `id` and the index of `id` among its children.
    fn sibling_position(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let index = self.children(parent).iter().position(|child| *child == id)?;
        Some((parent, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root -> {A -> {A1, A2}, B}, everything expanded.
    fn expanded_sample() -> (Tree, [NodeId; 5]) {
        let mut tree = Tree::new();
        let root = tree.add_root("Root").expect("root");
        let a = tree.add_child(root, "A").expect("a");
        let a1 = tree.add_child(a, "A1").expect("a1");
        let a2 = tree.add_child(a, "A2").expect("a2");
        let b = tree.add_child(root, "B").expect("b");
        tree.expand_all(root);
        (tree, [root, a, a1, a2, b])
    }

    #[test]
    fn test_empty_tree_cannot_move() {
        let mut tree = Tree::new();
        assert!(!tree.select_next());
        assert!(!tree.select_previous());
        assert!(tree.selected().is_none());
    }

    #[test]
    fn test_select_next_walks_visible_order() {
        let (mut tree, [root, a, a1, a2, b]) = expanded_sample();
        let mut seen = Vec::new();
        while tree.select_next() {
            seen.push(tree.selected().expect("selected"));
        }
        assert_eq!(seen, vec![root, a, a1, a2, b]);
        assert_eq!(tree.selected(), Some(b));
    }

    #[test]
    fn test_select_previous_walks_back_to_root() {
        let (mut tree, [root, a, a1, a2, b]) = expanded_sample();
        tree.select(b);
        let mut seen = Vec::new();
        while tree.select_previous() {
            seen.push(tree.selected().expect("selected"));
        }
        assert_eq!(seen, vec![a2, a1, a, root]);
        assert_eq!(tree.selected(), Some(root));
    }

    #[test]
    fn test_collapsed_branch_is_skipped() {
        let (mut tree, [_, a, _, _, b]) = expanded_sample();
        tree.set_expanded(a, false);
        tree.select(a);
        assert!(tree.select_next());
        assert_eq!(tree.selected(), Some(b));
        assert!(tree.select_previous());
        assert_eq!(tree.selected(), Some(a));
    }

    #[test]
    fn test_leaf_climbs_to_next_sibling() {
        let (mut tree, [_, _, a1, a2, b]) = expanded_sample();
        tree.select(a1);
        assert!(tree.select_next(), "leaf with a sibling moves on");
        assert_eq!(tree.selected(), Some(a2));
        assert!(tree.select_next(), "last leaf climbs to the parent's sibling");
        assert_eq!(tree.selected(), Some(b));
    }

    #[test]
    fn test_expanded_leaf_behaves_like_leaf() {
        let mut tree = Tree::new();
        let root = tree.add_root("Root").expect("root");
        let only = tree.add_child(root, "Only").expect("only");
        tree.expand_all(root);
        tree.select(only);
        assert!(!tree.select_next());
        assert_eq!(tree.selected(), Some(only));
    }

    #[test]
    fn test_previous_descends_into_expanded_sibling() {
        let mut tree = Tree::new();
        let root = tree.add_root("Root").expect("root");
        let a = tree.add_child(root, "A").expect("a");
        let a1 = tree.add_child(a, "A1").expect("a1");
        let deep = tree.add_child(a1, "Deep").expect("deep");
        let b = tree.add_child(root, "B").expect("b");
        tree.expand_all(root);

        tree.select(b);
        assert!(tree.select_previous());
        assert_eq!(tree.selected(), Some(deep));

        tree.set_expanded(a1, false);
        tree.select(b);
        assert!(tree.select_previous());
        assert_eq!(tree.selected(), Some(a1));
    }

    #[test]
    fn test_next_then_previous_returns_to_start() {
        let (mut tree, ids) = expanded_sample();
        let [_, a, ..] = ids;
        tree.set_expanded(a, false);
        let visible: Vec<NodeId> = ids.into_iter().filter(|id| tree.is_visible(*id)).collect();
        assert_eq!(visible.len(), 3);
        for start in visible {
            tree.select(start);
            if tree.select_next() {
                assert!(tree.select_previous());
                assert_eq!(tree.selected(), Some(start));
            }
        }
    }

    #[test]
    fn test_last_visible() {
        let (mut tree, [root, _, _, _, b]) = expanded_sample();
        assert_eq!(tree.last_visible(), Some(b));
        tree.set_expanded(root, false);
        assert_eq!(tree.last_visible(), Some(root));
    }
}
