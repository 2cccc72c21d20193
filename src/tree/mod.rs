//! # Tree Module
//!
//! The node graph behind [`TreeView`](crate::widgets::TreeView).
//!
//! ## Storage
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]
//! (slot index + generation), never by pointer:
//!
//! ```text
//! slots: [ Root | A | A1 | A2 | B | <free> ]
//!          │      └─ parent: Root, children: [A1, A2]
//!          └─ parent: none, children: [A, B]
//! ```
//!
//! Removing a node frees every slot of its subtree and bumps the slot
//! generation, so an id held across a removal resolves to nothing instead of
//! to whatever node reuses the slot later. Every operation treats a stale id
//! exactly like an absent node.
//!
//! ## Submodules
//!
//! - [`mod@expansion`] - per-node expanded flag, recursive expand/collapse
//! - [`mod@navigation`] - next/previous movement through visible order
//! - [`mod@visible`] - visible-order traversal and rank lookup

pub mod expansion;
pub mod navigation;
pub mod visible;

pub use visible::VisibleNodes;

use log::debug;
use ratatui::style::Style;

/// Handle to a node inside a [`Tree`].
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// A single labelled node.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    expanded: bool,
    style: Option<Style>,
}

impl Node {
    fn new(label: String, parent: Option<NodeId>) -> Self {
        Self {
            label,
            children: Vec::new(),
            parent,
            expanded: false,
            style: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Per-node display override, if any.
    pub fn style(&self) -> Option<Style> {
        self.style
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A rooted tree with a single optional selection.
///
/// The tree has at most one root. `selected` always names a live node or is
/// `None`.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: Option<NodeId>,
    selected: Option<NodeId>,
    len: usize,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether `id` names a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Node::label)
    }

    /// Children of `id`, or an empty slice for a stale id.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id)?;
        Some(self.ancestors(id).count())
    }

    /// Proper ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Whether `ancestor` lies on the parent chain of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }

    /// Create the root node. Returns `None` if the tree already has one.
    pub fn add_root(&mut self, label: impl Into<String>) -> Option<NodeId> {
        if self.root.is_some() {
            return None;
        }
        let id = self.allocate(Node::new(label.into(), None));
        self.root = Some(id);
        Some(id)
    }

    /// Append a child under `parent`. Returns `None` if `parent` is not a
    /// live node.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        self.get(parent)?;
        let id = self.allocate(Node::new(label.into(), Some(parent)));
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        Some(id)
    }

    /// Detach and destroy `id` together with its whole subtree.
    ///
    /// If the selection was inside the removed subtree it moves to the
    /// removed node's former parent (or is cleared when the root goes).
    /// Returns `false` for a stale id.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        let parent = node.parent;
        let selection_inside = self
            .selected
            .is_some_and(|selected| selected == id || self.is_ancestor(id, selected));

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.get_mut(parent_id) {
                    parent_node.children.retain(|child| *child != id);
                }
            }
            None => self.root = None,
        }

        let mut freed = 0usize;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.release(current) {
                stack.extend(node.children);
                freed += 1;
            }
        }

        if selection_inside {
            self.selected = parent;
        }

        debug!(
            "tree: removed subtree of {} node(s), selection now {:?}",
            freed, self.selected
        );
        true
    }

    /// First node in pre-order (root, then children in insertion order)
    /// matching `predicate`, regardless of expansion state.
    pub fn find_node<P>(&self, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            if predicate(node) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Select `id`. Returns `false` (selection unchanged) for a stale id.
    pub fn select(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => false,
        }
    }

    pub fn set_style(&mut self, id: NodeId, style: Style) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.style = Some(style);
                true
            }
            None => false,
        }
    }

    pub fn clear_style(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.style = None;
                true
            }
            None => false,
        }
    }
}

/// Iterator over the parent chain of a node. See [`Tree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
