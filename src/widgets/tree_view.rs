//! # Tree View
//!
//! Interactive widget around a [`Tree`]: keyboard navigation, a scroll
//! [`Viewport`] that follows the selection, label search that reveals hidden
//! matches, and rendering into a ratatui [`Buffer`].
//!
//! ## Control Flow
//!
//! ```text
//! key ──▶ handle_key ──▶ Tree::select_* / set_expanded
//!                           │
//!                           ▼
//!                  ensure_visible(selected)
//!                           │
//!                           ▼
//!         rows() / Widget::render  (window [offset, offset + height))
//! ```
//!
//! ## Key Bindings
//!
//! - `Up` / `Down` - previous / next visible node
//! - `Left` - collapse the selected node, or jump to its parent
//! - `Right` - expand the selected node, or step into its first child
//! - `Enter` - toggle the selected node
//! - `Home` / `End` - first / last visible node
//! - `PageUp` / `PageDown` - move by one viewport height

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::symbols;
use crate::tree::{NodeId, Tree};
use crate::widgets::viewport::Viewport;

/// Styles and glyphs a [`TreeView`] draws with.
///
/// A node's own style override replaces `node`; `selected` is patched on top
/// of whichever applies, so the highlight always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStyle {
    pub node: Style,
    pub selected: Style,
    /// Connector lines (`│`, `├`, `└`).
    pub lines: Style,
    pub expanded_symbol: &'static str,
    pub collapsed_symbol: &'static str,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            node: Style::default(),
            selected: Style::default().reversed(),
            lines: Style::default(),
            expanded_symbol: symbols::tree::EXPANDED,
            collapsed_symbol: symbols::tree::COLLAPSED,
        }
    }
}

/// One drawable row of the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: NodeId,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub label: String,
    /// Style after applying override and selection.
    pub style: Style,
    pub selected: bool,
    /// For each node on the path below the root down to this one: whether it
    /// is the last child of its parent. Length equals `depth`.
    pub last_sibling: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct TreeView {
    tree: Tree,
    viewport: Viewport,
    style: TreeStyle,
    show_lines: bool,
    indent: u16,
}

impl TreeView {
    pub fn new(height: usize, style: TreeStyle) -> Self {
        Self::with_tree(Tree::new(), height, style)
    }

    pub fn with_tree(tree: Tree, height: usize, style: TreeStyle) -> Self {
        Self {
            tree,
            viewport: Viewport::new(height),
            style,
            show_lines: true,
            indent: 2,
        }
    }

    pub fn show_lines(mut self, show: bool) -> Self {
        self.show_lines = show;
        self
    }

    /// Columns per depth level (at least 1).
    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent.max(1);
        self
    }

    pub fn show_lines_enabled(&self) -> bool {
        self.show_lines
    }

    pub fn indent_width(&self) -> u16 {
        self.indent
    }

    pub fn set_show_lines(&mut self, show: bool) {
        self.show_lines = show;
    }

    pub fn set_indent(&mut self, indent: u16) {
        self.indent = indent.max(1);
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn style(&self) -> &TreeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TreeStyle) {
        self.style = style;
    }

    /// Change the row capacity (after a layout change) and keep the
    /// selection in view.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
        self.ensure_selected_visible();
    }

    /// Replace the whole tree with a single root node.
    pub fn set_root(&mut self, label: impl Into<String>) -> Option<NodeId> {
        self.tree = Tree::new();
        self.viewport.scroll_to(0);
        self.tree.add_root(label)
    }

    pub fn add_root(&mut self, label: impl Into<String>) -> Option<NodeId> {
        self.tree.add_root(label)
    }

    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        self.tree.add_child(parent, label)
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        self.tree.remove(id)
    }

    pub fn set_node_style(&mut self, id: NodeId, style: Style) -> bool {
        self.tree.set_style(id, style)
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.tree.selected()
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected().and_then(|id| self.tree.label(id))
    }

    /// Select `id` and scroll it into view.
    pub fn select(&mut self, id: NodeId) -> bool {
        if !self.tree.select(id) {
            return false;
        }
        self.ensure_visible(id);
        true
    }

    pub fn select_next(&mut self) -> bool {
        let moved = self.tree.select_next();
        if moved {
            self.ensure_selected_visible();
        }
        moved
    }

    pub fn select_previous(&mut self) -> bool {
        let moved = self.tree.select_previous();
        if moved {
            self.ensure_selected_visible();
        }
        moved
    }

    /// Expand every collapsed ancestor of `id`, then move the viewport the
    /// minimum distance so `id` is inside it. Returns `false` for a stale id.
    pub fn ensure_visible(&mut self, id: NodeId) -> bool {
        if !self.tree.contains(id) {
            return false;
        }
        self.tree.expand_ancestors(id);
        if let Some(rank) = self.tree.visible_rank(id) {
            self.viewport.reveal(rank);
        }
        true
    }

    pub fn ensure_selected_visible(&mut self) -> bool {
        match self.selected() {
            Some(id) => self.ensure_visible(id),
            None => false,
        }
    }

    /// Set the scroll offset to `max(0, n)`. There is no upper clamp.
    pub fn scroll_to(&mut self, n: isize) {
        self.viewport.scroll_to(n);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.viewport.scroll_by(delta);
    }

    pub fn offset(&self) -> usize {
        self.viewport.offset()
    }

    /// First node in pre-order whose label equals `text`, searched across
    /// the whole tree regardless of expansion.
    pub fn find_node(&self, text: &str) -> Option<NodeId> {
        self.tree.find_node(|node| node.label() == text)
    }

    /// Find `text`, reveal it, select it and scroll to it. Returns `false`
    /// and leaves the selection alone on a miss.
    pub fn find_and_select(&mut self, text: &str) -> bool {
        let Some(id) = self.find_node(text) else {
            debug!("tree_view: no node labelled {:?}", text);
            return false;
        };
        let revealed = self.tree.expand_ancestors(id);
        self.tree.select(id);
        self.ensure_visible(id);
        debug!(
            "tree_view: selected {:?} ({} ancestor(s) expanded), offset {}",
            text,
            revealed,
            self.viewport.offset()
        );
        true
    }

    pub fn expand_all(&mut self) {
        if let Some(root) = self.tree.root() {
            self.tree.expand_all(root);
            self.ensure_selected_visible();
        }
    }

    /// Collapse the whole tree. A selection that ends up hidden moves to the
    /// root.
    pub fn collapse_all(&mut self) {
        let Some(root) = self.tree.root() else {
            return;
        };
        self.tree.collapse_all(root);
        if let Some(selected) = self.selected() {
            if !self.tree.is_visible(selected) {
                self.tree.select(root);
            }
        }
        self.ensure_selected_visible();
    }

    pub fn toggle_selected(&mut self) -> bool {
        match self.selected() {
            Some(id) => self.tree.toggle(id),
            None => false,
        }
    }

    /// Dispatch a key press. Returns whether anything changed and the view
    /// needs to be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let changed = match key.code {
            KeyCode::Up => self.tree.select_previous(),
            KeyCode::Down => self.tree.select_next(),
            KeyCode::Left => self.collapse_or_parent(),
            KeyCode::Right => self.expand_or_child(),
            KeyCode::Enter => self.toggle_selected(),
            KeyCode::Home => self.tree.root().is_some_and(|root| self.tree.select(root)),
            KeyCode::End => self
                .tree
                .last_visible()
                .is_some_and(|last| self.tree.select(last)),
            KeyCode::PageUp => self.repeat(Tree::select_previous),
            KeyCode::PageDown => self.repeat(Tree::select_next),
            _ => false,
        };
        if changed {
            self.ensure_selected_visible();
        }
        changed
    }

    fn collapse_or_parent(&mut self) -> bool {
        let Some(selected) = self.selected() else {
            return false;
        };
        if self.tree.is_expanded(selected) {
            return self.tree.set_expanded(selected, false);
        }
        match self.tree.parent(selected) {
            Some(parent) => self.tree.select(parent),
            None => false,
        }
    }

    fn expand_or_child(&mut self) -> bool {
        let Some(selected) = self.selected() else {
            return false;
        };
        let first_child = self.tree.children(selected).first().copied();
        if !self.tree.is_expanded(selected) {
            return first_child.is_some() && self.tree.set_expanded(selected, true);
        }
        match first_child {
            Some(first) => self.tree.select(first),
            None => false,
        }
    }

    fn repeat(&mut self, step: fn(&mut Tree) -> bool) -> bool {
        let mut moved = false;
        for _ in 0..self.viewport.height().max(1) {
            if !step(&mut self.tree) {
                break;
            }
            moved = true;
        }
        moved
    }

    /// Style for `id` after override and selection are applied.
    pub fn effective_style(&self, id: NodeId) -> Style {
        let base = self
            .tree
            .get(id)
            .and_then(|node| node.style())
            .unwrap_or(self.style.node);
        if self.selected() == Some(id) {
            base.patch(self.style.selected)
        } else {
            base
        }
    }

    /// Rows of the current window: at most `height` rows starting at the
    /// scroll offset, fewer near the end of visible order.
    pub fn rows(&self) -> Vec<TreeRow> {
        self.tree
            .visible_nodes()
            .skip(self.viewport.offset())
            .take(self.viewport.height())
            .filter_map(|(id, depth)| {
                let node = self.tree.get(id)?;
                Some(TreeRow {
                    id,
                    depth,
                    has_children: node.has_children(),
                    expanded: node.is_expanded(),
                    label: node.label().to_string(),
                    style: self.effective_style(id),
                    selected: self.selected() == Some(id),
                    last_sibling: self.last_sibling_path(id),
                })
            })
            .collect()
    }

    fn last_sibling_path(&self, id: NodeId) -> Vec<bool> {
        let mut path: Vec<bool> = std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .filter_map(|node| {
                let parent = self.tree.parent(node)?;
                Some(self.tree.children(parent).last() == Some(&node))
            })
            .collect();
        path.reverse();
        path
    }

    fn render_row(&self, row: &TreeRow, area: Rect, y: u16, buf: &mut Buffer) {
        let indent = usize::from(self.indent);
        let right = usize::from(area.right());
        let column = |offset: usize| usize::from(area.x) + offset;

        if self.show_lines && row.depth > 0 {
            for (level, last) in row.last_sibling.iter().enumerate() {
                let x = column(level * indent);
                if x >= right {
                    break;
                }
                let is_own_connector = level + 1 == row.depth;
                let glyph = match (is_own_connector, *last) {
                    (true, true) => symbols::tree::LAST_BRANCH,
                    (true, false) => symbols::tree::BRANCH,
                    (false, false) => symbols::tree::PIPE,
                    (false, true) => continue,
                };
                buf.set_string(x as u16, y, glyph, self.style.lines);
            }
        }

        let mut x = column(row.depth * indent);
        if x >= right {
            return;
        }
        if row.has_children {
            let symbol = if row.expanded {
                self.style.expanded_symbol
            } else {
                self.style.collapsed_symbol
            };
            buf.set_stringn(x as u16, y, symbol, right - x, row.style);
        }
        x += 2;
        if x >= right {
            return;
        }
        buf.set_stringn(x as u16, y, &row.label, right - x, row.style);
    }
}

impl Widget for &TreeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for (row, y) in self.rows().iter().zip(area.top()..area.bottom()) {
            self.render_row(row, area, y, buf);
        }
    }
}
