//! dodo - terminal widgets built around an interactive tree view
//!
//! This library provides an arena-backed tree model with keyboard navigation
//! over its visible nodes, a scrolling [`widgets::TreeView`] for ratatui, and
//! a small set of dashboard widgets (meters, graph, status bar, info panel)
//! styled through explicit [`ui::Theme`]s.

pub mod color;
pub mod symbols;
pub mod tree;
pub mod ui;
pub mod widgets;
