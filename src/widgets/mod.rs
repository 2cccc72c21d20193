//! # Widgets
//!
//! ratatui widgets built on top of the [`crate::tree`] model plus a handful of
//! value-to-glyph widgets for dashboards.
//!
//! - [`TreeView`] - interactive, scrollable tree
//! - [`Panel`] - rounded box with a centered title
//! - [`Meter`] / [`MultiMeter`] - percentage bars
//! - [`StatusBar`] - single-row status line with flexible items
//! - [`InfoPanel`] - scrollable key/value list
//! - [`Graph`] - sample history drawn with braille, block or ASCII levels
//!
//! Every widget renders through `impl Widget for &T`, so the same value can be
//! drawn on every frame while the application keeps mutating it between
//! frames. Styles are always passed in; nothing reads a global theme.

pub mod graph;
pub mod info_panel;
pub mod meter;
pub mod multimeter;
pub mod panel;
pub mod status_bar;
pub mod text;
pub mod tree_view;
pub mod viewport;

pub use graph::{Graph, GraphStyle};
pub use info_panel::{InfoField, InfoPanel};
pub use meter::Meter;
pub use multimeter::{MeterItem, MultiMeter, Orientation};
pub use panel::Panel;
pub use status_bar::{StatusBar, StatusItem};
pub use tree_view::{TreeRow, TreeStyle, TreeView};
pub use viewport::Viewport;
