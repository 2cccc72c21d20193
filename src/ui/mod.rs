//! # UI Module
//!
//! Theme, persisted configuration and the demo application driven by the
//! `dodo` binary.
//!
//! ## Components
//!
//! - [`App`] - Application state management (tree, focus, search, live widgets)
//! - [`mod@render`] - Layout and rendering of the demo screen
//! - [`Theme`] - Built-in and file-backed color themes
//! - [`Config`] - User settings persisted as JSON
//!
//! ## Layout
//!
//! ```text
//! ┌──────── Tree ─────────┬──────────────────────────────┐
//! │ ▼ Project             │            Node              │
//! │ ├ ▼ src               │ Label:  src                  │
//! │ │ ├   main.rs         │ Path:   Project/src          │
//! │ │ └ ▶ widgets         │ ...                          │
//! │ ├ ▶ tests             ├──────────────────────────────┤
//! │ └ ▶ docs              │ CPU      Memory     Disk     │
//! │                       ├──────────── CPU ─────────────┤
//! │                       │ ⣀⣤⣶⣿⣷⣦⣄⡀                     │
//! ├───────────────────────┴──────────────────────────────┤
//! │ TREE | hints | selected | theme                      │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use config::Config;
pub use render::render;
pub use theme::{Theme, ThemeError};
