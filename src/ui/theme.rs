//! # Theme System
//!
//! Colors for every widget, grouped by semantic role.
//!
//! ## Overview
//!
//! Widgets never read a global theme. The application picks a [`Theme`] and
//! hands styles derived from it ([`Theme::tree_style`], [`Theme::style`],
//! ...) to each widget explicitly. Themes can be switched at runtime and
//! loaded from / saved to JSON files.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Macchiato** - medium-dark pastel theme
//! - **Catppuccin Frappe** - medium pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights
//! - **Gruvbox Dark** - retro groove color scheme
//!
//! ## Theme Files
//!
//! ```json
//! {
//!   "name": "My Theme",
//!   "bg": "#1e1e2e",
//!   "fg": "#cdd6f4",
//!   "fg_dim": "#6c7086",
//!   "title": "#cba6f7",
//!   "border": "#585b70",
//!   "accent": "#89b4fa",
//!   "selected": "#b4befe",
//!   "highlight_bg": "#45475a",
//!   "highlight_fg": "#f9e2af",
//!   "gradient": ["#a6e3a1", "#f9e2af", "#f38ba8"]
//! }
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color;
use crate::widgets::TreeStyle;

/// Errors from reading or writing theme files.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse theme file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A color string is not `#rrggbb`.
    #[error("invalid color for '{field}': {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// Only RGB colors can be written to a theme file.
    #[error("color for '{field}' has no hex form")]
    NotRgb { field: &'static str },

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write theme file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// All colors used by the widgets, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name shown in the theme list.
    pub name: Cow<'static, str>,

    // -- Base --
    pub bg: Color,
    /// Primary text (tree labels, values).
    pub fg: Color,
    /// Muted text (connector lines, hints, empty meter cells).
    pub fg_dim: Color,

    // -- Chrome --
    pub title: Color,
    pub border: Color,
    /// Focused borders and key hints.
    pub accent: Color,

    // -- Selection --
    /// Foreground of the selected row.
    pub selected: Color,
    /// Background of the selected row.
    pub highlight_bg: Color,
    /// Emphasized text such as the search query.
    pub highlight_fg: Color,

    /// Low / mid / high stops for meters and graphs.
    pub gradient: [Color; 3],
}

/// On-disk form of a theme: every color is a `#rrggbb` string.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: String,
    bg: String,
    fg: String,
    fg_dim: String,
    title: String,
    border: String,
    accent: String,
    selected: String,
    highlight_bg: String,
    highlight_fg: String,
    gradient: [String; 3],
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

fn hex_color(field: &'static str, value: Color) -> Result<String, ThemeError> {
    color::to_hex(value).ok_or(ThemeError::NotRgb { field })
}

impl Theme {
    /// Return the list of all built-in themes (order = display order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Plain text on the theme background.
    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight_fg)
    }

    /// Styles for a [`crate::widgets::TreeView`].
    pub fn tree_style(&self) -> TreeStyle {
        TreeStyle {
            node: Style::default().fg(self.fg),
            selected: self.selected_style(),
            lines: self.dim_style(),
            ..TreeStyle::default()
        }
    }

    /// Sample the gradient at `position` (0.0 low, 1.0 high).
    pub fn gradient_color(&self, position: f64) -> Color {
        color::gradient_at(&self.gradient, position)
    }

    /// Load a theme from a JSON file of hex colors.
    pub fn load_from(path: &Path) -> Result<Self, ThemeError> {
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ThemeFile =
            serde_json::from_str(&contents).map_err(|source| ThemeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_file(&file)
    }

    /// Write the theme as JSON, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ThemeError> {
        let contents = serde_json::to_string_pretty(&self.to_file()?)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ThemeError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_file(file: &ThemeFile) -> Result<Self, ThemeError> {
        Ok(Self {
            name: Cow::Owned(file.name.clone()),
            bg: parse_color("bg", &file.bg)?,
            fg: parse_color("fg", &file.fg)?,
            fg_dim: parse_color("fg_dim", &file.fg_dim)?,
            title: parse_color("title", &file.title)?,
            border: parse_color("border", &file.border)?,
            accent: parse_color("accent", &file.accent)?,
            selected: parse_color("selected", &file.selected)?,
            highlight_bg: parse_color("highlight_bg", &file.highlight_bg)?,
            highlight_fg: parse_color("highlight_fg", &file.highlight_fg)?,
            gradient: [
                parse_color("gradient", &file.gradient[0])?,
                parse_color("gradient", &file.gradient[1])?,
                parse_color("gradient", &file.gradient[2])?,
            ],
        })
    }

    fn to_file(&self) -> Result<ThemeFile, ThemeError> {
        Ok(ThemeFile {
            name: self.name.to_string(),
            bg: hex_color("bg", self.bg)?,
            fg: hex_color("fg", self.fg)?,
            fg_dim: hex_color("fg_dim", self.fg_dim)?,
            title: hex_color("title", self.title)?,
            border: hex_color("border", self.border)?,
            accent: hex_color("accent", self.accent)?,
            selected: hex_color("selected", self.selected)?,
            highlight_bg: hex_color("highlight_bg", self.highlight_bg)?,
            highlight_fg: hex_color("highlight_fg", self.highlight_fg)?,
            gradient: [
                hex_color("gradient", self.gradient[0])?,
                hex_color("gradient", self.gradient[1])?,
                hex_color("gradient", self.gradient[2])?,
            ],
        })
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 7] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: Cow::Borrowed("Catppuccin Mocha"),
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        title: Color::Rgb(203, 166, 247),      // mauve
        border: Color::Rgb(88, 91, 112),       // surface2
        accent: Color::Rgb(137, 180, 250),     // blue
        selected: Color::Rgb(180, 190, 254),   // lavender
        highlight_bg: Color::Rgb(69, 71, 90),  // surface1
        highlight_fg: Color::Rgb(249, 226, 175), // yellow
        gradient: [
            Color::Rgb(166, 227, 161), // green
            Color::Rgb(249, 226, 175), // yellow
            Color::Rgb(243, 139, 168), // red
        ],
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: Cow::Borrowed("Catppuccin Macchiato"),
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        title: Color::Rgb(198, 160, 246),
        border: Color::Rgb(91, 96, 120),
        accent: Color::Rgb(138, 173, 244),
        selected: Color::Rgb(183, 189, 248),
        highlight_bg: Color::Rgb(73, 77, 100),
        highlight_fg: Color::Rgb(238, 212, 159),
        gradient: [
            Color::Rgb(166, 218, 149),
            Color::Rgb(238, 212, 159),
            Color::Rgb(237, 135, 150),
        ],
    },
    // 2 - Catppuccin Frappe
    Theme {
        name: Cow::Borrowed("Catppuccin Frappe"),
        bg: Color::Rgb(48, 52, 70),
        fg: Color::Rgb(198, 208, 245),
        fg_dim: Color::Rgb(115, 121, 148),
        title: Color::Rgb(202, 158, 230),
        border: Color::Rgb(98, 104, 128),
        accent: Color::Rgb(140, 170, 238),
        selected: Color::Rgb(186, 187, 241),
        highlight_bg: Color::Rgb(81, 87, 109),
        highlight_fg: Color::Rgb(229, 200, 144),
        gradient: [
            Color::Rgb(166, 209, 137),
            Color::Rgb(229, 200, 144),
            Color::Rgb(231, 130, 132),
        ],
    },
    // 3 - Dracula
    Theme {
        name: Cow::Borrowed("Dracula"),
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        title: Color::Rgb(189, 147, 249), // purple
        border: Color::Rgb(68, 71, 90),
        accent: Color::Rgb(139, 233, 253),   // cyan
        selected: Color::Rgb(255, 121, 198), // pink
        highlight_bg: Color::Rgb(68, 71, 90),
        highlight_fg: Color::Rgb(241, 250, 140),
        gradient: [
            Color::Rgb(80, 250, 123),
            Color::Rgb(241, 250, 140),
            Color::Rgb(255, 85, 85),
        ],
    },
    // 4 - Nord
    Theme {
        name: Cow::Borrowed("Nord"),
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        title: Color::Rgb(129, 161, 193),
        border: Color::Rgb(67, 76, 94),
        accent: Color::Rgb(136, 192, 208), // frost
        selected: Color::Rgb(143, 188, 187),
        highlight_bg: Color::Rgb(67, 76, 94),
        highlight_fg: Color::Rgb(235, 203, 139),
        gradient: [
            Color::Rgb(163, 190, 140),
            Color::Rgb(235, 203, 139),
            Color::Rgb(191, 97, 106),
        ],
    },
    // 5 - Tokyo Night
    Theme {
        name: Cow::Borrowed("Tokyo Night"),
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        title: Color::Rgb(187, 154, 247),
        border: Color::Rgb(41, 46, 66),
        accent: Color::Rgb(122, 162, 247), // blue
        selected: Color::Rgb(125, 207, 255),
        highlight_bg: Color::Rgb(41, 46, 66),
        highlight_fg: Color::Rgb(224, 175, 104),
        gradient: [
            Color::Rgb(158, 206, 106),
            Color::Rgb(224, 175, 104),
            Color::Rgb(247, 118, 142),
        ],
    },
    // 6 - Gruvbox Dark
    Theme {
        name: Cow::Borrowed("Gruvbox Dark"),
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        title: Color::Rgb(254, 128, 25), // orange
        border: Color::Rgb(80, 73, 69),
        accent: Color::Rgb(131, 165, 152),
        selected: Color::Rgb(250, 189, 47),
        highlight_bg: Color::Rgb(80, 73, 69),
        highlight_fg: Color::Rgb(250, 189, 47),
        gradient: [
            Color::Rgb(184, 187, 38),
            Color::Rgb(250, 189, 47),
            Color::Rgb(251, 73, 52),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 7);
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("CATPPUCCIN MOCHA").is_some());
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.overlay0));
        assert_eq!(theme.title, ctp(mocha.mauve));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.selected, ctp(mocha.lavender));
        assert_eq!(theme.highlight_bg, ctp(mocha.surface1));
        assert_eq!(
            theme.gradient,
            [ctp(mocha.green), ctp(mocha.yellow), ctp(mocha.red)]
        );
    }

    #[test]
    fn test_catppuccin_macchiato_matches_palette() {
        let macchiato = catppuccin::PALETTE.macchiato.colors;
        let theme = Theme::by_name("Catppuccin Macchiato").expect("theme exists");
        assert_eq!(theme.bg, ctp(macchiato.base));
        assert_eq!(theme.fg, ctp(macchiato.text));
        assert_eq!(theme.accent, ctp(macchiato.blue));
        assert_eq!(theme.title, ctp(macchiato.mauve));
    }

    #[test]
    fn test_catppuccin_frappe_matches_palette() {
        let frappe = catppuccin::PALETTE.frappe.colors;
        let theme = Theme::by_name("Catppuccin Frappe").expect("theme exists");
        assert_eq!(theme.bg, ctp(frappe.base));
        assert_eq!(theme.fg, ctp(frappe.text));
        assert_eq!(theme.accent, ctp(frappe.blue));
        assert_eq!(theme.title, ctp(frappe.mauve));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name.as_ref()).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }

    #[test]
    fn test_tree_style_uses_theme_colors() {
        let theme = Theme::default_theme();
        let style = theme.tree_style();
        assert_eq!(style.node.fg, Some(theme.fg));
        assert_eq!(style.selected.bg, Some(theme.highlight_bg));
        assert_eq!(style.lines.fg, Some(theme.fg_dim));
        assert_eq!(style.expanded_symbol, "▼");
    }

    #[test]
    fn test_gradient_color_endpoints() {
        let theme = Theme::by_name("Nord").expect("theme exists");
        assert_eq!(theme.gradient_color(0.0), theme.gradient[0]);
        assert_eq!(theme.gradient_color(0.5), theme.gradient[1]);
        assert_eq!(theme.gradient_color(1.0), theme.gradient[2]);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("themes").join("dracula.json");
        let theme = Theme::by_name("Dracula").expect("theme exists");

        theme.save_to(&path).expect("save_to");
        let loaded = Theme::load_from(&path).expect("load_from");
        assert_eq!(&loaded, theme);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let result = Theme::load_from(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(ThemeError::Read { .. })));
    }

    #[test]
    fn test_load_from_rejects_bad_color() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("bad.json");
        let mut json: serde_json::Value =
            serde_json::to_value(Theme::default_theme().to_file().expect("to_file"))
                .expect("to_value");
        json["accent"] = serde_json::Value::from("blue");
        fs::write(&path, json.to_string()).expect("write");

        match Theme::load_from(&path) {
            Err(ThemeError::InvalidColor { field, value }) => {
                assert_eq!(field, "accent");
                assert_eq!(value, "blue");
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_rejects_unknown_fields() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("extra.json");
        let mut json =
            serde_json::to_value(Theme::default_theme().to_file().expect("to_file")).expect("to_value");
        json["sparkle"] = serde_json::Value::Bool(true);
        fs::write(&path, json.to_string()).expect("write");

        assert!(matches!(Theme::load_from(&path), Err(ThemeError::Parse { .. })));
    }

    #[test]
    fn test_save_rejects_named_colors() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut theme = Theme::default_theme().clone();
        theme.border = Color::Gray;
        let result = theme.save_to(&temp_dir.path().join("named.json"));
        assert!(matches!(result, Err(ThemeError::NotRgb { field: "border" })));
    }
}
