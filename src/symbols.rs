//! Glyph tables shared by the widgets.

/// Box drawing. Square corners plus their rounded variants.
pub mod line {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const TOP_LEFT: &str = "┌";
    pub const TOP_RIGHT: &str = "┐";
    pub const BOTTOM_LEFT: &str = "└";
    pub const BOTTOM_RIGHT: &str = "┘";
    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";
}

/// Tree connectors and expand/collapse indicators.
pub mod tree {
    pub const BRANCH: &str = "├";
    pub const LAST_BRANCH: &str = "└";
    pub const PIPE: &str = "│";
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
}

/// Meter fill glyphs.
pub mod meter {
    pub const FILLED: &str = "█";
    pub const EMPTY: &str = "░";
    pub const BLOCK: &str = "⠿";
}

/// Nine fill levels, empty to full, drawn with braille dots.
pub const BRAILLE_LEVELS: [&str; 9] = ["⠀", "⡀", "⣀", "⣄", "⣤", "⣦", "⣶", "⣷", "⣿"];

/// Nine fill levels, empty to full, drawn with lower block elements.
pub const BLOCK_LEVELS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Nine fill levels for terminals without unicode.
pub const TTY_LEVELS: [&str; 9] = [" ", "_", ".", "-", "=", "+", "*", "#", "@"];
