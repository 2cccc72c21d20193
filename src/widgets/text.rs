//! Width-aware string fitting used by the row-oriented widgets.
//!
//! Widths are terminal columns (`unicode-width`), not bytes.

use ratatui::layout::Alignment;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Longest prefix of `text` that fits in `width` columns.
pub fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Like [`truncate`], but marks the cut with `...` when there is room.
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return truncate(text, width);
    }
    format!("{}...", truncate(text, width - 3))
}

/// Fit `text` into exactly `width` columns: truncate, then pad according to
/// `alignment`.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate(text, width);
    let padding = width - display_width(&fitted);
    match alignment {
        Alignment::Left => format!("{fitted}{}", " ".repeat(padding)),
        Alignment::Right => format!("{}{fitted}", " ".repeat(padding)),
        Alignment::Center => {
            let left = padding / 2;
            format!("{}{fitted}{}", " ".repeat(left), " ".repeat(padding - left))
        }
    }
}
