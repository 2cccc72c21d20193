//! Single-row bar of separated, padded items.
//!
//! Each item has a base width (its `min_width`, or its padded text width when
//! that is zero). Width left over after bases and separators goes to items
//! whose `max_width` exceeds their base, in proportion to how much they can
//! grow.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Widget,
};

use crate::widgets::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    pub text: String,
    pub style: Option<Style>,
    /// Zero means "fit the text".
    pub min_width: usize,
    /// Growth limit; at or below the base width the item never grows.
    pub max_width: usize,
    pub alignment: Alignment,
}

impl StatusItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            min_width: 0,
            max_width: 0,
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[derive(Debug, Clone)]
pub struct StatusBar {
    items: Vec<StatusItem>,
    separator: String,
    padding: usize,
    style: Style,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            separator: " | ".to_string(),
            padding: 1,
            style: Style::default(),
        }
    }
}

impl StatusBar {
    pub fn new(items: Vec<StatusItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn items(&self) -> &[StatusItem] {
        &self.items
    }

    pub fn push(&mut self, item: StatusItem) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the text (and optionally the style) of the item at `index`.
    pub fn update_item(&mut self, index: usize, text: impl Into<String>, style: Option<Style>) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.text = text.into();
        if style.is_some() {
            item.style = style;
        }
        true
    }

    fn base_width(&self, item: &StatusItem) -> usize {
        if item.min_width > 0 {
            item.min_width
        } else {
            text::display_width(&item.text) + self.padding * 2
        }
    }

    fn separators_width(&self) -> usize {
        self.items.len().saturating_sub(1) * text::display_width(&self.separator)
    }

    /// Width of every item when the bar is `width` columns wide.
    pub fn layout(&self, width: usize) -> Vec<usize> {
        let bases: Vec<usize> = self.items.iter().map(|item| self.base_width(item)).collect();
        let flex_total: usize = self
            .items
            .iter()
            .zip(&bases)
            .map(|(item, base)| item.max_width.saturating_sub(*base))
            .fold(0, usize::saturating_add);
        let used = bases
            .iter()
            .fold(self.separators_width(), |total, base| total.saturating_add(*base));
        let extra = width.saturating_sub(used);
        if extra == 0 || flex_total == 0 {
            return bases;
        }

        self.items
            .iter()
            .zip(bases)
            .map(|(item, base)| {
                let room = item.max_width.saturating_sub(base);
                // Ratio in floating point; `max_width` may be `usize::MAX`.
                let share = (extra as f64 * room as f64 / flex_total as f64) as usize;
                base + share.min(room)
            })
            .collect()
    }

    /// Total width at the base widths.
    pub fn min_total_width(&self) -> usize {
        self.items.iter().fold(self.separators_width(), |total, item| {
            total.saturating_add(self.base_width(item))
        })
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.items.is_empty() {
            return;
        }
        let widths = self.layout(usize::from(area.width));
        let pad = " ".repeat(self.padding);
        let right = usize::from(area.right());
        let mut x = usize::from(area.x);

        for (index, (item, width)) in self.items.iter().zip(widths).enumerate() {
            if x >= right {
                break;
            }
            let padded = format!("{pad}{}{pad}", item.text);
            let cell = text::align(&padded, width, item.alignment);
            buf.set_stringn(x as u16, area.y, &cell, right - x, item.style.unwrap_or(self.style));
            x += width;

            if index + 1 < self.items.len() && x < right {
                buf.set_stringn(x as u16, area.y, &self.separator, right - x, self.style);
                x += text::display_width(&self.separator);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bar: &StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_base_widths_fit_padded_text() {
        let bar = StatusBar::new(vec![StatusItem::new("ab"), StatusItem::new("cde").min_width(8)]);
        assert_eq!(bar.layout(0), vec![4, 8]);
        assert_eq!(bar.min_total_width(), 15);
    }

    #[test]
    fn test_extra_width_split_by_flex() {
        let bar = StatusBar::new(vec![
            StatusItem::new("a").min_width(4).max_width(10),
            StatusItem::new("b").min_width(4).max_width(7),
            StatusItem::new("c").min_width(4),
        ]);
        // 3 bases of 4 plus two separators of 3 leave 12 of 30; flex 6:3.
        assert_eq!(bar.layout(30), vec![10, 7, 4]);
        // 6 spare columns split 4:2.
        assert_eq!(bar.layout(24), vec![8, 6, 4]);
    }

    #[test]
    fn test_unbounded_max_width_takes_all_spare_room() {
        let bar = StatusBar::new(vec![
            StatusItem::new("a").max_width(usize::MAX),
            StatusItem::new("b"),
        ]);
        // Bases 3 + 3 and one separator leave 71 of 80 for the first item.
        assert_eq!(bar.layout(80), vec![74, 3]);
        assert_eq!(bar.layout(80).iter().sum::<usize>() + 3, 80);
    }

    #[test]
    fn test_layout_does_not_mutate_items() {
        let bar = StatusBar::new(vec![StatusItem::new("a").min_width(2).max_width(20)]);
        let first = bar.layout(40);
        assert_eq!(bar.layout(40), first);
        assert_eq!(bar.items()[0].min_width, 2);
    }

    #[test]
    fn test_render_with_separator_and_alignment() {
        let bar = StatusBar::new(vec![
            StatusItem::new("left"),
            StatusItem::new("right").min_width(9).alignment(Alignment::Right),
        ]);
        assert_eq!(line(&bar, 18), " left  |    right ");
    }

    #[test]
    fn test_update_item() {
        let mut bar = StatusBar::new(vec![StatusItem::new("old")]);
        assert!(bar.update_item(0, "new", None));
        assert_eq!(bar.items()[0].text, "new");
        assert!(!bar.update_item(3, "x", None));
    }

    #[test]
    fn test_render_clips_at_area_edge() {
        let bar = StatusBar::new(vec![StatusItem::new("abcdef"), StatusItem::new("ghi")]);
        assert_eq!(line(&bar, 5), " abcd");
    }
}
