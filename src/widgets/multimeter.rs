//! Several labelled meters laid out in a column or a row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::color;
use crate::symbols;
use crate::widgets::text;

/// Narrowest column a horizontally laid out item gets.
const MIN_ITEM_WIDTH: u16 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct MeterItem {
    pub label: String,
    pub value: f64,
    pub max: f64,
    /// Overrides the widget style for this item's label, bar and value.
    pub style: Option<Style>,
    pub gradient: Vec<Color>,
}

impl MeterItem {
    pub fn new(label: impl Into<String>, value: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            value,
            max,
            style: None,
            gradient: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn gradient(mut self, colors: Vec<Color>) -> Self {
        self.gradient = colors;
        self
    }

    /// `value / max` in `0.0..=1.0`; a non-positive `max` gives 0.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 || self.value.is_nan() {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone)]
pub struct MultiMeter {
    items: Vec<MeterItem>,
    orientation: Orientation,
    show_labels: bool,
    show_values: bool,
    show_border: bool,
    label_width: u16,
    spacing: u16,
    style: Style,
    label_style: Style,
}

impl Default for MultiMeter {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            orientation: Orientation::default(),
            show_labels: true,
            show_values: true,
            show_border: true,
            label_width: 20,
            spacing: 1,
            style: Style::default(),
            label_style: Style::default(),
        }
    }
}

impl MultiMeter {
    pub fn new(items: Vec<MeterItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[MeterItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [MeterItem] {
        &mut self.items
    }

    pub fn push(&mut self, item: MeterItem) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Update the value of the item at `index`. Out of range is a no-op.
    pub fn set_value(&mut self, index: usize, value: f64) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.value = value;
                true
            }
            None => false,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Rows one vertically laid out item occupies, spacing included.
    pub fn item_height(&self) -> u16 {
        (1 + u16::from(self.show_labels) + u16::from(self.show_values)).saturating_add(self.spacing)
    }

    fn draw_bar(&self, item: &MeterItem, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let style = item.style.unwrap_or(self.style);
        let filled = (f64::from(width) * item.ratio()).floor() as u16;
        for i in 0..width {
            if i < filled.min(width) {
                let fill = if item.gradient.is_empty() {
                    style
                } else {
                    let position = f64::from(i) / f64::from(width);
                    style.fg(color::gradient_at(&item.gradient, position))
                };
                buf.set_string(x + i, y, symbols::meter::FILLED, fill);
            } else {
                buf.set_string(x + i, y, symbols::meter::EMPTY, style);
            }
        }
    }

    fn value_text(item: &MeterItem) -> String {
        format!("{:.1}%", item.ratio() * 100.0)
    }

    fn render_vertical(&self, area: Rect, buf: &mut Buffer) {
        let bar_width = area.width.saturating_sub(2);
        let item_height = self.item_height();
        let mut y = area.y;
        for item in &self.items {
            if u32::from(y) + u32::from(item_height) > u32::from(area.bottom()) {
                break;
            }
            let style = item.style.unwrap_or(self.style);
            if self.show_labels {
                let width = usize::from(self.label_width.min(area.width));
                let label_style = item.style.unwrap_or(self.label_style);
                buf.set_stringn(area.x, y, &item.label, width, label_style);
                y += 1;
            }
            self.draw_bar(item, area.x, y, bar_width, buf);
            y += 1;
            if self.show_values {
                buf.set_stringn(area.x, y, Self::value_text(item), usize::from(area.width), style);
                y += 1;
            }
            y = y.saturating_add(self.spacing);
        }
    }

    fn render_horizontal(&self, area: Rect, buf: &mut Buffer) {
        let count = u16::try_from(self.items.len()).unwrap_or(u16::MAX).max(1);
        let item_width = (area.width / count).max(MIN_ITEM_WIDTH);
        let mut x = area.x;
        for item in &self.items {
            if u32::from(x) + u32::from(item_width) > u32::from(area.right()) {
                break;
            }
            let style = item.style.unwrap_or(self.style);
            let mut y = area.y;
            if self.show_labels {
                let label = text::truncate_with_ellipsis(&item.label, usize::from(item_width));
                buf.set_string(x, y, label, item.style.unwrap_or(self.label_style));
                y += 1;
            }
            if y >= area.bottom() {
                break;
            }
            self.draw_bar(item, x, y, item_width - 2, buf);
            y += 1;
            if self.show_values && y < area.bottom() {
                buf.set_stringn(x, y, Self::value_text(item), usize::from(item_width), style);
            }
            x = x.saturating_add(item_width).saturating_add(self.spacing);
        }
    }
}

impl Widget for &MultiMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.items.is_empty() {
            return;
        }
        let inner = if self.show_border {
            let block = Block::default().borders(Borders::ALL).style(self.style);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        match self.orientation {
            Orientation::Vertical => self.render_vertical(inner, buf),
            Orientation::Horizontal => self.render_horizontal(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(meter: &MultiMeter, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        meter.render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_ratio() {
        assert_eq!(MeterItem::new("cpu", 50.0, 200.0).ratio(), 0.25);
        assert_eq!(MeterItem::new("cpu", 500.0, 100.0).ratio(), 1.0);
        assert_eq!(MeterItem::new("cpu", 10.0, 0.0).ratio(), 0.0);
        assert_eq!(MeterItem::new("cpu", 10.0, -1.0).ratio(), 0.0);
    }

    #[test]
    fn test_vertical_layout() {
        let meter = MultiMeter::new(vec![
            MeterItem::new("CPU", 50.0, 100.0),
            MeterItem::new("MEM", 100.0, 100.0),
        ])
        .show_border(false);
        assert_eq!(meter.item_height(), 4);

        let rows = lines(&meter, 6, 8);
        assert_eq!(rows[0], "CPU");
        assert_eq!(rows[1], "██░░");
        assert_eq!(rows[2], "50.0%");
        assert_eq!(rows[3], "");
        assert_eq!(rows[4], "MEM");
        assert_eq!(rows[5], "████");
        assert_eq!(rows[6], "100.0%");
    }

    #[test]
    fn test_items_that_do_not_fit_are_skipped() {
        let meter = MultiMeter::new(vec![
            MeterItem::new("A", 1.0, 1.0),
            MeterItem::new("B", 1.0, 1.0),
        ])
        .show_border(false);
        let rows = lines(&meter, 6, 5);
        assert_eq!(rows[0], "A");
        assert!(rows.iter().all(|row| row != "B"));
    }

    #[test]
    fn test_zero_max_renders_empty_bar() {
        let meter = MultiMeter::new(vec![MeterItem::new("Disk", 3.0, 0.0)])
            .show_border(false)
            .show_labels(false)
            .show_values(false);
        let rows = lines(&meter, 6, 2);
        assert_eq!(rows[0], "░░░░");
    }

    #[test]
    fn test_border_and_horizontal_layout() {
        let meter = MultiMeter::new(vec![
            MeterItem::new("Left", 100.0, 100.0),
            MeterItem::new("Right", 0.0, 100.0),
        ])
        .orientation(Orientation::Horizontal)
        .spacing(0)
        .show_values(false);
        let rows = lines(&meter, 22, 4);
        assert_eq!(rows[0], "┌────────────────────┐");
        assert_eq!(rows[1], "│Left      Right     │");
        assert_eq!(rows[2], "│████████  ░░░░░░░░  │");
    }

    #[test]
    fn test_huge_spacing_saturates() {
        let meter = MultiMeter::new(vec![
            MeterItem::new("A", 1.0, 1.0),
            MeterItem::new("B", 1.0, 1.0),
        ])
        .show_border(false)
        .spacing(u16::MAX);
        assert_eq!(meter.item_height(), u16::MAX);
        // Neither layout fits a single item with that much spacing.
        assert!(lines(&meter, 6, 5).iter().all(String::is_empty));

        let horizontal = meter.orientation(Orientation::Horizontal);
        let area = Rect::new(u16::MAX - 20, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        horizontal.render(area, &mut buf);
        assert_eq!(buf[(u16::MAX - 20, 0)].symbol(), "A");
    }

    #[test]
    fn test_empty_items_draw_nothing() {
        let rows = lines(&MultiMeter::default(), 10, 3);
        assert!(rows.iter().all(String::is_empty));
    }
}
