//! One-line percentage bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::color;
use crate::symbols;

/// Width taken by the ` NN%` suffix.
const PERCENT_WIDTH: u16 = 5;

#[derive(Debug, Clone)]
pub struct Meter {
    value: f64,
    show_percentage: bool,
    block_mode: bool,
    block_spacing: u16,
    gradient: Option<(Color, Color)>,
    style: Style,
    empty_style: Style,
}

impl Default for Meter {
    fn default() -> Self {
        Self {
            value: 0.0,
            show_percentage: true,
            block_mode: false,
            block_spacing: 0,
            gradient: None,
            style: Style::default(),
            empty_style: Style::default(),
        }
    }
}

impl Meter {
    pub fn new(value: f64) -> Self {
        Self::default().value(value)
    }

    /// Percentage, clamped to `0..=100`. NaN reads as 0.
    pub fn value(mut self, value: f64) -> Self {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 100.0)
        };
        self
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }

    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// Draw `⠿` cells separated by `spacing` blank columns instead of a
    /// solid bar.
    pub fn block_mode(mut self, spacing: u16) -> Self {
        self.block_mode = true;
        self.block_spacing = spacing;
        self
    }

    /// Color filled cells along `start` to `end` by their position in the bar.
    pub fn gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient = Some((start, end));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }

    /// Number of cells in a bar drawn into `width` columns.
    pub fn cell_count(&self, width: u16) -> u16 {
        let bar = if self.show_percentage {
            width.saturating_sub(PERCENT_WIDTH)
        } else {
            width
        };
        if self.block_mode {
            (bar / (1 + self.block_spacing)).max(1).min(bar)
        } else {
            bar
        }
    }

    pub fn filled_count(&self, cells: u16) -> u16 {
        ((f64::from(cells) * self.value / 100.0).floor() as u16).min(cells)
    }

    fn fill_style(&self, index: u16, cells: u16) -> Style {
        match self.gradient {
            Some((start, end)) => {
                let position = f64::from(index) / f64::from(cells.max(1));
                self.style.fg(color::gradient_at(&[start, end], position))
            }
            None => self.style,
        }
    }
}

impl Widget for &Meter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let cells = self.cell_count(area.width);
        let filled = self.filled_count(cells);
        let step = if self.block_mode { 1 + self.block_spacing } else { 1 };
        let y = area.y;

        let mut x = area.x;
        for index in 0..cells {
            if x >= area.right() {
                break;
            }
            let (symbol, style) = match (index < filled, self.block_mode) {
                (true, true) => (symbols::meter::BLOCK, self.fill_style(index, cells)),
                (true, false) => (symbols::meter::FILLED, self.fill_style(index, cells)),
                (false, true) => (symbols::meter::BLOCK, self.empty_style),
                (false, false) => (symbols::meter::EMPTY, self.empty_style),
            };
            buf.set_string(x, y, symbol, style);
            x = x.saturating_add(step);
        }

        if self.show_percentage && x < area.right() {
            let label = format!(" {:>3.0}%", self.value);
            let room = usize::from(area.right() - x);
            buf.set_stringn(x, y, label, room, self.style);
        }
    }
}
