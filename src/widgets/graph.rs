//! Column graph of samples.
//!
//! Each sample becomes one column. A column `height` rows tall has
//! `height * 8` fill levels; full cells use the last glyph of the level table
//! and the topmost partial cell picks one of the eight intermediate glyphs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::color;
use crate::symbols;

const LEVELS_PER_CELL: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphStyle {
    #[default]
    Braille,
    Block,
    /// Plain ASCII for terminals without unicode fonts.
    Tty,
}

impl GraphStyle {
    pub fn levels(self) -> &'static [&'static str; 9] {
        match self {
            Self::Braille => &symbols::BRAILLE_LEVELS,
            Self::Block => &symbols::BLOCK_LEVELS,
            Self::Tty => &symbols::TTY_LEVELS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    data: Vec<f64>,
    min: f64,
    max: f64,
    inverted: bool,
    graph_style: GraphStyle,
    gradient: Vec<Color>,
    style: Style,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            min: 0.0,
            max: 100.0,
            inverted: false,
            graph_style: GraphStyle::default(),
            gradient: Vec::new(),
            style: Style::default(),
        }
    }
}

impl Graph {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Hang columns from the top edge instead of standing on the bottom.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn graph_style(mut self, graph_style: GraphStyle) -> Self {
        self.graph_style = graph_style;
        self
    }

    /// Column colors, sampled by column height.
    pub fn gradient(mut self, colors: Vec<Color>) -> Self {
        self.gradient = colors;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<f64>) {
        self.data = data;
    }

    /// Append a sample, dropping the oldest ones beyond `capacity`.
    pub fn push(&mut self, value: f64, capacity: usize) {
        self.data.push(value);
        if self.data.len() > capacity {
            let excess = self.data.len() - capacity;
            self.data.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Position of `value` inside the range, clamped to `0.0..=1.0`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || value.is_nan() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Fill levels of a column `height` rows tall.
    pub fn column_levels(&self, value: f64, height: u16) -> usize {
        let total = usize::from(height) * LEVELS_PER_CELL;
        (self.fraction(value) * total as f64).round() as usize
    }

    fn column_style(&self, fraction: f64) -> Style {
        if self.gradient.is_empty() {
            self.style
        } else {
            self.style.fg(color::gradient_at(&self.gradient, fraction))
        }
    }
}

impl Widget for &Graph {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.data.is_empty() {
            return;
        }
        let levels = self.graph_style.levels();
        let width = usize::from(area.width);
        let samples = &self.data[self.data.len().saturating_sub(width)..];

        for (column, value) in samples.iter().enumerate() {
            let x = area.x + column as u16;
            let filled = self.column_levels(*value, area.height);
            let style = self.column_style(self.fraction(*value));
            for step in 0..area.height {
                let below = usize::from(step) * LEVELS_PER_CELL;
                let level = filled.saturating_sub(below).min(LEVELS_PER_CELL);
                let y = if self.inverted {
                    area.top() + step
                } else {
                    area.bottom() - 1 - step
                };
                buf.set_string(x, y, levels[level], style);
            }
        }
    }
}
