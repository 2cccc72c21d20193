//! Bordered box with an optional centered title.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use crate::symbols::line;

const SQUARE: border::Set<'static> = border::Set {
    top_left: line::TOP_LEFT,
    top_right: line::TOP_RIGHT,
    bottom_left: line::BOTTOM_LEFT,
    bottom_right: line::BOTTOM_RIGHT,
    vertical_left: line::VERTICAL,
    vertical_right: line::VERTICAL,
    horizontal_top: line::HORIZONTAL,
    horizontal_bottom: line::HORIZONTAL,
};

const ROUND: border::Set<'static> = border::Set {
    top_left: line::ROUND_TOP_LEFT,
    top_right: line::ROUND_TOP_RIGHT,
    bottom_left: line::ROUND_BOTTOM_LEFT,
    bottom_right: line::ROUND_BOTTOM_RIGHT,
    ..SQUARE
};

#[derive(Debug, Clone)]
pub struct Panel {
    title: Option<String>,
    /// Rounded corners (the default) or square ones.
    rounded: bool,
    style: Style,
    border_style: Style,
    title_style: Style,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            title: None,
            rounded: true,
            style: Style::default(),
            border_style: Style::default(),
            title_style: Style::default(),
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    fn block(&self) -> Block<'_> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(if self.rounded { ROUND } else { SQUARE })
            .border_style(self.border_style)
            .style(self.style);
        match &self.title {
            Some(title) => block
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .title_style(self.title_style),
            None => block,
        }
    }

    /// Area left for content once the border is drawn.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for &Panel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}
