//! Scrollable key/value list.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::widgets::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    pub label: String,
    pub value: String,
    pub label_style: Option<Style>,
    pub value_style: Option<Style>,
}

impl InfoField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            label_style: None,
            value_style: None,
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = Some(style);
        self
    }
}

#[derive(Debug, Clone)]
pub struct InfoPanel {
    title: String,
    fields: Vec<InfoField>,
    show_border: bool,
    label_width: u16,
    scroll_offset: usize,
    /// Total height (border and title included) of the area last laid out.
    height: u16,
    style: Style,
    title_style: Style,
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self {
            title: String::new(),
            fields: Vec::new(),
            show_border: true,
            label_width: 20,
            scroll_offset: 0,
            height: 0,
            style: Style::default(),
            title_style: Style::default(),
        }
    }
}

impl InfoPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_fields(&mut self, fields: Vec<InfoField>) {
        self.fields = fields;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    pub fn add_field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push(InfoField::new(label, value));
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
        self.scroll_offset = 0;
    }

    pub fn fields(&self) -> &[InfoField] {
        &self.fields
    }

    pub fn set_show_border(&mut self, show: bool) {
        self.show_border = show;
    }

    pub fn set_label_width(&mut self, width: u16) {
        self.label_width = width;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_title_style(&mut self, style: Style) {
        self.title_style = style;
    }

    /// Record the height the panel is laid out at, so scrolling knows how
    /// many rows are visible.
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows available for fields at the current height.
    pub fn visible_rows(&self) -> usize {
        let border = if self.show_border { 2 } else { 0 };
        let chrome = border + u16::from(!self.title.is_empty());
        usize::from(self.height.saturating_sub(chrome))
    }

    fn max_offset(&self) -> usize {
        self.fields.len().saturating_sub(self.visible_rows())
    }

    /// Scroll with Up/Down/Home/End. Returns whether the offset changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let max = self.max_offset();
        let target = match key.code {
            KeyCode::Up => self.scroll_offset.saturating_sub(1),
            KeyCode::Down => (self.scroll_offset + 1).min(max),
            KeyCode::Home => 0,
            KeyCode::End => max,
            _ => return false,
        };
        let changed = target != self.scroll_offset;
        self.scroll_offset = target;
        changed
    }

    fn label_cell(&self, label: &str) -> String {
        let width = usize::from(self.label_width);
        let label = format!("{label}:");
        if text::display_width(&label) > width {
            text::truncate_with_ellipsis(&label, width)
        } else {
            text::align(&label, width, Alignment::Left)
        }
    }
}

impl Widget for &InfoPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut inner = if self.show_border {
            let block = Block::default().borders(Borders::ALL).style(self.style);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if inner.is_empty() {
            return;
        }

        if !self.title.is_empty() {
            let title = text::align(&self.title, usize::from(inner.width), Alignment::Center);
            buf.set_string(inner.x, inner.y, title, self.title_style);
            inner.y += 1;
            inner.height -= 1;
        }

        let value_x = inner.x.saturating_add(self.label_width).saturating_add(1);
        let value_width = usize::from(inner.right().saturating_sub(value_x));
        let rows = self.fields.iter().skip(self.scroll_offset);
        for (field, y) in rows.zip(inner.top()..inner.bottom()) {
            let label = self.label_cell(&field.label);
            buf.set_stringn(
                inner.x,
                y,
                label,
                usize::from(inner.width),
                field.label_style.unwrap_or(self.style),
            );
            if value_width > 0 {
                let value = text::truncate_with_ellipsis(&field.value, value_width);
                buf.set_string(value_x, y, value, field.value_style.unwrap_or(self.style));
            }
        }
    }
}
