use crate::ui::app::{App, FocusPane};
use crate::widgets::{text, Panel, StatusBar, StatusItem};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Rows for the meter strip: border, label, bar, value.
const METERS_HEIGHT: u16 = 5;
const GRAPH_HEIGHT: u16 = 8;
const SEPARATOR: &str = " | ";
const HINTS: &str =
    "[↑↓/jk] Move  [←→] Fold  [/] Find  [e/c] Expand/Collapse  [t] Theme  [Tab] Pane  [q] Quit";

/// Screen regions of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Tree panel, border included.
    pub tree: Rect,
    pub info: Rect,
    pub meters: Rect,
    /// Graph panel, border included.
    pub graph: Rect,
    pub status: Rect,
}

pub fn layout(area: Rect) -> AppLayout {
    // Main layout: Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Tree on the left, node details and live widgets on the right
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(METERS_HEIGHT),
            Constraint::Length(GRAPH_HEIGHT),
        ])
        .split(body_chunks[1]);

    AppLayout {
        tree: body_chunks[0],
        info: right_chunks[0],
        meters: right_chunks[1],
        graph: right_chunks[2],
        status: main_chunks[1],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let regions = layout(frame.area());
    frame.render_widget(Block::default().style(app.theme.style()), frame.area());

    render_tree(frame, app, regions.tree);
    frame.render_widget(&app.info, regions.info);
    frame.render_widget(&app.meters, regions.meters);
    render_graph(frame, app, regions.graph);
    render_status(frame, app, regions.status);
}

fn border_style(app: &App, pane: FocusPane) -> Style {
    if app.focus == pane {
        app.theme.accent_style()
    } else {
        app.theme.border_style()
    }
}

fn render_tree(frame: &mut Frame, app: &App, area: Rect) {
    let panel = Panel::new()
        .title("Tree")
        .border_style(border_style(app, FocusPane::Tree))
        .title_style(app.theme.title_style());
    let inner = panel.inner(area);
    frame.render_widget(&panel, area);
    frame.render_widget(&app.tree_view, inner);
}

fn render_graph(frame: &mut Frame, app: &App, area: Rect) {
    let panel = Panel::new()
        .title("CPU")
        .border_style(app.theme.border_style())
        .title_style(app.theme.title_style());
    let inner = panel.inner(area);
    frame.render_widget(&panel, area);
    frame.render_widget(&app.graph, inner);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mode = if app.search_mode {
        StatusItem::new("SEARCH").style(theme.selected_style())
    } else {
        let pane = match app.focus {
            FocusPane::Tree => "TREE",
            FocusPane::Info => "INFO",
        };
        StatusItem::new(pane).style(theme.accent_style())
    };

    let mut middle = if app.search_mode {
        StatusItem::new(format!("/{}", app.search_query)).style(theme.highlight_style())
    } else if app.search_failed {
        StatusItem::new("no match").style(theme.highlight_style())
    } else {
        StatusItem::new(HINTS).style(theme.dim_style())
    };

    let selected = app.tree_view.selected_label().unwrap_or("-");
    let fixed = StatusBar::new(vec![
        mode.clone(),
        StatusItem::new(selected),
        StatusItem::new(theme.name.as_ref()),
    ]);
    // Room left for the middle item, one more separator included.
    let room = usize::from(area.width).saturating_sub(fixed.min_total_width() + SEPARATOR.len());
    middle.text = text::truncate_with_ellipsis(&middle.text, room.saturating_sub(2));
    middle.max_width = room;

    let bar = StatusBar::new(vec![
        mode,
        middle,
        StatusItem::new(selected).alignment(Alignment::Right),
        StatusItem::new(theme.name.as_ref()).style(theme.title_style()),
    ])
    .separator(SEPARATOR)
    .style(theme.dim_style());
    frame.render_widget(&bar, area);
}
