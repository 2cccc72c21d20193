//! Screen rendering tests
//!
//! Tests that draw the whole demo screen into a ratatui test backend and
//! check what ends up in each region.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dodo::ui::render::layout;
use dodo::ui::{render, App, Config, Theme};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

/// Helper to create a test app sized to the test terminal
fn create_test_app() -> App {
    let mut app = App::new(
        App::demo_tree(),
        Theme::default_theme().clone(),
        &Config::default(),
    );
    app.resize(Rect::new(0, 0, WIDTH, HEIGHT));
    app
}

/// Helper to draw one frame and hand back the buffer
fn draw(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Helper to read one row of a region
fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
    (area.left()..area.right())
        .map(|x| buf[(x, area.y + y)].symbol().to_string())
        .collect()
}

fn region_contains(buf: &Buffer, area: Rect, needle: &str) -> bool {
    (0..area.height).any(|y| row_text(buf, area, y).contains(needle))
}

/// Regions tile the screen without overlapping
#[test]
fn test_layout_regions() {
    let regions = layout(Rect::new(0, 0, WIDTH, HEIGHT));

    assert_eq!(regions.status.height, 1);
    assert_eq!(regions.status.y, HEIGHT - 1);
    assert_eq!(regions.tree.height, HEIGHT - 1);
    assert_eq!(regions.meters.height, 5);
    assert_eq!(regions.graph.height, 8);
    assert_eq!(regions.info.height, HEIGHT - 1 - 5 - 8);
    assert_eq!(regions.tree.width + regions.info.width, WIDTH);
    assert_eq!(regions.info.x, regions.tree.right());
}

/// The tree panel shows the expanded root and its groups
#[test]
fn test_tree_panel() {
    let app = create_test_app();
    let buf = draw(&app);
    let tree = layout(buf.area).tree;

    assert!(row_text(&buf, tree, 0).contains(" Tree "));
    assert!(row_text(&buf, tree, 1).contains("▼ Project"));
    assert!(row_text(&buf, tree, 2).contains("├ ▶ src"));
    assert!(row_text(&buf, tree, 5).contains("└ ▶ config"));
    assert_eq!(buf[(tree.x, tree.y)].symbol(), "╭");
}

/// The info panel describes the selected node
#[test]
fn test_info_panel_follows_selection() {
    let mut app = create_test_app();
    app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::empty()));
    let buf = draw(&app);
    let info = layout(buf.area).info;

    assert!(region_contains(&buf, info, "Node"));
    assert!(region_contains(&buf, info, "Path:"));
    assert!(region_contains(&buf, info, "Project/src"));
}

/// The status line carries the mode, the selection and the theme name
#[test]
fn test_status_line() {
    let app = create_test_app();
    let buf = draw(&app);
    let status = layout(buf.area).status;
    let line = row_text(&buf, status, 0);

    assert!(line.starts_with(" TREE "));
    assert!(line.contains("Project"));
    assert!(line.trim_end().ends_with("Catppuccin Mocha"));
}

/// Search mode shows the query in the status line
#[test]
fn test_status_line_in_search_mode() {
    let mut app = create_test_app();
    app.enter_search_mode();
    app.search_query.push_str("lib");
    let buf = draw(&app);
    let line = row_text(&buf, layout(buf.area).status, 0);

    assert!(line.starts_with(" SEARCH "));
    assert!(line.contains("/lib"));
}

/// Ticking feeds the meters and the graph
#[test]
fn test_live_widgets_after_ticks() {
    let mut app = create_test_app();
    for _ in 0..40 {
        app.tick();
    }
    assert_eq!(app.ticks(), 40);
    assert_eq!(app.graph.data().len(), 40);
    assert!(app.meters.items().iter().all(|item| item.value > 0.0));

    let buf = draw(&app);
    let regions = layout(buf.area);

    assert!(region_contains(&buf, regions.meters, "CPU"));
    assert!(region_contains(&buf, regions.meters, "%"));
    assert!(row_text(&buf, regions.graph, 0).contains(" CPU "));
    let graph_body = Rect::new(
        regions.graph.x + 1,
        regions.graph.y + 1,
        regions.graph.width - 2,
        regions.graph.height - 2,
    );
    let bottom = row_text(&buf, graph_body, graph_body.height - 1);
    assert!(bottom.trim().chars().count() >= 40);
}

/// A tiny terminal still draws without panicking
#[test]
fn test_render_tiny_terminal() {
    let mut app = create_test_app();
    app.resize(Rect::new(0, 0, 4, 2));
    let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();

    terminal.draw(|frame| render(frame, &app)).unwrap();
}
