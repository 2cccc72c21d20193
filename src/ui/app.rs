//! # Demo Application State
//!
//! Everything the `dodo` binary shows: a [`TreeView`] on the left, an
//! [`InfoPanel`] describing the selected node, and a few live meters and a
//! graph fed by [`App::tick`]. Key handling lives here rather than in the
//! event loop so it can be driven from tests.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{layout::Rect, style::Style};

use crate::tree::Tree;
use crate::ui::config::Config;
use crate::ui::render;
use crate::ui::theme::Theme;
use crate::widgets::{
    Graph, GraphStyle, InfoField, InfoPanel, MeterItem, MultiMeter, Orientation, TreeView,
};

/// Samples kept for the graph.
const GRAPH_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Tree,
    Info,
}

pub struct App {
    pub tree_view: TreeView,
    pub info: InfoPanel,
    pub meters: MultiMeter,
    pub graph: Graph,
    pub theme: Theme,
    pub focus: FocusPane,
    pub search_mode: bool,
    pub search_query: String,
    /// Set when the last submitted search found nothing.
    pub search_failed: bool,
    pub should_quit: bool,
    ticks: u64,
}

impl App {
    pub fn new(tree: Tree, theme: Theme, config: &Config) -> Self {
        let tree_view = TreeView::with_tree(tree, 0, theme.tree_style())
            .show_lines(config.show_lines)
            .indent(config.indent);
        let meters = MultiMeter::new(vec![
            MeterItem::new("CPU", 0.0, 100.0),
            MeterItem::new("Memory", 0.0, 100.0),
            MeterItem::new("Disk", 0.0, 100.0),
        ])
        .orientation(Orientation::Horizontal);

        let mut app = Self {
            tree_view,
            info: InfoPanel::new("Node"),
            meters,
            graph: Graph::default().graph_style(GraphStyle::Braille),
            theme,
            focus: FocusPane::Tree,
            search_mode: false,
            search_query: String::new(),
            search_failed: false,
            should_quit: false,
            ticks: 0,
        };
        if let Some(root) = app.tree_view.tree().root() {
            app.tree_view.select(root);
        }
        app.apply_theme();
        app.refresh_info();
        app
    }

    /// Sample project layout used by the binary.
    pub fn demo_tree() -> Tree {
        let mut tree = Tree::new();
        let Some(root) = tree.add_root("Project") else {
            return tree;
        };
        let groups: [(&str, &[&str]); 4] = [
            ("src", &["main.rs", "lib.rs", "color.rs", "symbols.rs"]),
            ("tests", &["tree_navigation_tests.rs", "tree_view_tests.rs"]),
            ("docs", &["README.md", "API.md", "CONTRIBUTING.md"]),
            ("config", &["config.json", "config.dev.json", "config.prod.json"]),
        ];
        for (group, files) in groups {
            let Some(dir) = tree.add_child(root, group) else {
                continue;
            };
            for file in files {
                tree.add_child(dir, *file);
            }
        }
        if let Some(src) = tree.find_node(|node| node.label() == "src") {
            if let Some(widgets) = tree.add_child(src, "widgets") {
                for file in ["tree_view.rs", "viewport.rs", "meter.rs", "graph.rs"] {
                    tree.add_child(widgets, file);
                }
            }
        }
        tree.set_expanded(root, true);
        tree
    }

    /// Recompute widget heights for a terminal of size `area`.
    pub fn resize(&mut self, area: Rect) {
        let layout = render::layout(area);
        self.tree_view
            .set_height(usize::from(layout.tree.height.saturating_sub(2)));
        self.info.set_height(layout.info.height);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Tree => FocusPane::Info,
            FocusPane::Info => FocusPane::Tree,
        };
    }

    /// Switch to the built-in theme after the current one. A theme loaded
    /// from a file is followed by the first built-in.
    pub fn next_theme(&mut self) {
        let themes = Theme::all();
        let next = themes
            .iter()
            .position(|t| t.name == self.theme.name)
            .map_or(0, |i| (i + 1) % themes.len());
        self.set_theme(themes[next].clone());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!("app: theme {}", theme.name);
        self.theme = theme;
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        self.tree_view.set_style(self.theme.tree_style());
        self.info.set_style(self.theme.style());
        self.info.set_title_style(self.theme.title_style());

        let gradient = self.theme.gradient.to_vec();
        for item in self.meters.items_mut() {
            item.gradient = gradient.clone();
        }
        self.meters = std::mem::take(&mut self.meters)
            .style(self.theme.dim_style())
            .label_style(self.theme.title_style());
        self.graph = std::mem::take(&mut self.graph)
            .gradient(gradient)
            .style(Style::default().bg(self.theme.bg));
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
        self.search_failed = false;
        self.search_query.clear();
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
    }

    /// Select the node whose label matches the query, revealing it.
    pub fn submit_search(&mut self) -> bool {
        let found = self.tree_view.find_and_select(&self.search_query);
        self.search_failed = !found;
        self.search_mode = false;
        if found {
            self.refresh_info();
        }
        found
    }

    /// Handle one key press. Returns whether the screen needs redrawing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }
        if self.search_mode {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('/') => {
                self.enter_search_mode();
                true
            }
            KeyCode::Tab => {
                self.toggle_focus();
                true
            }
            KeyCode::Char('t') => {
                self.next_theme();
                true
            }
            KeyCode::Char('l') => {
                let show = !self.tree_view.show_lines_enabled();
                self.tree_view.set_show_lines(show);
                true
            }
            KeyCode::Char('e') => {
                self.tree_view.expand_all();
                self.refresh_info();
                true
            }
            KeyCode::Char('c') => {
                self.tree_view.collapse_all();
                self.refresh_info();
                true
            }
            KeyCode::Char('j') => self.dispatch(KeyEvent::new(KeyCode::Down, key.modifiers)),
            KeyCode::Char('k') => self.dispatch(KeyEvent::new(KeyCode::Up, key.modifiers)),
            _ => self.dispatch(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.exit_search_mode(),
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(c) => self.search_query.push(c),
            _ => return false,
        }
        true
    }

    fn dispatch(&mut self, key: KeyEvent) -> bool {
        match self.focus {
            FocusPane::Tree => {
                let changed = self.tree_view.handle_key(key);
                if changed {
                    self.refresh_info();
                }
                changed
            }
            FocusPane::Info => self.info.handle_key(key),
        }
    }

    /// Describe the selected node in the info panel.
    pub fn refresh_info(&mut self) {
        let tree = self.tree_view.tree();
        let Some(id) = self.tree_view.selected() else {
            self.info.set_fields(vec![InfoField::new("Selected", "none")]);
            return;
        };
        let label = tree.label(id).unwrap_or_default().to_string();
        let path = tree
            .ancestors(id)
            .filter_map(|ancestor| tree.label(ancestor))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .chain(std::iter::once(label.as_str()))
            .collect::<Vec<_>>()
            .join("/");
        let fields = vec![
            InfoField::new("Label", label.clone()),
            InfoField::new("Path", path),
            InfoField::new("Depth", tree.depth(id).unwrap_or_default().to_string()),
            InfoField::new("Children", tree.children(id).len().to_string()),
            InfoField::new("Expanded", tree.is_expanded(id).to_string()),
            InfoField::new(
                "Visible row",
                tree.visible_rank(id)
                    .map_or_else(|| "-".to_string(), |rank| rank.to_string()),
            ),
            InfoField::new("Visible nodes", tree.visible_len().to_string()),
            InfoField::new("Total nodes", tree.len().to_string()),
        ];
        self.info.set_fields(fields);
    }

    /// Advance the live widgets by one frame.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        let t = self.ticks as f64 / 10.0;
        let cpu = 50.0 + 40.0 * (t * 0.7).sin() * (t * 0.13).cos();
        let memory = 60.0 + 25.0 * (t * 0.05).sin();
        let disk = 35.0 + 10.0 * (t * 0.02).cos();

        self.meters.set_value(0, cpu);
        self.meters.set_value(1, memory);
        self.meters.set_value(2, disk);
        self.graph.push(cpu, GRAPH_CAPACITY);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
