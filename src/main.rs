//! # dodo Demo Entry Point
//!
//! Interactive showcase for the `dodo` widget library.
//!
//! ## Overview
//!
//! Opens an alternate screen with a sample project tree on the left and a
//! node inspector, live meters and a CPU-style graph on the right. The tree
//! can be navigated, folded and searched; the theme can be cycled at runtime
//! and is remembered in the user config.
//!
//! ## Usage
//!
//! ```bash
//! # Default theme from ~/.config/dodo/config.json
//! dodo
//!
//! # Pick a built-in theme
//! dodo --theme nord
//!
//! # Load a theme from JSON and write debug logs
//! dodo --theme-file ./my-theme.json --log dodo.log
//!
//! # List built-in themes / export one as a starting point
//! dodo --list-themes
//! dodo --theme dracula --export-theme ./dracula.json
//! ```
//!
//! ## Key Bindings
//!
//! ### Tree (left panel)
//! - `j` / `Down`, `k` / `Up` - Move to the next / previous visible node
//! - `Left` / `Right` - Collapse or go to parent / expand or go to first child
//! - `Enter` - Toggle the selected node
//! - `Home` / `End` / `PageUp` / `PageDown` - Jump
//! - `e` / `c` - Expand / collapse everything
//! - `l` - Toggle connector lines
//!
//! ### Anywhere
//! - `/` - Find a node by exact label (Enter to jump, Esc to cancel)
//! - `Tab` - Switch focus between the tree and the info panel
//! - `t` - Next theme
//! - `q` / `Esc` / `Ctrl+c` - Quit

use dodo::ui::{self, App, Config, Theme};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn, LevelFilter};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How often the live widgets advance.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// dodo - interactive tree view and terminal widgets demo
#[derive(Parser, Debug)]
#[command(name = "dodo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive tree view and terminal widgets demo", long_about = None)]
struct Args {
    /// Built-in theme to use (case-insensitive)
    #[arg(short, long, value_name = "NAME", conflicts_with = "theme_file")]
    theme: Option<String>,

    /// Load the theme from a JSON file of hex colors
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Write the selected theme as JSON to this path and exit
    #[arg(long, value_name = "PATH")]
    export_theme: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args);

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Pick the theme: an explicit file, then an explicit name, then the config.
fn resolve_theme(args: &Args, config: &Config) -> Result<Theme> {
    if let Some(path) = &args.theme_file {
        return Theme::load_from(path)
            .with_context(|| format!("Failed to load theme file: {}", path.display()));
    }
    if let Some(name) = &args.theme {
        return match Theme::by_name(name) {
            Some(theme) => Ok(theme.clone()),
            None => bail!("Unknown theme '{}' (see --list-themes)", name),
        };
    }
    match Theme::by_name(&config.theme) {
        Some(theme) => Ok(theme.clone()),
        None => {
            warn!("config names unknown theme '{}', using default", config.theme);
            Ok(Theme::default_theme().clone())
        }
    }
}

fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let mut config = Config::load();
    let theme = resolve_theme(&args, &config)?;

    if let Some(path) = &args.export_theme {
        theme
            .save_to(path)
            .with_context(|| format!("Failed to export theme to: {}", path.display()))?;
        println!("Wrote {} to {}", theme.name, path.display());
        return Ok(());
    }

    info!("starting with theme {}", theme.name);
    let mut app = App::new(App::demo_tree(), theme, &config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    // Remember a built-in theme picked at runtime
    if args.theme_file.is_none()
        && Theme::by_name(&app.theme.name).is_some()
        && config.remember_theme(&app.theme.name)
    {
        if let Err(e) = config.save() {
            eprintln!("Warning: Failed to save config: {:#}", e);
        }
    }

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(Rect::new(0, 0, size.width, size.height));
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        handle_next_event(app, event_reader, timeout)?;

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Read at most one event and apply it to the app.
fn handle_next_event(
    app: &mut App,
    event_reader: &mut dyn EventReader,
    timeout: Duration,
) -> Result<()> {
    match event_reader.read_event(timeout)? {
        Some(Event::Key(key)) => {
            app.handle_key(key);
        }
        Some(Event::Resize(width, height)) => app.resize(Rect::new(0, 0, width, height)),
        _ => {}
    }
    Ok(())
}
