//! obelus: section edit overlays for a reflowable markdown view.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use obelus::{app_state, config, document, error, formats, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "obelus")]
#[command(about = "Section edit overlays for reflowable document views", long_about = None)]
struct Args {
    /// Markdown document to view
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Maximum reflow width in columns
    #[arg(long, value_name = "COLS")]
    wrap: Option<u32>,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> error::Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log_file {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(File::create(log_path)?))
            .init();
    }

    let mut cfg = config::Config::load(&args.config);

    // Override config with command line args
    if let Some(wrap) = args.wrap {
        cfg.wrap_width = wrap;
    }

    let format = formats::markdown::MarkdownFormat;
    let document = document::Document::load(&args.path, &format)?;

    if document.headings().is_empty() {
        eprintln!("No sections found in {}", args.path.display());
        return Ok(());
    }

    let state = app_state::AppState::new(document, &cfg);
    run_tui(state)
}

fn run_tui(mut app: app_state::AppState) -> error::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        let json = serde_json::to_string_pretty(&app.requested_edits())?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::PageUp => app.page_up(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
                KeyCode::Home => app.scroll_to_top(),
                KeyCode::End => app.scroll_to_bottom(),
                KeyCode::Enter | KeyCode::Char('e') => app.activate_first_visible(),
                KeyCode::Char('l') => app.toggle_listener(),
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
                MouseEventKind::ScrollUp => app.scroll_up(3),
                MouseEventKind::ScrollDown => app.scroll_down(3),
                _ => {}
            },
            // Resize reflows on the next draw.
            _ => {}
        }
    }
}
