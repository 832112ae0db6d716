//! barscope - a terminal bar-chart dashboard with sorting animations.

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::warn;

use barscope::core::Series;
use barscope::sort::SortKind;
use barscope::theme::Theme;
use barscope::ui::{default_legend, render, spawn_input, App, Ticker};

/// A terminal bar-chart dashboard with sorting animations.
#[derive(Parser, Debug)]
#[command(name = "barscope", version, about)]
struct Cli {
    /// Chart series as comma-separated non-negative integers; repeat the
    /// flag for more pages (built-in demo pages when absent)
    #[arg(short = 's', long = "series", value_name = "VALUES")]
    series: Vec<Series>,

    /// Animation pacing in milliseconds
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 200)]
    tick_ms: u64,

    /// Diagnostic log file
    #[arg(long = "log-file", value_name = "PATH", default_value = "barscope.log")]
    log_file: PathBuf,
}

/// RAII guard for terminal state. Restores terminal on drop (including panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run_tui(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Demo pages shown when no `--series` is given.
fn demo_series() -> Vec<Series> {
    vec![
        Series::new(vec![23, 7, 61, 14, 38, 5, 50, 29]),
        Series::new(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3]),
        Series::new(vec![90, 15, 42, 8, 77, 33]),
    ]
}

/// Run the TUI session until the user quits.
fn run_tui(cli: Cli) -> Result<()> {
    let _log_guard = barscope::logging::init(&cli.log_file)?;

    let series = if cli.series.is_empty() {
        demo_series()
    } else {
        cli.series
    };
    let mut app = App::new(series, SortKind::default(), default_legend(), Theme::default())
        .context("failed to create session")?;

    // Set panic hook to ensure terminal cleanup
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
        default_hook(info);
    }));

    // Setup terminal with RAII guard
    let _guard = TerminalGuard::new().context("failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Dimensions are captured once here and never re-queried.
    let size = terminal.size()?;
    app.start(size)?;

    run_loop(&mut terminal, &mut app, Duration::from_millis(cli.tick_ms))
}

/// The single-owner loop: drains the command channel, applies one
/// command at a time, and repaints. The input thread and the animation
/// ticker only ever produce commands, so state mutation and the repaint
/// that follows are atomic with respect to both.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let _input = spawn_input(tx.clone());
    let mut ticker: Option<Ticker> = None;

    repaint(terminal, app)?;
    app.clear_dirty();

    while let Ok(cmd) = rx.recv() {
        app.apply(cmd)?;

        // The ticker lives exactly as long as the app is animating.
        if app.is_animating() && ticker.is_none() {
            ticker = Some(Ticker::spawn(tx.clone(), tick));
        } else if !app.is_animating() && ticker.is_some() {
            ticker = None;
        }

        if app.should_quit {
            break;
        }
        if app.dirty {
            repaint(terminal, app)?;
            app.clear_dirty();
        }
    }

    Ok(())
}

/// One full-frame repaint. Sequencing misuse propagates; a transient
/// draw failure is logged and the session continues.
fn repaint<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    let snapshot = app.render_snapshot()?;
    if let Err(e) = terminal.draw(|frame| render(frame, app, &snapshot)) {
        warn!("repaint failed: {e}");
    }
    Ok(())
}
