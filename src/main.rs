//! Resale TUI - terminal estimator for second-hand clothing prices
//!
//! A Ratatui-based form that asks an OpenAI-compatible completion
//! service what a garment would sell for second-hand.

mod app;
mod completion;
mod config;
mod estimator;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use completion::OpenAiClient;
use config::EstimatorConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "resale-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = EstimatorConfig::load()?;
    let settings = config.completion_settings();
    if settings.api_key.is_none() {
        warn!(
            "No API key configured; set {} or add api_key to the config file",
            config::API_KEY_ENV
        );
    }
    let client = OpenAiClient::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(client));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    info!("Exiting");
    Ok(())
}

/// Log to a file so output never lands on the alternate screen; stderr if the file can't be opened
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "resale_tui=info".into());

    let log_file = EstimatorConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::options()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling keeps the spinner moving while a request is in flight
        let poll_duration = if app.estimator.is_loading() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
            }
        }

        app.poll_completions();
        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
