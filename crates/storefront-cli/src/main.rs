//! Storefront - a terminal front end for the storefront account screens.
//!
//! Renders the home screen's bottom navigation and the user screen, where
//! you can sign up, log in, log out, change your password or delete your
//! account.

mod app;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState};
use input::Prompter;
use render::render;
use storefront_core::Config;

/// Log file name prefix inside the data directory's `logs/` folder
const LOG_FILE_PREFIX: &str = "storefront";

/// Initialize the tracing subscriber, writing to a daily log file so the
/// prompt stays clean. Returns the guard that flushes the writer on drop.
fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();
    Some(guard)
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logs sit next to the account data
    let _guard = config
        .data_dir()
        .ok()
        .and_then(|dir| init_tracing(&dir.join("logs")));
    info!("Storefront starting");
    if let Err(ref e) = loaded {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    let mut app = App::new(config)?;

    let args: Vec<String> = std::env::args().collect();
    if let Some(message) = run_command(&mut app, &args)? {
        println!("{}", message);
        return Ok(());
    }

    let stdin = io::stdin();
    let hide_secrets = stdin.is_terminal();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), hide_secrets);

    run_app(&mut app, &mut prompter)?;

    info!("Storefront shutting down");
    Ok(())
}

/// Handle a one-shot command line flag. Returns the message to print, or
/// `None` when the interactive app should start.
fn run_command(app: &mut App, args: &[String]) -> Result<Option<String>> {
    match args.get(1).map(String::as_str) {
        Some("--reset") => {
            app.service.log_out()?;
            Ok(Some("Session cleared.".to_string()))
        }
        _ => Ok(None),
    }
}

fn run_app<R: BufRead, W: Write>(app: &mut App, prompter: &mut Prompter<R, W>) -> Result<()> {
    loop {
        let screen = render(app);
        prompter.say(&screen)?;

        let Some(line) = prompter.line("> ")? else {
            return Ok(());
        };
        app.handle_line(&line, prompter)?;

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
