//! # Terminal Session
//!
//! One possible shell for notez. Running `notez` opens a session: notes live
//! as long as the process does, and every line on stdin is one action
//! (`new`, `list`, `edit`, `save`, `delete`, `share`, ...). Piped input works
//! the same way, which is how the end-to-end tests drive it.
//!
//! `notez config` is the only thing that touches disk, and only the config
//! file.
//!
//! ## Module Structure
//!
//! - `setup`: clap definitions for process args and session lines
//! - `repl`: the read/parse/dispatch loop
//! - `handlers`: one arm per session command, calls the API and renders
//! - `render`: cards, full notes, messages
//! - `styles`: terminal theme

mod handlers;
mod render;
mod repl;
pub mod setup;
mod styles;

use clap::Parser;
use notez::api::{ConfigAction, NotezApi};
use notez::clipboard::{Clipboard, DisabledClipboard, SystemClipboard};
use notez::clock::SystemClock;
use notez::commands;
use notez::config::{config_dir, NotezConfig};
use notez::error::Result;
use notez::store::NoteStore;
use render::render_messages;
use repl::{run_session, SessionOptions};
use setup::{Cli, Commands};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NOTEZ_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && console::colors_enabled();
    let dir = config_dir(cli.config_dir.clone())?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&dir, key, value, use_color),
        None => handle_session(&cli, &dir, use_color),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "notez=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // Ignore a second init (only possible in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_config(
    dir: &Path,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = commands::config::run(dir, action)?;

    let mut out = io::stdout().lock();
    if show_all {
        if let Some(config) = &result.config {
            for key in notez::config::CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    writeln!(out, "{} = {}", key, value)?;
                }
            }
        }
    }
    write!(out, "{}", render_messages(&result.messages, use_color))?;
    Ok(())
}

fn handle_session(cli: &Cli, dir: &Path, use_color: bool) -> Result<()> {
    let config = NotezConfig::load(dir)?;
    info!(config_dir = %dir.display(), id_style = %config.id_style, "starting session");

    let clipboard: Box<dyn Clipboard> = if cli.no_clipboard || !config.clipboard {
        Box::new(DisabledClipboard)
    } else {
        Box::new(SystemClipboard)
    };
    let store = NoteStore::with_sources(SystemClock, config.id_style.generator());
    let mut api = NotezApi::new(store, clipboard, config.share_base_url);

    let stdin = io::stdin();
    let options = SessionOptions {
        prompt: stdin.is_terminal(),
        use_color,
    };
    let mut out = io::stdout().lock();
    run_session(&mut api, stdin.lock(), &mut out, &options)
}
