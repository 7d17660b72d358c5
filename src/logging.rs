//! Tracing subscriber setup.
//!
//! Filter comes from `TICKETBOARD_LOG`, format from `TICKETBOARD_LOG_FORMAT`
//! (`compact` or `json`). Without a filter the TUI log file records info and
//! above, while CLI commands keep stderr to warnings.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, for plain CLI commands
    Stderr,
    /// Append to a file, for the fullscreen TUI which owns the terminal
    File(&'a Path),
}

fn env_filter(target: LogTarget<'_>) -> EnvFilter {
    EnvFilter::try_from_env("TICKETBOARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match (env::var("DEBUG").is_ok(), target) {
            (true, _) => "ticketboard=debug,info",
            (false, LogTarget::File(_)) => "ticketboard=info,warn",
            (false, LogTarget::Stderr) => "warn",
        })
    })
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_tracing(target: LogTarget<'_>) {
    let json = env::var("TICKETBOARD_LOG_FORMAT").is_ok_and(|f| f == "json");
    let registry = tracing_subscriber::registry().with(env_filter(target));

    let file = match target {
        LogTarget::Stderr => None,
        // Never fall back to stderr while the TUI owns the terminal
        LogTarget::File(path) => match open_log_file(path) {
            Some(file) => Some(file),
            None => return,
        },
    };

    // try_init: tests and repeated calls must not panic on an existing subscriber
    let _ = match (file, json) {
        (Some(file), true) => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        (Some(file), false) => registry
            .with(fmt::layer().compact().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        (None, true) => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .try_init(),
        (None, false) => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
