//! Tracing subscriber setup.
//!
//! `HEROLINE_LOG` takes an `EnvFilter` directive string and wins over the
//! `-v` count. Logs go to stderr, except while the full-screen player owns
//! the terminal: then they go to `<cache_dir>/heroline/heroline.log`.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "HEROLINE_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Log file in the cache directory (falls back to stderr if unavailable)
    File,
}

/// Default directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "heroline=warn",
        1 => "heroline=info",
        2 => "heroline=debug",
        _ => "heroline=trace",
    }
}

/// Filter from `HEROLINE_LOG`, else from the verbosity.
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Path of the log file used by [`LogTarget::File`].
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("heroline").join("heroline.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    fs::create_dir_all(path.parent()?).ok()?;
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global subscriber.
///
/// Does nothing if a subscriber is already set, so calling it twice (or
/// from tests) is harmless.
pub fn init(verbose: u8, target: LogTarget) {
    let filter = build_filter(verbose);
    let file = match target {
        LogTarget::File => open_log_file(),
        LogTarget::Stderr => None,
    };

    let result = match file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
    };
    // Already initialised: keep the existing subscriber
    let _ = result;
}
