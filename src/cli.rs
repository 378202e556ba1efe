//! Command-line definition.
//!
//! Lives in the library so `xtask` can build the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Version string: crate version, git SHA (dev builds) and build date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("HEROLINE_BUILD_DATE"),
    ")"
);

/// Version string: crate version and build date.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HEROLINE_BUILD_DATE"),
    ")"
);

/// Typewriter hero banner for the terminal.
///
/// Types a phrase one character at a time, pauses, erases it and moves on to
/// the next one, forever.
#[derive(Debug, Parser)]
#[command(name = "heroline", version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the banner
    #[command(long_about = "Play the banner full-screen.

Keys: q/Esc/Ctrl-C quit, r restart from the first phrase, ? help.
With --plain, or when stdout is not a terminal, the banner is drawn on a
single line instead.")]
    Play {
        /// Draw on a single line instead of the full screen
        #[arg(long)]
        plain: bool,

        /// Color theme (crimson, classic, ocean)
        #[arg(long, value_name = "NAME")]
        theme: Option<String>,

        /// Stop after this many full cycles (single-line mode)
        #[arg(long, value_name = "N")]
        cycles: Option<usize>,
    },

    /// Print the frame sequence on a simulated clock
    Frames {
        /// Number of frame changes to print
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Ask the FAQ responder a question
    Ask {
        /// The question (quotes optional)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path
    Path,
}
