//! heroline binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use heroline::cli::{Cli, Commands, ConfigCommands};
use heroline::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The full-screen player owns the terminal, keep logs off it
    let target = match &cli.command {
        Commands::Play { plain: false, .. } if atty::is(atty::Stream::Stdout) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Play {
            plain,
            theme,
            cycles,
        } => commands::play::handle(config, plain, theme.as_deref(), cycles),
        Commands::Frames { count, json } => commands::frames::handle(config, count, json),
        Commands::Ask { question } => commands::ask::handle(config, &question),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Edit => commands::config::handle_edit(config),
            ConfigCommands::Init { force } => commands::config::handle_init(config, force),
            ConfigCommands::Path => commands::config::handle_path(config),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
