mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, RunArgs};
use colored::Colorize;
use iacscan_core::EXIT_ERROR;

use std::process::exit;

use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the progress lines.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // The scanner child shares our process group and receives the same signal.
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\n{} Received Ctrl+C. Exiting...", "⚠️".yellow());
        exit(130);
    }) {
        warn!(error = %e, "Failed to install Ctrl+C handler");
    }

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    let result = match &command {
        Commands::Run(args) => commands::run::run(cli.config.as_ref(), args),
        Commands::Doctor => commands::doctor::doctor(cli.config.as_ref()).map(|_| 0),
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Check => commands::config::check(cli.config.as_ref()),
            ConfigCommand::Dump { format } => {
                commands::config::dump(cli.config.as_ref(), *format).map(|_| 0)
            }
        },
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(EXIT_ERROR);
        }
    }
}
