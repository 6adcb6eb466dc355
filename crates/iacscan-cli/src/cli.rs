use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iacscan")]
#[command(version)]
#[command(
    about = "Run Checkov over the audit targets and capture JSON and text reports",
    long_about = None
)]
pub struct Cli {
    /// Path to config file (default: ./iacscan.toml)
    #[arg(long, short, global = true, env = "IACSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every configured target (the default)
    Run(RunArgs),
    /// Check the scanner installation and directory layout
    Doctor,
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Kill each scanner invocation after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Exit 1 if any scanner invocation exits non-zero
    #[arg(long)]
    pub fail_on_findings: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Validate the effective configuration
    Check,
    /// Print the effective configuration
    Dump {
        /// Output format (json, toml)
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}
