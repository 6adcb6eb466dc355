use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::Command;

use iacscan_config::{load_effective_config, Config};

/// Read-only environment report. Problems are printed, never returned.
pub fn doctor(config_path: Option<&PathBuf>) -> Result<()> {
    println!("{}", "iacscan Doctor \u{1FA7A}".bold().green());
    println!("{}", "--------------".dimmed());

    println!("iacscan Version: {}", env!("CARGO_PKG_VERSION").bold());
    println!("OS: {}-{}", std::env::consts::OS, std::env::consts::ARCH);

    println!();
    println!("{}", "Configuration:".bold());
    let config = match load_effective_config(config_path) {
        Ok(c) => {
            match config_path {
                Some(path) => println!("{} Loaded {:?}", "[OK]".green(), path),
                None => println!(
                    "{} Using {} (or built-in defaults)",
                    "[OK]".green(),
                    iacscan_config::DEFAULT_CONFIG_FILE
                ),
            }
            c
        }
        Err(e) => {
            println!("{} Failed to load config: {:#}", "[ERR]".red(), e);
            println!("   - Falling back to built-in defaults");
            Config::default()
        }
    };

    println!();
    println!("{}", "Scanner:".bold());
    check_scanner(&config.scanner.executable);
    match config.scanner.timeout_secs {
        Some(secs) => println!("  timeout:    {}s per invocation", secs),
        None => println!("  timeout:    {}", "(none)".dimmed()),
    }
    if !config.scanner.extra_args.is_empty() {
        println!("  extra_args: {}", config.scanner.extra_args.join(" "));
    }

    println!();
    println!("{}", "Artifacts Directory:".bold());
    let artifacts = &config.output.artifacts_dir;
    if artifacts.is_dir() {
        println!("{} Directory exists: {:?}", "[OK]".green(), artifacts);
    } else if config.output.create_artifacts_dir {
        println!(
            "{} Directory not found, will be created: {:?}",
            "[-]".dimmed(),
            artifacts
        );
    } else {
        println!(
            "{} Directory not found and create_artifacts_dir = false: {:?}",
            "[ERR]".red(),
            artifacts
        );
    }

    println!();
    println!("{}", "Targets:".bold());
    for target in &config.targets {
        if target.directory.is_dir() {
            println!(
                "{} {:?} -> {}_checkov.{{json,txt}}",
                "[OK]".green(),
                target.directory,
                target.prefix
            );
        } else {
            println!(
                "{} Directory not found: {:?} (prefix {})",
                "[ERR]".red(),
                target.directory,
                target.prefix
            );
        }
    }

    println!();
    println!("{}", "Environment Variables:".bold());
    for var in ["IACSCAN_CONFIG", "RUST_LOG"] {
        match std::env::var(var) {
            Ok(val) => println!("{}: {}", var, val),
            Err(_) => println!("{}: {}", var, "(not set)".dimmed()),
        }
    }

    Ok(())
}

fn check_scanner(executable: &str) {
    match which::which(executable) {
        Ok(path) => {
            println!("{} Found {} at {:?}", "[OK]".green(), executable, path);
            match Command::new(&path).arg("--version").output() {
                Ok(output) if output.status.success() => {
                    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    println!("   - Version: {}", version);
                }
                _ => println!("   - Version: {}", "(unavailable)".yellow()),
            }
        }
        Err(_) => {
            println!(
                "{} {} not found in PATH. Install with: pip install checkov",
                "[ERR]".red(),
                executable
            );
        }
    }
}
