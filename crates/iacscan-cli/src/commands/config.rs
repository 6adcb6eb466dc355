use anyhow::Result;
use std::path::PathBuf;

use crate::cli::ConfigFormat;
use iacscan_config::load_effective_config;
use iacscan_core::{ReportPair, EXIT_OK};

/// Loading validates, so reaching the listing means the config is usable.
pub fn check(config_path: Option<&PathBuf>) -> Result<i32> {
    println!("🔍 Validating configuration...");

    let config = load_effective_config(config_path)?;
    println!("✅ Configuration is valid.");
    match config_path {
        Some(path) => println!("   - Config Path: {:?}", path),
        None => println!("   - Config Path: (default)"),
    }
    println!("   - Scanner: {}", config.scanner.executable);
    println!("   - Artifacts: {:?}", config.output.artifacts_dir);

    for target in &config.targets {
        let pair = ReportPair::for_prefix(&config.output.artifacts_dir, &target.prefix);
        println!(
            "   - {:?} -> {:?}, {:?}",
            target.directory, pair.json, pair.text
        );
    }

    Ok(EXIT_OK)
}

pub fn dump(config_path: Option<&PathBuf>, format: Option<ConfigFormat>) -> Result<()> {
    let config = load_effective_config(config_path)?;

    match format.unwrap_or(ConfigFormat::Json) {
        ConfigFormat::Json => {
            let s = serde_json::to_string_pretty(&config)?;
            println!("{s}");
        }
        ConfigFormat::Toml => {
            let s = toml::to_string_pretty(&config)?;
            println!("{s}");
        }
    }

    Ok(())
}
