use crate::config::Config;
use crate::validate::validate_config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "iacscan.toml";

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {:?}", path))?;

    let config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse TOML config file")?;

    validate_config(&config)?;

    Ok(config)
}

/// Resolves the config to use for a run.
///
/// An explicit path must exist. Without one, `iacscan.toml` in the working
/// directory is used if present, otherwise the built-in defaults.
pub fn load_effective_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        return load_config(path);
    }

    load_config(Path::new(DEFAULT_CONFIG_FILE))
}
