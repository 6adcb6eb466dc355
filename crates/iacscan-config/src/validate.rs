use crate::config::Config;
use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;

const MAX_TIMEOUT_SECS: u64 = 86_400;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.scanner.executable.trim().is_empty() {
        bail!("Invalid config field 'scanner.executable': must not be empty");
    }

    if let Some(secs) = config.scanner.timeout_secs {
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            bail!("Invalid config field 'scanner.timeout_secs': must be between 1 and 86400");
        }
    }

    if config.output.artifacts_dir.as_os_str().is_empty() {
        bail!("Invalid config field 'output.artifacts_dir': must not be empty");
    }

    if config.targets.is_empty() {
        bail!("Invalid config field 'targets': at least one target is required");
    }

    // Prefixes become file names inside the artifacts directory.
    let prefix_re = Regex::new(r"^[A-Za-z0-9._-]+$")?;
    let mut seen = HashSet::new();
    for target in &config.targets {
        if !prefix_re.is_match(&target.prefix) || target.prefix == "." || target.prefix == ".." {
            bail!(
                "Invalid config field 'prefix' for target {:?}: '{}'. Use letters, digits, '.', '_' or '-'",
                target.directory,
                target.prefix
            );
        }
        if !seen.insert(target.prefix.as_str()) {
            bail!(
                "Duplicate target prefix '{}': report files would collide",
                target.prefix
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TargetConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let mut config = Config::default();
        config.targets.push(TargetConfig::new("other", "fixed"));

        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Duplicate target prefix 'fixed'"));
    }

    #[test]
    fn test_prefix_with_separator_rejected() {
        let mut config = Config::default();
        config.targets = vec![TargetConfig::new("examples", "../escape")];

        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid config field 'prefix'"));
    }

    #[test]
    fn test_invalid_bounds() {
        let mut config = Config::default();

        config.scanner.timeout_secs = Some(0);
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be between 1 and 86400"));

        config.scanner.timeout_secs = Some(120);
        assert!(validate_config(&config).is_ok());

        config.targets.clear();
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one target"));
    }

    #[test]
    fn test_empty_executable_rejected() {
        let mut config = Config::default();
        config.scanner.executable = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
