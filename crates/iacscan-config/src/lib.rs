pub mod config;
pub mod loader;
pub mod validate;

pub use config::{default_targets, Config, OutputConfig, ScannerConfig, TargetConfig};
pub use loader::{load_config, load_effective_config, DEFAULT_CONFIG_FILE};
