mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to load config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;

    validate_config(&config)?;

    Ok(config)
}

/// Locations checked when no explicit config path is given, in order.
const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "./sponsorskip.toml",
    "~/.config/sponsorskip/config.toml",
    "/etc/sponsorskip/config.toml",
];

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    match custom_path {
        Some(path) => load_config(path),
        None => load_first_existing(&DEFAULT_CONFIG_PATHS),
    }
}

/// Load the first candidate that exists, or the default config if none do
fn load_first_existing(candidates: &[&str]) -> Result<Config> {
    for path_str in candidates {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let url = &config.lookup.server_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("Lookup server URL must be http(s): {}", url);
    }

    if config.lookup.timeout_secs == 0 {
        anyhow::bail!("Lookup timeout cannot be 0");
    }

    if config.skip.tick_interval_ms == 0 {
        anyhow::bail!("Tick interval cannot be 0");
    }

    if config.skip.categories.is_empty() {
        tracing::warn!("No skip categories enabled; segments will never be skipped");
    }

    Ok(())
}
