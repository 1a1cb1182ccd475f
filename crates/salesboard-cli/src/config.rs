//! CLI configuration.
//!
//! Resolution order, lowest to highest: built-in defaults, the JSON file
//! passed with `--config`, the `SALESBOARD_STORE` environment variable,
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable overriding the store directory.
pub const STORE_ENV: &str = "SALESBOARD_STORE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Directory holding the loaded record set.
    pub store_dir: Option<PathBuf>,

    /// Render views for a constrained display.
    pub compact: bool,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var(STORE_ENV) {
            if !dir.is_empty() {
                config.store_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(config)
    }

    /// The configured store directory, falling back to the platform's local
    /// data directory.
    pub fn store_dir(&self) -> PathBuf {
        self.store_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("salesboard")))
            .unwrap_or_else(|| PathBuf::from(".salesboard"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"compact": true}"#).unwrap();
        assert!(config.compact);
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_explicit_store_dir_wins() {
        let config = Config {
            store_dir: Some(PathBuf::from("/tmp/sb")),
            compact: false,
        };
        assert_eq!(config.store_dir(), PathBuf::from("/tmp/sb"));
    }
}
