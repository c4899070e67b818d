use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration, persisted as `config.toml` in the config directory.
///
/// Every field has a default so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blinks per page in `blink list`.
    pub blink_page_size: usize,
    /// Items per page in `commerce list`.
    pub commerce_page_size: usize,
    /// Quiet window before a typed search term is applied, in milliseconds.
    pub search_debounce_ms: u64,
    /// Artificial latency for the demo data source, in milliseconds.
    pub mock_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blink_page_size: 3,
            commerce_page_size: 4,
            search_debounce_ms: 300,
            mock_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config at {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.blink_page_size, 3);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "blink_page_size = 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.blink_page_size, 10);
        assert_eq!(config.commerce_page_size, 4);
    }

    #[test]
    fn test_round_trips_through_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.mock_latency_ms = 50;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.mock_latency_ms, 50);
    }
}
