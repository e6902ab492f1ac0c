//! Configuration for storage behavior.
//!
//! Load order: `kraken.toml` → environment variables → defaults.

use crate::error::KrakenError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "kraken.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KrakenConfig {
    pub storage: StorageConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `.kraken` graph files, relative to the config root.
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("graphs"),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl KrakenConfig {
    /// Load config from `kraken.toml` in `root`, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(root: &Path) -> Result<Self, KrakenError> {
        let path = root.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|source| KrakenError::Io {
                op: "read",
                path: path.clone(),
                source,
            })?;
            toml::from_str(&text)?
        } else {
            Self::default()
        };

        env_override("KRAKEN_STORAGE_DIR", &mut config.storage.dir);

        Ok(config)
    }

    /// Location of the graph directory for a given root.
    pub fn graph_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.storage.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KrakenConfig::default();
        assert_eq!(config.storage.dir, PathBuf::from("graphs"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[storage]
dir = "data/graphs"
"#;
        let config: KrakenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("data/graphs"));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = KrakenConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("graphs"));
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("kraken.toml"),
            r#"
[storage]
dir = "store"
"#,
        )
        .unwrap();

        let config = KrakenConfig::load(tmp.path()).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("store"));
        assert_eq!(config.graph_dir(tmp.path()), tmp.path().join("store"));
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("kraken.toml"), "[storage\ndir = ").unwrap();

        assert!(KrakenConfig::load(tmp.path()).is_err());
    }
}
