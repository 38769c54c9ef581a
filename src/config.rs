use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Everything the config file can set. Missing keys fall back to the
/// defaults, so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "no-color".
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether the ocean backdrop drifts (false freezes it).
    #[serde(default = "default_animations")]
    pub animations: bool,

    /// Key bindings: preset plus per-action overrides.
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_animations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            animations: default_animations(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load the config, writing defaults back when the file does not
    /// exist yet so users have something to edit.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw)
                .with_context(|| format!("malformed config at {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                config.save(path)?;
                Ok(config)
            }
            Err(err) => {
                Err(err).with_context(|| format!("could not read config at {}", path.display()))
            }
        }
    }

    /// Write the config as pretty TOML, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }

        let rendered = toml::to_string_pretty(self).context("could not serialize config")?;
        std::fs::write(path, rendered)
            .with_context(|| format!("could not write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert!(config.animations);
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme = "light".to_string();
        config.animations = false;
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.theme, "light");
        assert!(!loaded.animations);
    }

    #[test]
    fn test_missing_file_gets_defaults_written() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"no-color\"\n").unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.theme, "no-color");
        assert!(config.animations);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = [not toml").unwrap();

        assert!(Config::load_or_create(&config_path).is_err());
    }
}
