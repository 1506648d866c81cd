//! CLI configuration
//!
//! Stored as TOML at `$CAMPATH_CONFIG`, falling back to
//! `<config dir>/campath/config.toml`. A missing file means defaults.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

const KEYS: [&str; 4] = ["locations_path", "segments_path", "bind_address", "format"];

/// Path of the config file
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("CAMPATH_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campath")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location records file
    pub locations_path: PathBuf,

    /// Segment records file
    pub segments_path: PathBuf,

    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Default output format
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations_path: PathBuf::from("data/campus_buildings.tsv"),
            segments_path: PathBuf::from("data/campus_paths.tsv"),
            bind_address: "127.0.0.1:4567".to_string(),
            format: "table".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, or defaults if there is none
    pub fn load() -> anyhow::Result<Self> {
        let path = config_file_path();
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Write the config file, creating its directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locations_path" => Some(self.locations_path.display().to_string()),
            "segments_path" => Some(self.segments_path.display().to_string()),
            "bind_address" => Some(self.bind_address.clone()),
            "format" => Some(self.format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "locations_path" => self.locations_path = PathBuf::from(value),
            "segments_path" => self.segments_path = PathBuf::from(value),
            "bind_address" => {
                value
                    .parse::<std::net::SocketAddr>()
                    .with_context(|| format!("Invalid bind address: {}", value))?;
                self.bind_address = value.to_string();
            }
            "format" => {
                let format: OutputFormat = value.parse()?;
                self.format = format.to_string();
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.get("bind_address").unwrap(), "127.0.0.1:4567");
        assert_eq!(config.get("format").unwrap(), "table");
        assert!(config.get("nope").is_none());
    }

    #[test]
    fn test_set_validates() {
        let mut config = Config::default();

        config.set("format", "JSON").unwrap();
        assert_eq!(config.format, "json");

        assert!(config.set("format", "xml").is_err());
        assert!(config.set("bind_address", "not an address").is_err());
        assert!(config.set("colour", "blue").is_err());

        config.set("segments_path", "/tmp/paths.tsv").unwrap();
        assert_eq!(config.segments_path, PathBuf::from("/tmp/paths.tsv"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("format = \"json\"\n").unwrap();
        assert_eq!(config.format, "json");
        assert_eq!(config.bind_address, Config::default().bind_address);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.set("locations_path", "buildings.tsv").unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
