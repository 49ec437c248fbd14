//! Configuration file handling for gateway-cli

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gateway origin used when nothing else is configured
pub const DEFAULT_SERVER: &str = "http://localhost:3000";
/// Node websocket identifier used when nothing else is configured
pub const DEFAULT_WEBSOCKET: &str = "ws://1.2.3.4:9944";

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default gateway URL
    pub server: Option<String>,
    /// Default node websocket identifier
    pub websocket: Option<String>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("gateway-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(
        &self,
        server: Option<&str>,
        websocket: Option<&str>,
        no_color: bool,
    ) -> MergedConfig {
        MergedConfig {
            server: server
                .map(String::from)
                .or_else(|| self.server.clone())
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            websocket: websocket
                .map(String::from)
                .or_else(|| self.websocket.clone())
                .unwrap_or_else(|| DEFAULT_WEBSOCKET.to_string()),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub server: String,
    pub websocket: String,
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_win_over_file() {
        let config = Config {
            server: Some("http://gateway.internal:3000".to_string()),
            websocket: Some("ws://10.0.0.1:9944".to_string()),
            no_color: Some(false),
        };

        let merged = config.merge_with_args(Some("http://localhost:4000"), None, true);
        assert_eq!(merged.server, "http://localhost:4000");
        assert_eq!(merged.websocket, "ws://10.0.0.1:9944");
        assert!(merged.no_color);
    }

    #[test]
    fn test_defaults_fill_the_gaps() {
        let merged = Config::default().merge_with_args(None, None, false);
        assert_eq!(merged.server, DEFAULT_SERVER);
        assert_eq!(merged.websocket, DEFAULT_WEBSOCKET);
        assert!(!merged.no_color);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "server = \"http://gateway.internal:3000\"\nwebsocket = \"ws://10.0.0.1:9944\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.as_deref(), Some("http://gateway.internal:3000"));
        assert_eq!(config.websocket.as_deref(), Some("ws://10.0.0.1:9944"));
        assert!(config.no_color.is_none());
    }
}
