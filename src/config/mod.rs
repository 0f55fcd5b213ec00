//
//  floe-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Management
//!
//! Loads and persists the CLI's configuration: the API endpoint and the
//! access token. Configuration lives in a TOML file under the
//! platform-specific config directory and can be overridden per invocation
//! by environment variables or flags:
//!
//! | Setting | File key | Environment | Flag |
//! |---------|----------|-------------|------|
//! | API endpoint | `core.api_url` | `FLOE_API_URL` | `--url` |
//! | Access token | `core.access_token` | `FLOE_ACCESS_TOKEN` | `--access-token` |
//!
//! Token acquisition is out of scope: the token is created in the platform's
//! web UI and pasted into `floe config set access_token <token>` or exported
//! in the environment.

mod file;

pub use file::{config_exists, read_config_file, write_config_file};

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default API endpoint used when nothing is configured.
pub const DEFAULT_API_URL: &str = "https://api.floe.io";

/// The CLI's persisted configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The `[core]` table.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Base URL of the Floe API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Personal access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Config {
    /// Returns the path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "floe", "floe")
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration, returning defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !config_exists(&path) {
            return Ok(Self::default());
        }
        let content = read_config_file(&path)?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Persists the configuration.
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(&Self::path()?, &content)
    }

    /// Returns the effective API URL: environment, then file, then default.
    pub fn api_url(&self) -> String {
        std::env::var("FLOE_API_URL")
            .ok()
            .or_else(|| self.core.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the effective access token: environment, then file.
    pub fn access_token(&self) -> Option<String> {
        std::env::var("FLOE_ACCESS_TOKEN")
            .ok()
            .or_else(|| self.core.access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config {
            core: CoreConfig {
                api_url: Some("https://floe.example.com/api".to_string()),
                access_token: Some("tok".to_string()),
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.core.api_url.as_deref(), Some("https://floe.example.com/api"));
        assert_eq!(parsed.core.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.core.api_url.is_none());
        assert!(parsed.core.access_token.is_none());
    }
}
