//
//  shopsavvy
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration for the `shopsavvy` command-line tool. The SDK itself never
//! reads files or the environment; this module exists so the CLI can remember
//! an API key and connection settings between runs.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/shopsavvy/config.toml`
//! - **macOS**: `~/Library/Application Support/com.shopsavvy.shopsavvy/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\shopsavvy\shopsavvy\config\config.toml`
//!
//! The location can be overridden with `--config` or `SHOPSAVVY_CONFIG`.
//!
//! ## Example Configuration File
//!
//! ```toml
//! api_key = "ss_live_abc123"
//! base_url = "https://api.shopsavvy.com/v1"
//! timeout_secs = 30
//! ```
//!
//! ## Precedence
//!
//! Command-line flags and environment variables win over the file; the file
//! wins over the SDK defaults.

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::{validate_api_key, ClientOptions};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 3] = ["api_key", "base_url", "timeout_secs"];

/// Persistent CLI settings.
///
/// All fields are optional; anything missing falls back to the SDK default.
///
/// # Examples
///
/// ```rust
/// use shopsavvy::config::Config;
///
/// let mut config = Config::default();
/// config.set("timeout_secs", "10").unwrap();
/// assert_eq!(config.get("timeout_secs"), Some("10".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API key used when `--api-key` / `SHOPSAVVY_API_KEY` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout override, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the configuration from a specific file.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the default configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "shopsavvy", "shopsavvy")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a value by key. Unknown or unset keys return `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_key" => self.api_key.clone(),
            "base_url" => self.base_url.clone(),
            "timeout_secs" => self.timeout_secs.map(|secs| secs.to_string()),
            _ => None,
        }
    }

    /// Sets a value by key after validating it.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys, malformed API keys, and timeouts that are not
    /// a positive whole number of seconds.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" => {
                validate_api_key(value)?;
                self.api_key = Some(value.to_string());
            }
            "base_url" => {
                self.base_url = Some(value.to_string());
            }
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("timeout_secs must be a whole number of seconds"))?;
                if secs == 0 {
                    bail!("timeout_secs must be greater than zero");
                }
                self.timeout_secs = Some(secs);
            }
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Converts the stored overrides into SDK client options.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
