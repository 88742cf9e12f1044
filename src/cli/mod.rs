//
//  shopsavvy
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod offers;
mod product;
mod schedule;
mod usage;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use offers::{HistoryCommand, OffersCommand};
pub use product::{ProductCommand, SearchCommand};
pub use schedule::ScheduleCommand;
pub use usage::UsageCommand;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{ApiError, ShopSavvyClient};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// ShopSavvy CLI - Product and price data from the command line
#[derive(Parser, Debug)]
#[command(
    name = "shopsavvy",
    version,
    about = "Query the ShopSavvy Data API from the command line",
    long_about = "shopsavvy looks up products, current offers and price history,\n\
                  and manages price-monitoring schedules on your ShopSavvy account.",
    propagate_version = true,
    after_help = "Use 'shopsavvy <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API key (ss_live_... or ss_test_...)
    #[arg(long, global = true, env = "SHOPSAVVY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "SHOPSAVVY_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SHOPSAVVY_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Use a specific configuration file
    #[arg(long, global = true, env = "SHOPSAVVY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Path of the configuration file in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Loads the configuration file in effect, or defaults when it is absent.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    /// Builds an API client from flags, environment and the config file.
    ///
    /// Flags and environment variables override the file.
    pub fn client(&self) -> Result<ShopSavvyClient> {
        let config = self.load_config()?;

        let api_key = self
            .api_key
            .clone()
            .or(config.api_key.clone())
            .ok_or_else(|| {
                ApiError::Configuration(
                    "API key is required. Pass --api-key, set SHOPSAVVY_API_KEY, \
                     or run 'shopsavvy config set api_key <key>'"
                        .to_string(),
                )
            })?;

        let mut options = config.client_options();
        if let Some(base_url) = &self.base_url {
            options.base_url = Some(base_url.clone());
        }
        if let Some(secs) = self.timeout {
            options.timeout = Some(Duration::from_secs(secs));
        }

        Ok(ShopSavvyClient::with_options(api_key, options)?)
    }

    /// Output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::new(OutputFormat::Table)
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search products by keyword
    Search(SearchCommand),

    /// Look up product details by barcode, ASIN, URL, model or ShopSavvy ID
    #[command(visible_alias = "p")]
    Product(ProductCommand),

    /// Show current offers for products
    Offers(OffersCommand),

    /// Show price history for products
    History(HistoryCommand),

    /// Manage price-monitoring schedules
    Schedule(ScheduleCommand),

    /// Show API credit usage for the current period
    Usage(UsageCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_client_requires_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            config: Some(dir.path().join("config.toml")),
            ..Default::default()
        };

        let err = global.client().unwrap_err();
        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert!(matches!(api_err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config {
            api_key: Some("ss_test_fromfile".to_string()),
            base_url: Some("http://localhost:1111/v1".to_string()),
            timeout_secs: Some(5),
        }
        .save_to(&path)
        .unwrap();

        let global = GlobalOptions {
            config: Some(path),
            timeout: Some(9),
            ..Default::default()
        };
        let client = global.client().unwrap();
        assert_eq!(client.config().api_key(), "ss_test_fromfile");
        assert_eq!(client.base_url(), "http://localhost:1111/v1");
        assert_eq!(client.timeout(), Duration::from_secs(9));
    }
}
