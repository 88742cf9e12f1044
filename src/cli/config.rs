//
//  shopsavvy
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the settings file that supplies the API key, base URL
//! and timeout when they are not given on the command line.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::client::redact;
use crate::config::{config_exists, Config, CONFIG_KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Remove a configuration value
    Unset(GetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (api_key, base_url, timeout_secs)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (api_key, base_url, timeout_secs)
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let config = global.load_config()?;
        let value = display_value(&args.key, config.get(&args.key));

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = Config::load_from(&path)?;
        config.set(&args.key, &args.value)?;
        config.save_to(&path)?;

        let shown = display_value(&args.key, Some(args.value.clone())).unwrap_or_default();
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            global
                .output()
                .write_success(&format!("Set {} = {}", style(&args.key).cyan(), shown));
        }

        Ok(())
    }

    fn unset(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = Config::load_from(&path)?;
        match args.key.as_str() {
            "api_key" => config.api_key = None,
            "base_url" => config.base_url = None,
            "timeout_secs" => config.timeout_secs = None,
            _ => check_key(&args.key)?,
        }
        config.save_to(&path)?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            global
                .output()
                .write_success(&format!("Unset {}", style(&args.key).cyan()));
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let mut values = serde_json::Map::new();
            for key in CONFIG_KEYS {
                values.insert(
                    key.to_string(),
                    serde_json::json!(display_value(key, config.get(key))),
                );
            }
            println!("{}", serde_json::to_string_pretty(&values)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for key in CONFIG_KEYS {
            let value = display_value(key, config.get(key));
            println!("  {}: {}", style(key).cyan(), value.as_deref().unwrap_or("-"));
        }
        println!();

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = global.config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_exists(&config_path),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        bail!(
            "Unknown config key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }
    Ok(())
}

/// API keys are masked when printed; everything else is shown as stored.
fn display_value(key: &str, value: Option<String>) -> Option<String> {
    if key == "api_key" {
        value.map(|v| redact(&v))
    } else {
        value
    }
}
