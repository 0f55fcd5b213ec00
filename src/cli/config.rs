//
//  floe-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Configuration commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, DEFAULT_API_URL};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(KeyArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Remove a configuration value
    Unset(KeyArgs),

    /// Print the path of the configuration file
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key (api_url, access_token)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (api_url, access_token)
    pub key: String,

    /// Value to store
    pub value: String,
}

impl ConfigCommand {
    /// Executes the subcommand. Config commands never touch the network.
    pub fn run(&self, _global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => {
                let config = Config::load()?;
                match args.key.as_str() {
                    "api_url" => println!(
                        "{}",
                        config
                            .core
                            .api_url
                            .as_deref()
                            .unwrap_or(DEFAULT_API_URL)
                    ),
                    // The token itself is never echoed back.
                    "access_token" => match config.core.access_token {
                        Some(_) => println!("<set>"),
                        None => println!("<unset>"),
                    },
                    key => bail!("Unknown config key '{key}'"),
                }
            }
            ConfigSubcommand::Set(args) => {
                let mut config = Config::load()?;
                match args.key.as_str() {
                    "api_url" => config.core.api_url = Some(args.value.clone()),
                    "access_token" => config.core.access_token = Some(args.value.clone()),
                    key => bail!("Unknown config key '{key}'"),
                }
                config.save()?;
                println!("{} Saved {}", style("✓").green(), args.key);
            }
            ConfigSubcommand::Unset(args) => {
                let mut config = Config::load()?;
                match args.key.as_str() {
                    "api_url" => config.core.api_url = None,
                    "access_token" => config.core.access_token = None,
                    key => bail!("Unknown config key '{key}'"),
                }
                config.save()?;
                println!("{} Removed {}", style("✓").green(), args.key);
            }
            ConfigSubcommand::Path => {
                println!("{}", Config::path()?.display());
            }
        }
        Ok(())
    }
}
