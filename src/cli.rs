//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "itemflow",
    version,
    about = "List/detail demo over a slow in-memory backend"
)]
pub struct Cli {
    /// Config file (default: ~/.config/itemflow/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the full-load delay
    #[arg(long, value_name = "MS")]
    pub load_delay_ms: Option<u64>,

    /// Override the update delay
    #[arg(long, value_name = "MS")]
    pub update_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive shell (default)
    Repl,
    /// Load and print all items
    List,
    /// Print a single item
    Show { id: usize },
    /// Update an item and print it once refreshed
    Update { id: usize },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Repl)
    }

    /// Load the config file and apply flag overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ms) = self.load_delay_ms {
            config.timing.load_delay_ms = ms;
        }
        if let Some(ms) = self.update_delay_ms {
            config.timing.update_delay_ms = ms;
        }
    }
}
