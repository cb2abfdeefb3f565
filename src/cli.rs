use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::country::PAGE_STEP;

#[derive(Debug, Parser)]
#[command(name = "country-browser", version, about = "Browse countries by region and name")]
pub struct Cli {
    /// Config file (default: <config dir>/country-browser/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the country list endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key
    #[arg(long, global = true, value_name = "NAME")]
    pub api_key_env: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive directory (default)
    Browse,
    /// Load once and print matching countries
    List {
        /// Text matched against the lower-cased form of every searchable field
        #[arg(short, long, default_value = "")]
        query: String,
        /// Region filter (substring of the region name)
        #[arg(short, long, default_value = "")]
        region: String,
        /// Number of countries to print
        #[arg(short, long, default_value_t = PAGE_STEP)]
        limit: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Load once and print the distinct regions
    Regions,
}

impl Cli {
    /// Config file to read.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the file config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(env) = &self.api_key_env {
            config.api.api_key_env = env.clone();
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Browse))
    }
}
