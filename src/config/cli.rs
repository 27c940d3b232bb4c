use crate::config::Settings;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kloni")]
#[command(about = "Search marketplace listings by SKU and clone them under new titles")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the listing API (overrides API_URL)")]
    pub api_url: Option<String>,

    #[arg(long, help = "Bearer token to use instead of the identity provider")]
    pub token: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every listing that carries the SKU
    Search {
        sku: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Create one new listing per title, copying price and SKU from ROOT_ID
    Clone {
        root_id: String,

        #[arg(long)]
        sku: String,

        #[arg(long = "title", required = true, num_args = 1)]
        titles: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl CliConfig {
    /// Flags take precedence over everything loaded before them.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api_url = url.clone();
        }
        if let Some(token) = &self.token {
            settings.auth.access_token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
    }
}
