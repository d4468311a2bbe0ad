use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use labref_config::ConfigOverrides;

/// How the load summary is printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Top-level CLI parser for the `labref` binary.
#[derive(Debug, Parser)]
#[command(
    name = "labref",
    version,
    about = "Load GHS statements, pictograms and the CAS catalog into a reference store"
)]
pub struct Cli {
    /// Database connection string: a file path, :memory: or a libsql:// URL
    #[arg(long, value_name = "URL")]
    pub conn: Option<String>,

    /// Auth token for a remote libSQL database
    #[arg(long, value_name = "TOKEN")]
    pub auth_token: Option<String>,

    /// Hazard/precaution statement source (URL or local path)
    #[arg(long, value_name = "URL")]
    pub hp_url: Option<String>,

    /// Pictogram source; empty uses the built-in table
    #[arg(long, value_name = "URL")]
    pub pictograms_url: Option<String>,

    /// CAS catalog source; empty uses the built-in sample
    #[arg(long, value_name = "URL")]
    pub cas_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Config file to use instead of ./labref.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create missing reference tables before loading
    #[arg(long)]
    pub init_schema: bool,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flag values that take precedence over files and environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database_url: self.conn.clone(),
            auth_token: self.auth_token.clone(),
            hp_url: self.hp_url.clone(),
            pictograms_url: self.pictograms_url.clone(),
            cas_url: self.cas_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
