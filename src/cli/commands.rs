//! CLI arguments

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Fetch every page of a StackExchange advanced search into a file
#[derive(Parser, Debug)]
#[command(name = "sosq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Free-text search query; also names the output file
    pub query: String,

    /// StackExchange application key
    #[arg(long, env = "SOSQ_KEY", hide_env_values = true)]
    pub key: String,

    /// OAuth access token
    #[arg(long, env = "SOSQ_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Directory to write the result file to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter directive: `debug` with `--verbose`, otherwise `RUST_LOG`
    /// when set and non-empty, otherwise `info`
    pub fn log_directive(&self, rust_log: Option<&str>) -> String {
        if self.verbose {
            return "debug".to_string();
        }
        match rust_log.map(str::trim) {
            Some(filter) if !filter.is_empty() => filter.to_string(),
            _ => "info".to_string(),
        }
    }
}
