//! CLI module
//!
//! Command-line interface: `sosq <QUERY> --key <KEY> --access-token <TOKEN>`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
