//! CLI module for the product catalog
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP API
//! - init: Write the sample catalog to the JSON data file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_store, init, run, run_command, serve};
pub use config::{Config, PaginationConfig, StorageConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
