//! CLI argument definitions using clap
//!
//! Commands:
//! - product-catalog serve [--config <path>] [--port <port>]
//! - product-catalog init [--config <path>] [--force]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product catalog HTTP API
#[derive(Parser, Debug)]
#[command(name = "product-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to configuration file (defaults are used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the sample catalog to the configured data file
    Init {
        /// Path to configuration file (defaults are used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
