//! CLI command definitions for the `trellis` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Starter API service with API-key authentication.
#[derive(Parser)]
#[command(name = "trellis", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (TOML). Defaults to `trellis.toml` when present.
    #[arg(long, global = true, env = "TRELLIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (-v for debug, -vv for trace). Overrides LOG_LEVEL.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on. Overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to. Overrides HOST.
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the effective settings (API keys redacted).
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
