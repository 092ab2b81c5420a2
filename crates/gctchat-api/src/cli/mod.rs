//! CLI command definitions for the `gctchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod username;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Single-user terminal chat with a persisted username.
#[derive(Parser)]
#[command(name = "gctchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress banners, hints and confirmations. Results, chat messages and
    /// errors are still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log lines as JSON on stderr.
    #[arg(long, global = true, env = "GCTCHAT_LOG_JSON")]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "GCTCHAT_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Keep the username in memory only for this session.
        #[arg(long)]
        ephemeral: bool,
    },

    /// Show or set the persisted username.
    #[command(alias = "user")]
    Username {
        /// Output machine-readable JSON instead of styled text.
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        action: username::UsernameCommand,
    },

    /// Start the health check server.
    Serve {
        /// Port to listen on (overrides SERVER_PORT and config.toml).
        #[arg(long, short)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
