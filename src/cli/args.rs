//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::ServerConfig;
use crate::domain::config::ClipboardBackend;

/// copier - relay clipboard writes from sockets to the desktop clipboard
#[derive(Parser, Debug)]
#[command(name = "copier")]
#[command(version)]
#[command(about = "Relay text received on a local socket into the system clipboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen for clients and copy what they send to the clipboard
    Opener {
        /// Path to the config file (defaults to <config dir>/copier/config.toml)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// List effective config values
    List,
    /// Show config file path
    Path,
}

/// Parsed opener options
#[derive(Debug, Clone)]
pub struct OpenerOptions {
    pub server: ServerConfig,
    pub clipboard: ClipboardBackend,
}

/// Valid config keys, in file order
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "network",
    "address",
    "timeout",
    "shutdown_grace",
    "clipboard",
];
