//! Command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Publish site content to Facebook Pages and Groups.
#[derive(Parser, Debug)]
#[command(name = "autopost")]
#[command(about = "Publish site content to Facebook Pages and Groups")]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "AUTOPOST_LOG_JSON")]
    pub log_json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a content item to every enabled destination
    Publish {
        /// Path to the content item JSON file
        #[arg(long)]
        content: PathBuf,

        /// Path to the settings file (defaults to ./autopost.toml)
        #[arg(short, long, env = "AUTOPOST_CONFIG")]
        config: Option<PathBuf>,

        /// Publish even if the content type or domain is not enabled
        #[arg(long)]
        force: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Check the settings file for mistakes
    Validate {
        /// Path to the settings file (defaults to ./autopost.toml)
        #[arg(short, long, env = "AUTOPOST_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Show the message and endpoints a publish would use, without posting
    Preview {
        /// Path to the content item JSON file
        #[arg(long)]
        content: PathBuf,

        /// Path to the settings file (defaults to ./autopost.toml)
        #[arg(short, long, env = "AUTOPOST_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
