//! CLI command implementations.

pub mod config;
pub mod inspect;
pub mod render;
pub mod timeline;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// JSON file with one movie or an array of movies.
    pub movies: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit only the banner fragments, without the page shell.
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// JSON file with one movie or an array of movies.
    pub movies: String,
}

/// Arguments for the timeline command.
#[derive(Args)]
pub struct TimelineArgs {
    /// JSON file with the movies, in the order they are featured.
    pub movies: String,

    /// Interval between samples in milliseconds (default: from config).
    #[arg(long)]
    pub step_ms: Option<u64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default marquee.toml.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
