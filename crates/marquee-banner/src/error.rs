//! Error types for the banner crate.
//!
//! Rendering itself cannot fail; only loading configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a banner.
#[derive(Error, Debug)]
pub enum BannerError {
    /// Configuration values that cannot describe a valid motion.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid motion description.
    #[error("Motion error: {0}")]
    Motion(#[from] marquee_motion::MotionError),

    /// Malformed TOML configuration.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a configuration file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
