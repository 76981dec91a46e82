//! CLI configuration.

use anyhow::{Context, Result};
use marquee_banner::BannerConfig;
use serde::{Deserialize, Serialize};

/// Default config file name.
pub const CONFIG_FILE: &str = "marquee.toml";

/// Names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["marquee.toml", ".marquee.toml", "marquee.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Banner labels and timing.
    #[serde(default)]
    pub banner: BannerConfig,

    /// Preview page settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .banner
            .validate()
            .with_context(|| format!("Invalid banner settings in {}", path))?;

        tracing::debug!(path, "loaded CLI configuration");
        Ok(config)
    }
}

/// Preview page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Interval between timeline samples.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

fn default_step_ms() -> u64 {
    100
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            step_ms: default_step_ms(),
        }
    }
}

/// Generate a default marquee.toml config file.
pub fn generate_default_config() -> String {
    r#"# Marquee banner configuration

[banner]
max_height = "75vh"

[banner.labels]
trending = "🔥 Trending"
play = "PLAY NOW"
more_info = "More Info"

[banner.crossfade]
duration_ms = 700
enter_scale = 1.05
exit_scale = 0.97
ease = "ease-out"

[banner.stagger]
badges_ms = 200
title_ms = 300
metadata_ms = 400
description_ms = 450
actions_ms = 500
rise_px = 15.0
title_rise_px = 20.0
title_duration_ms = 500
block_duration_ms = 300

[preview]
step_ms = 100
"#
    .to_string()
}
