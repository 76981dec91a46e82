//! Banner configuration.

use std::path::Path;
use std::time::Duration;

use marquee_motion::{Ease, Motion, Stagger};
use serde::{Deserialize, Serialize};

use crate::error::BannerError;
use crate::view::Block;

/// Configuration for the featured banner.
///
/// Defaults reproduce the stock look; every field can be overridden from a
/// TOML or JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Fixed text labels.
    pub labels: Labels,
    /// Keyed crossfade of the whole visual.
    pub crossfade: CrossfadeConfig,
    /// Entrance timing of the content blocks.
    pub stagger: StaggerConfig,
    /// CSS `max-height` of the banner root.
    pub max_height: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            crossfade: CrossfadeConfig::default(),
            stagger: StaggerConfig::default(),
            max_height: "75vh".to_string(),
        }
    }
}

/// Text labels rendered unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub trending: String,
    pub play: String,
    pub more_info: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            trending: "🔥 Trending".to_string(),
            play: "PLAY NOW".to_string(),
            more_info: "More Info".to_string(),
        }
    }
}

/// Exit/enter of the keyed visual when the featured title changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    pub duration_ms: u64,
    pub enter_scale: f32,
    pub exit_scale: f32,
    pub ease: Ease,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            enter_scale: 1.05,
            exit_scale: 0.97,
            ease: Ease::EaseOut,
        }
    }
}

/// Slide-and-fade entrance of the content blocks, independent of the
/// crossfade timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    pub badges_ms: u64,
    pub title_ms: u64,
    pub metadata_ms: u64,
    pub description_ms: u64,
    pub actions_ms: u64,
    /// Slide distance of every block but the title.
    pub rise_px: f32,
    pub title_rise_px: f32,
    pub title_duration_ms: u64,
    /// Duration of blocks without their own.
    pub block_duration_ms: u64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            badges_ms: 200,
            title_ms: 300,
            metadata_ms: 400,
            description_ms: 450,
            actions_ms: 500,
            rise_px: 15.0,
            title_rise_px: 20.0,
            title_duration_ms: 500,
            block_duration_ms: 300,
        }
    }
}

impl BannerConfig {
    /// Parse from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, BannerError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BannerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            let config: Self = serde_json::from_str(&content)?;
            config.validate()?;
            config
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(path = %path.display(), "loaded banner configuration");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, BannerError> {
        toml::to_string_pretty(self).map_err(|e| BannerError::Config(e.to_string()))
    }

    pub fn with_trending_label(mut self, label: impl Into<String>) -> Self {
        self.labels.trending = label.into();
        self
    }

    pub fn with_play_label(mut self, label: impl Into<String>) -> Self {
        self.labels.play = label.into();
        self
    }

    pub fn with_more_info_label(mut self, label: impl Into<String>) -> Self {
        self.labels.more_info = label.into();
        self
    }

    pub fn with_crossfade_duration(mut self, duration: Duration) -> Self {
        self.crossfade.duration_ms = duration.as_millis() as u64;
        self
    }

    pub fn with_max_height(mut self, max_height: impl Into<String>) -> Self {
        self.max_height = max_height.into();
        self
    }

    /// Check that every motion can be rendered and blocks start in order.
    pub fn validate(&self) -> Result<(), BannerError> {
        if self.crossfade.duration_ms == 0 {
            return Err(BannerError::Config(
                "crossfade.duration_ms must be greater than zero".to_string(),
            ));
        }
        self.crossfade_motion().validate()?;
        for block in Block::ALL {
            self.block_motion(block).validate()?;
        }
        self.stagger()?;
        Ok(())
    }

    /// Motion of the keyed visual.
    pub fn crossfade_motion(&self) -> Motion {
        Motion::crossfade(self.crossfade.enter_scale, self.crossfade.exit_scale)
            .with_duration(Duration::from_millis(self.crossfade.duration_ms))
            .with_ease(self.crossfade.ease)
    }

    /// Entrance schedule of the content blocks.
    pub fn stagger(&self) -> Result<Stagger<Block>, BannerError> {
        let mut stagger = Stagger::new();
        for block in Block::ALL {
            stagger = stagger.then(block, self.block_delay(block))?;
        }
        Ok(stagger)
    }

    /// Entrance motion of one content block.
    pub fn block_motion(&self, block: Block) -> Motion {
        let s = &self.stagger;
        let (rise, duration) = match block {
            Block::Title => (s.title_rise_px, s.title_duration_ms),
            _ => (s.rise_px, s.block_duration_ms),
        };
        Motion::rise(rise)
            .with_duration(Duration::from_millis(duration))
            .with_delay(self.block_delay(block))
    }

    fn block_delay(&self, block: Block) -> Duration {
        let s = &self.stagger;
        let ms = match block {
            Block::Badges => s.badges_ms,
            Block::Title => s.title_ms,
            Block::Metadata => s.metadata_ms,
            Block::Description => s.description_ms,
            Block::Actions => s.actions_ms,
        };
        Duration::from_millis(ms)
    }
}
