//! Presentational model derived from a movie.
//!
//! Both renderers (SSR string and Leptos component) draw from `BannerView`,
//! so fragment gating and separator placement live in one place.

use marquee_catalog::{Movie, MovieId};
use serde::Serialize;

use crate::config::BannerConfig;
use crate::icons::Icon;

/// Content blocks, in entrance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Badges,
    Title,
    Metadata,
    Description,
    Actions,
}

impl Block {
    pub const ALL: [Block; 5] = [
        Block::Badges,
        Block::Title,
        Block::Metadata,
        Block::Description,
        Block::Actions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Block::Badges => "badges",
            Block::Title => "title",
            Block::Metadata => "metadata",
            Block::Description => "description",
            Block::Actions => "actions",
        }
    }

    /// CSS keyframes name of the block's entrance.
    pub fn keyframes_name(&self) -> String {
        format!("marquee-{}-in", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Trending,
    Category,
    Quality,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Trending => "trending",
            BadgeKind::Category => "category",
            BadgeKind::Quality => "quality",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

/// Optional metadata fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaField {
    Rating,
    Year,
    Duration,
    AudioLanguage,
}

impl MetaField {
    pub const ALL: [MetaField; 4] = [
        MetaField::Rating,
        MetaField::Year,
        MetaField::Duration,
        MetaField::AudioLanguage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaField::Rating => "rating",
            MetaField::Year => "year",
            MetaField::Duration => "duration",
            MetaField::AudioLanguage => "audio-language",
        }
    }

    pub fn icon(&self) -> Option<Icon> {
        match self {
            MetaField::Rating => Some(Icon::Star),
            MetaField::Year => None,
            MetaField::Duration => Some(Icon::Clock),
            MetaField::AudioLanguage => Some(Icon::Monitor),
        }
    }

    fn value<'a>(&self, movie: &'a Movie) -> Option<&'a str> {
        match self {
            MetaField::Rating => movie.rating(),
            MetaField::Year => movie.year(),
            MetaField::Duration => movie.duration(),
            MetaField::AudioLanguage => movie.audio_language(),
        }
    }
}

/// One slot of the metadata row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetaEntry {
    Item { field: MetaField, text: String },
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Play,
    MoreInfo,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Play => "play",
            ActionKind::MoreInfo => "more-info",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ActionKind::Play => Icon::Play,
            ActionKind::MoreInfo => Icon::Info,
        }
    }
}

/// Call-to-action button. Buttons carry no handler of their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
}

/// Everything the banner draws for one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub key: MovieId,
    pub image_src: String,
    pub image_alt: String,
    pub badges: Vec<Badge>,
    pub title: String,
    pub metadata: Vec<MetaEntry>,
    pub description: Option<String>,
    pub actions: Vec<Action>,
}

impl BannerView {
    pub fn from_movie(movie: &Movie, config: &BannerConfig) -> Self {
        let mut badges = vec![
            Badge {
                kind: BadgeKind::Trending,
                label: config.labels.trending.clone(),
            },
            Badge {
                kind: BadgeKind::Category,
                label: movie.category.clone(),
            },
        ];
        if let Some(quality) = movie.video_quality() {
            badges.push(Badge {
                kind: BadgeKind::Quality,
                label: quality.to_string(),
            });
        }

        let view = Self {
            key: movie.id.clone(),
            image_src: movie.backdrop_url().to_string(),
            image_alt: movie.title.clone(),
            badges,
            title: movie.title.clone(),
            metadata: metadata_row(movie),
            description: movie.description().map(str::to_string),
            actions: vec![
                Action {
                    kind: ActionKind::Play,
                    label: config.labels.play.clone(),
                },
                Action {
                    kind: ActionKind::MoreInfo,
                    label: config.labels.more_info.clone(),
                },
            ],
        };
        tracing::debug!(
            movie_id = %view.key,
            metadata = view.metadata.len(),
            description = view.description.is_some(),
            "derived banner view"
        );
        view
    }

    /// Whether the metadata row shows `field`.
    pub fn has_meta(&self, field: MetaField) -> bool {
        self.metadata
            .iter()
            .any(|entry| matches!(entry, MetaEntry::Item { field: f, .. } if *f == field))
    }

    pub fn has_badge(&self, kind: BadgeKind) -> bool {
        self.badges.iter().any(|badge| badge.kind == kind)
    }

    /// Blocks that produce markup; the description block disappears with
    /// the description.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        Block::ALL
            .into_iter()
            .filter(|block| *block != Block::Description || self.description.is_some())
    }
}

/// Present metadata items with a separator between each neighbouring pair.
fn metadata_row(movie: &Movie) -> Vec<MetaEntry> {
    let mut row = Vec::new();
    for field in MetaField::ALL {
        let Some(text) = field.value(movie) else {
            continue;
        };
        if !row.is_empty() {
            row.push(MetaEntry::Separator);
        }
        row.push(MetaEntry::Item {
            field,
            text: text.to_string(),
        });
    }
    row
}

/// Keyframe names of the keyed visual's crossfade.
pub const STAGE_ENTER: &str = "marquee-stage-in";
pub const STAGE_EXIT: &str = "marquee-stage-out";

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Movie {
        Movie::new("m1", "Test Film", "a.jpg", "Action")
            .with_rating("8.5")
            .with_year("2023")
    }

    fn view(movie: &Movie) -> BannerView {
        BannerView::from_movie(movie, &BannerConfig::default())
    }

    fn shape(view: &BannerView) -> Vec<&str> {
        view.metadata
            .iter()
            .map(|entry| match entry {
                MetaEntry::Item { field, .. } => field.as_str(),
                MetaEntry::Separator => "|",
            })
            .collect()
    }

    #[test]
    fn test_scenario_without_detail_banner() {
        let view = view(&scenario());

        assert_eq!(view.image_src, "a.jpg");
        assert_eq!(view.image_alt, "Test Film");
        assert_eq!(shape(&view), vec!["rating", "|", "year"]);
        assert!(!view.has_badge(BadgeKind::Quality));
        assert!(!view.has_meta(MetaField::Duration));
        assert!(!view.has_meta(MetaField::AudioLanguage));
        assert_eq!(view.description, None);
    }

    #[test]
    fn test_scenario_with_detail_banner() {
        let view = view(&scenario().with_detail_banner("b.jpg"));
        assert_eq!(view.image_src, "b.jpg");
    }

    #[test]
    fn test_no_orphan_separator_when_middle_fields_missing() {
        let movie = Movie::new("m1", "T", "a.jpg", "C")
            .with_rating("9")
            .with_audio_language("English");
        assert_eq!(shape(&view(&movie)), vec!["rating", "|", "audio-language"]);
    }

    #[test]
    fn test_no_leading_separator_without_rating() {
        let movie = Movie::new("m1", "T", "a.jpg", "C")
            .with_year("1999")
            .with_duration("2h 16m");
        assert_eq!(shape(&view(&movie)), vec!["year", "|", "duration"]);
    }

    #[test]
    fn test_every_combination_places_separators_between_items() {
        for mask in 0u8..16 {
            let mut movie = Movie::new("m", "T", "a.jpg", "C");
            if mask & 1 != 0 {
                movie = movie.with_rating("8");
            }
            if mask & 2 != 0 {
                movie = movie.with_year("2020");
            }
            if mask & 4 != 0 {
                movie = movie.with_duration("1h");
            }
            if mask & 8 != 0 {
                movie = movie.with_audio_language("Hindi");
            }

            let row = view(&movie).metadata;
            let items = row
                .iter()
                .filter(|e| matches!(e, MetaEntry::Item { .. }))
                .count();
            assert_eq!(items, mask.count_ones() as usize);
            assert_eq!(row.len(), (items * 2).saturating_sub(1));
            assert!(!matches!(row.first(), Some(MetaEntry::Separator)));
            assert!(!matches!(row.last(), Some(MetaEntry::Separator)));
            assert!(row
                .windows(2)
                .all(|pair| !matches!(pair, [MetaEntry::Separator, MetaEntry::Separator])));
        }
    }

    #[test]
    fn test_badges_order() {
        let view = view(&scenario().with_video_quality("4K"));
        let kinds: Vec<BadgeKind> = view.badges.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BadgeKind::Trending, BadgeKind::Category, BadgeKind::Quality]
        );
        assert_eq!(view.badges[1].label, "Action");
        assert_eq!(view.badges[2].label, "4K");
    }

    #[test]
    fn test_actions_are_unconditional() {
        let view = view(&Movie::new("m", "T", "", ""));
        let kinds: Vec<ActionKind> = view.actions.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Play, ActionKind::MoreInfo]);
        assert_eq!(view.actions[0].label, "PLAY NOW");
    }

    #[test]
    fn test_description_block_follows_description() {
        let without: Vec<Block> = view(&scenario()).blocks().collect();
        assert!(!without.contains(&Block::Description));

        let with: Vec<Block> = view(&scenario().with_description("A story.")).blocks().collect();
        assert_eq!(with, Block::ALL.to_vec());
    }

    #[test]
    fn test_derivation_leaves_movie_untouched() {
        let movie = scenario();
        let before = movie.clone();
        let _ = view(&movie);
        assert_eq!(movie, before);
    }
}
