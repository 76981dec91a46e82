//! Server-side HTML rendering of the banner.

use marquee_catalog::Movie;
use marquee_motion::PresencePhase;

use crate::config::BannerConfig;
use crate::icons::Icon;
use crate::style;
use crate::view::{
    Action, ActionKind, Badge, BadgeKind, BannerView, Block, MetaEntry, MetaField, STAGE_ENTER,
    STAGE_EXIT,
};

/// Render the banner for `movie` as an HTML fragment.
///
/// The keyed visual is emitted in its entering phase; absent optional
/// fields produce no markup at all.
pub fn render_banner(movie: &Movie, config: &BannerConfig) -> String {
    let view = BannerView::from_movie(movie, config);
    render_view(&view, config, PresencePhase::Entering)
}

/// Render a prepared view in the given presence phase.
pub fn render_view(view: &BannerView, config: &BannerConfig, phase: PresencePhase) -> String {
    let blocks: String = view
        .blocks()
        .map(|block| render_block(view, config, block))
        .collect();

    format!(
        r#"<div class="{root}" style="{root_style}" data-section="banner" data-movie-id="{key}">
    <div class="{stage}" data-key="{key}" data-phase="{phase}" style="{stage_style}">
        <div class="{backdrop}">
            <img src="{src}" alt="{alt}" class="{image}" style="{image_style}">
            <div class="{top}"></div>
            <div class="{bottom}"></div>
            <div class="{left}"></div>
        </div>
        <div class="{content}">
            <div class="{inner}">
{blocks}            </div>
        </div>
        <div class="{vignette}"></div>
    </div>
</div>"#,
        root = style::ROOT,
        root_style = escape_html(&style::root_style(&config.max_height)),
        key = escape_html(view.key.as_str()),
        stage = style::STAGE,
        phase = phase.as_str(),
        stage_style = stage_style(config, phase),
        backdrop = style::BACKDROP,
        src = escape_html(&view.image_src),
        alt = escape_html(&view.image_alt),
        image = style::IMAGE,
        image_style = style::IMAGE_STYLE,
        top = style::GRADIENT_TOP,
        bottom = style::GRADIENT_BOTTOM,
        left = style::GRADIENT_LEFT,
        content = style::CONTENT,
        inner = style::CONTENT_INNER,
        blocks = blocks,
        vignette = style::VIGNETTE,
    )
}

/// CSS keyframes for the crossfade and every content block.
pub fn render_banner_styles(config: &BannerConfig) -> String {
    let crossfade = config.crossfade_motion();
    let mut css = String::new();

    css.push_str(&crossfade.enter_keyframes(STAGE_ENTER));
    css.push('\n');
    if let Some(exit) = crossfade.exit_keyframes(STAGE_EXIT) {
        css.push_str(&exit);
        css.push('\n');
    }
    for block in Block::ALL {
        css.push_str(
            &config
                .block_motion(block)
                .enter_keyframes(&block.keyframes_name()),
        );
        css.push('\n');
    }
    css
}

/// `animation` declaration of the keyed visual in `phase`.
pub(crate) fn stage_style(config: &BannerConfig, phase: PresencePhase) -> String {
    let crossfade = config.crossfade_motion();
    let animation = match phase {
        PresencePhase::Exiting => crossfade
            .exit_animation(STAGE_EXIT)
            .unwrap_or_else(|| "none".to_string()),
        PresencePhase::Entering | PresencePhase::Present => crossfade.enter_animation(STAGE_ENTER),
    };
    format!("animation: {}", animation)
}

/// `animation` declaration of a content block.
pub(crate) fn block_style(config: &BannerConfig, block: Block) -> String {
    format!(
        "animation: {}",
        config
            .block_motion(block)
            .enter_animation(&block.keyframes_name())
    )
}

fn render_block(view: &BannerView, config: &BannerConfig, block: Block) -> String {
    let animation = block_style(config, block);
    let indent = "                ";
    match block {
        Block::Badges => {
            let badges: String = view.badges.iter().map(render_badge).collect();
            format!(
                "{indent}<div class=\"{}\" data-block=\"badges\" style=\"{}\">{}</div>\n",
                style::BADGE_ROW,
                animation,
                badges
            )
        }
        Block::Title => format!(
            "{indent}<h1 class=\"{}\" data-block=\"title\" style=\"{}\">{}</h1>\n",
            style::TITLE,
            animation,
            escape_html(&view.title)
        ),
        Block::Metadata => {
            let entries: String = view.metadata.iter().map(render_meta_entry).collect();
            format!(
                "{indent}<div class=\"{}\" data-block=\"metadata\" style=\"{}\">{}</div>\n",
                style::META_ROW,
                animation,
                entries
            )
        }
        Block::Description => match &view.description {
            Some(description) => format!(
                "{indent}<p class=\"{}\" data-block=\"description\" style=\"{}\">{}</p>\n",
                style::DESCRIPTION,
                animation,
                escape_html(description)
            ),
            None => String::new(),
        },
        Block::Actions => {
            let actions: String = view.actions.iter().map(render_action).collect();
            format!(
                "{indent}<div class=\"{}\" data-block=\"actions\" style=\"{}\">{}</div>\n",
                style::ACTIONS,
                animation,
                actions
            )
        }
    }
}

fn render_badge(badge: &Badge) -> String {
    let class = match badge.kind {
        BadgeKind::Trending => style::BADGE_TRENDING,
        BadgeKind::Category => style::BADGE_CATEGORY,
        BadgeKind::Quality => style::BADGE_QUALITY,
    };
    format!(
        r#"<span class="{}" data-badge="{}">{}</span>"#,
        class,
        badge.kind.as_str(),
        escape_html(&badge.label)
    )
}

fn render_meta_entry(entry: &MetaEntry) -> String {
    match entry {
        MetaEntry::Separator => format!(
            r#"<span class="{}" data-meta="separator"></span>"#,
            style::META_SEPARATOR
        ),
        MetaEntry::Item { field, text } => {
            let text = escape_html(text);
            match field {
                MetaField::Year => format!(r#"<span data-meta="year">{}</span>"#, text),
                MetaField::Rating => format!(
                    r#"<div class="{}" data-meta="rating">{}<span class="{}">{}</span></div>"#,
                    style::META_ITEM,
                    Icon::Star.svg(12, Some(style::GOLD), style::ICON_STAR),
                    style::META_RATING_TEXT,
                    text
                ),
                MetaField::Duration => format!(
                    r#"<div class="{}" data-meta="duration">{}<span>{}</span></div>"#,
                    style::META_ITEM,
                    Icon::Clock.svg(10, None, style::ICON_CLOCK),
                    text
                ),
                MetaField::AudioLanguage => format!(
                    r#"<div class="{}" data-meta="audio-language">{}<span class="{}">{}</span></div>"#,
                    style::META_ITEM,
                    Icon::Monitor.svg(10, None, style::ICON_MONITOR),
                    style::META_AUDIO_TEXT,
                    text
                ),
            }
        }
    }
}

fn render_action(action: &Action) -> String {
    let label = escape_html(&action.label);
    match action.kind {
        ActionKind::Play => format!(
            r#"<button type="button" class="{}" data-action="play"><div class="{}"></div>{}<span class="{}">{}</span></button>"#,
            style::PLAY_BUTTON,
            style::PLAY_SWEEP,
            Icon::Play.svg(15, Some("black"), style::ICON_PLAY),
            style::PLAY_LABEL,
            label
        ),
        ActionKind::MoreInfo => format!(
            r#"<button type="button" class="{}" data-action="more-info">{}<span>{}</span></button>"#,
            style::INFO_BUTTON,
            Icon::Info.svg(13, None, ""),
            label
        ),
    }
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
