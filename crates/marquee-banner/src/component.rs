//! Leptos component for the featured banner.

use std::time::Duration;

use leptos::prelude::*;
use marquee_catalog::{Movie, MovieId};
use marquee_motion::{Presence, PresenceChange};

use crate::config::BannerConfig;
use crate::html::{block_style, stage_style};
use crate::icons::Icon;
use crate::style;
use crate::view::{Action, ActionKind, Badge, BadgeKind, BannerView, Block, MetaEntry, MetaField};

/// Full-width hero banner for the featured movie.
///
/// The visual is keyed by movie id: when the id changes, the old visual
/// plays its exit before the new one mounts. Changes that keep the id
/// update in place. Any click inside the banner, the buttons included,
/// fires `on_click` with the current movie.
#[component]
pub fn Banner(
    /// Featured movie.
    #[prop(into)]
    movie: Signal<Movie>,
    /// Fired on any click inside the banner.
    #[prop(into)]
    on_click: Callback<Movie>,
    /// Play action; not yet bound to a control.
    #[prop(into)]
    on_play: Callback<Movie>,
    /// Labels and timing.
    #[prop(optional)]
    config: BannerConfig,
) -> impl IntoView {
    // Not bound to the play button yet; clicks on it reach `on_click`.
    let _ = on_play;

    let config = StoredValue::new(config);
    let presence = RwSignal::new({
        let initial = movie.get_untracked();
        Presence::<MovieId, Movie>::new(initial.id.clone(), initial)
    });

    let generation = Memo::new(move |_| presence.with(|p| p.generation()));
    let phase = Memo::new(move |_| presence.with(|p| p.visible().phase));
    let view_model = Memo::new(move |_| {
        presence.with(|p| {
            let visible = p.visible();
            config.with_value(|c| BannerView::from_movie(visible.value, c))
        })
    });

    Effect::new(move |_| {
        let next = movie.get();
        let offered = presence.try_update(|p| config.with_value(|c| offer(p, next, c)));
        if let Some(Offer {
            finish_exit_in: Some(delay),
            ..
        }) = offered
        {
            set_timeout(
                move || {
                    presence.update(|p| {
                        p.finish_exit();
                    });
                },
                delay,
            );
        }
    });

    Effect::new(move |_| {
        let mounted = generation.get();
        let entrance = config.with_value(entrance_duration);
        set_timeout(
            move || {
                presence.update(|p| {
                    settle(p, mounted);
                });
            },
            entrance,
        );
    });

    let root_style = config.with_value(|c| style::root_style(&c.max_height));
    let movie_id = move || view_model.with(|v| v.key.to_string());

    // Rebuilt only when a new key mounts.
    let stage = move || {
        let mounted = generation.get();
        let key = view_model.with_untracked(|v| v.key.to_string());
        let animation = move |block: Block| config.with_value(|c| block_style(c, block));

        view! {
            <div
                class=style::STAGE
                data-key=key
                data-generation=mounted.to_string()
                data-phase=move || phase.get().as_str()
                style=move || config.with_value(|c| stage_style(c, phase.get()))
            >
                <div class=style::BACKDROP>
                    <img
                        src=move || view_model.with(|v| v.image_src.clone())
                        alt=move || view_model.with(|v| v.image_alt.clone())
                        class=style::IMAGE
                        style=style::IMAGE_STYLE
                    />
                    <div class=style::GRADIENT_TOP></div>
                    <div class=style::GRADIENT_BOTTOM></div>
                    <div class=style::GRADIENT_LEFT></div>
                </div>
                <div class=style::CONTENT>
                    <div class=style::CONTENT_INNER>
                        <div class=style::BADGE_ROW data-block="badges" style=animation(Block::Badges)>
                            {move || view_model.with(|v| v.badges.clone()).into_iter().map(badge).collect_view()}
                        </div>
                        <h1 class=style::TITLE data-block="title" style=animation(Block::Title)>
                            {move || view_model.with(|v| v.title.clone())}
                        </h1>
                        <div class=style::META_ROW data-block="metadata" style=animation(Block::Metadata)>
                            {move || view_model.with(|v| v.metadata.clone()).into_iter().map(meta_entry).collect_view()}
                        </div>
                        {move || {
                            view_model.with(|v| v.description.clone()).map(|description| {
                                view! {
                                    <p
                                        class=style::DESCRIPTION
                                        data-block="description"
                                        style=animation(Block::Description)
                                    >
                                        {description}
                                    </p>
                                }
                            })
                        }}
                        <div class=style::ACTIONS data-block="actions" style=animation(Block::Actions)>
                            {move || view_model.with(|v| v.actions.clone()).into_iter().map(action).collect_view()}
                        </div>
                    </div>
                </div>
                <div class=style::VIGNETTE></div>
            </div>
        }
    };

    view! {
        <div
            class=style::ROOT
            style=root_style
            data-section="banner"
            data-movie-id=movie_id
            on:click=move |_| activate(movie, on_click)
        >
            {stage}
        </div>
    }
}

/// Outcome of handing the latest movie to the keyed presence.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Offer {
    change: PresenceChange,
    /// Delay after which `finish_exit` must run, when an exit started.
    finish_exit_in: Option<Duration>,
}

fn offer(presence: &mut Presence<MovieId, Movie>, next: Movie, config: &BannerConfig) -> Offer {
    let change = presence.update(next.id.clone(), next);
    let finish_exit_in = (change == PresenceChange::ExitStarted)
        .then(|| config.crossfade_motion().exit_duration());
    Offer {
        change,
        finish_exit_in,
    }
}

/// Time from mount until the entrance is over.
fn entrance_duration(config: &BannerConfig) -> Duration {
    config.crossfade_motion().transition.total()
}

/// End the entrance of generation `mounted`; timers of earlier mounts are
/// ignored.
fn settle(presence: &mut Presence<MovieId, Movie>, mounted: u64) -> PresenceChange {
    if presence.generation() != mounted {
        return PresenceChange::Unchanged;
    }
    presence.finish_enter()
}

/// Hand the movie on screen to the host.
fn activate(movie: Signal<Movie>, on_click: Callback<Movie>) {
    let current = movie.get_untracked();
    tracing::debug!(movie_id = %current.id, "banner activated");
    on_click.run(current);
}

fn glyph(svg: String) -> impl IntoView {
    view! { <span class="contents" inner_html=svg></span> }
}

fn badge(badge: Badge) -> impl IntoView {
    let class = match badge.kind {
        BadgeKind::Trending => style::BADGE_TRENDING,
        BadgeKind::Category => style::BADGE_CATEGORY,
        BadgeKind::Quality => style::BADGE_QUALITY,
    };
    view! {
        <span class=class data-badge=badge.kind.as_str()>
            {badge.label}
        </span>
    }
}

fn meta_entry(entry: MetaEntry) -> AnyView {
    match entry {
        MetaEntry::Separator => {
            view! { <span class=style::META_SEPARATOR data-meta="separator"></span> }.into_any()
        }
        MetaEntry::Item {
            field: MetaField::Year,
            text,
        } => view! { <span data-meta="year">{text}</span> }.into_any(),
        MetaEntry::Item {
            field: MetaField::Rating,
            text,
        } => view! {
            <div class=style::META_ITEM data-meta="rating">
                {glyph(Icon::Star.svg(12, Some(style::GOLD), style::ICON_STAR))}
                <span class=style::META_RATING_TEXT>{text}</span>
            </div>
        }
        .into_any(),
        MetaEntry::Item {
            field: MetaField::Duration,
            text,
        } => view! {
            <div class=style::META_ITEM data-meta="duration">
                {glyph(Icon::Clock.svg(10, None, style::ICON_CLOCK))}
                <span>{text}</span>
            </div>
        }
        .into_any(),
        MetaEntry::Item {
            field: MetaField::AudioLanguage,
            text,
        } => view! {
            <div class=style::META_ITEM data-meta="audio-language">
                {glyph(Icon::Monitor.svg(10, None, style::ICON_MONITOR))}
                <span class=style::META_AUDIO_TEXT>{text}</span>
            </div>
        }
        .into_any(),
    }
}

fn action(action: Action) -> AnyView {
    match action.kind {
        ActionKind::Play => view! {
            <button type="button" class=style::PLAY_BUTTON data-action="play">
                <div class=style::PLAY_SWEEP></div>
                {glyph(Icon::Play.svg(15, Some("black"), style::ICON_PLAY))}
                <span class=style::PLAY_LABEL>{action.label}</span>
            </button>
        }
        .into_any(),
        ActionKind::MoreInfo => view! {
            <button type="button" class=style::INFO_BUTTON data-action="more-info">
                {glyph(Icon::Info.svg(13, None, ""))}
                <span>{action.label}</span>
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use marquee_motion::PresencePhase;

    use super::*;

    fn render(movie: Movie) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <Banner
                    movie=Signal::stored(movie)
                    on_click=Callback::new(|_movie: Movie| {})
                    on_play=Callback::new(|_movie: Movie| {})
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_component_renders_scenario() {
        let html = render(
            Movie::new("m1", "Test Film", "a.jpg", "Action")
                .with_rating("8.5")
                .with_year("2023"),
        );

        assert!(html.contains(r#"data-movie-id="m1""#));
        assert!(html.contains(r#"data-generation="1""#));
        assert!(html.contains("Test Film"));
        assert!(html.contains(r#"src="a.jpg""#));
        assert!(html.contains(r#"data-meta="rating""#));
        assert_eq!(html.matches(r#"data-meta="separator""#).count(), 1);
        assert!(!html.contains(r#"data-badge="quality""#));
        assert!(!html.contains(r#"data-block="description""#));
        assert!(html.contains("PLAY NOW"));
        assert!(html.contains("marquee-stage-in 700ms"));
    }

    #[test]
    fn test_component_prefers_detail_banner() {
        let html = render(
            Movie::new("m1", "Test Film", "a.jpg", "Action")
                .with_detail_banner("b.jpg")
                .with_description("Plot."),
        );
        assert!(html.contains(r#"src="b.jpg""#));
        assert!(html.contains(r#"data-block="description""#));
    }

    #[test]
    fn test_activation_delivers_current_movie_once() {
        let owner = Owner::new();
        owner.with(|| {
            let received = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&received);
            let on_click = Callback::new(move |movie: Movie| sink.lock().unwrap().push(movie));
            let movie = Movie::new("m1", "Test Film", "a.jpg", "Action").with_year("2023");

            activate(Signal::stored(movie.clone()), on_click);

            assert_eq!(*received.lock().unwrap(), vec![movie]);
        });
    }

    fn featured(id: &str, title: &str) -> Movie {
        Movie::new(id, title, "a.jpg", "Action")
    }

    fn settled(movie: Movie) -> Presence<MovieId, Movie> {
        let mut presence = Presence::new(movie.id.clone(), movie);
        presence.finish_enter();
        presence
    }

    #[test]
    fn test_new_id_exits_before_remount() {
        let config = BannerConfig::default();
        let mut presence = settled(featured("m1", "First"));

        let offered = offer(&mut presence, featured("m2", "Second"), &config);
        assert_eq!(offered.change, PresenceChange::ExitStarted);
        assert_eq!(offered.finish_exit_in, Some(Duration::from_millis(700)));

        let visible = presence.visible();
        assert_eq!(visible.key.as_str(), "m1");
        assert_eq!(visible.phase, PresencePhase::Exiting);
        assert_eq!(presence.generation(), 1);

        assert_eq!(presence.finish_exit(), PresenceChange::Mounted);
        assert_eq!(presence.generation(), 2);
        assert_eq!(presence.visible().value.title, "Second");
        assert_eq!(presence.visible().phase, PresencePhase::Entering);
    }

    #[test]
    fn test_same_id_edit_updates_without_timer() {
        let config = BannerConfig::default();
        let mut presence = settled(featured("m1", "First"));

        let offered = offer(&mut presence, featured("m1", "First (restored)"), &config);
        assert_eq!(
            offered,
            Offer {
                change: PresenceChange::Updated,
                finish_exit_in: None,
            }
        );
        assert_eq!(presence.generation(), 1);
        assert_eq!(presence.visible().phase, PresencePhase::Present);
        assert_eq!(presence.visible().value.title, "First (restored)");
    }

    #[test]
    fn test_offers_during_exit_only_queue() {
        let config = BannerConfig::default();
        let mut presence = settled(featured("m1", "First"));
        offer(&mut presence, featured("m2", "Second"), &config);

        let offered = offer(&mut presence, featured("m3", "Third"), &config);
        assert_eq!(offered.change, PresenceChange::Queued);
        assert_eq!(offered.finish_exit_in, None);

        presence.finish_exit();
        assert_eq!(presence.visible().key.as_str(), "m3");
    }

    #[test]
    fn test_stale_entrance_timer_is_ignored() {
        let config = BannerConfig::default();
        let mut presence = Presence::new(MovieId::new("m1"), featured("m1", "First"));
        offer(&mut presence, featured("m2", "Second"), &config);
        presence.finish_exit();

        assert_eq!(settle(&mut presence, 1), PresenceChange::Unchanged);
        assert_eq!(presence.visible().phase, PresencePhase::Entering);
        assert_eq!(settle(&mut presence, 2), PresenceChange::Settled);
        assert_eq!(presence.visible().phase, PresencePhase::Present);
    }

    #[test]
    fn test_entrance_duration_follows_crossfade() {
        let config = BannerConfig::default().with_crossfade_duration(Duration::from_millis(400));
        assert_eq!(entrance_duration(&config), Duration::from_millis(400));
    }

    #[test]
    fn test_buttons_render_without_handlers() {
        let html = render(featured("m1", "First"));

        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches(r#"<button type="button""#).count(), 2);
        assert!(html.contains(r#"data-action="play""#));
        assert!(html.contains(r#"data-action="more-info""#));
        assert!(!html.contains("onclick"));
    }
}
