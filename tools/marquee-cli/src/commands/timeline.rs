//! Sample the keyed crossfade across a sequence of featured movies.

use std::time::Duration;

use anyhow::{bail, Result};
use marquee_catalog::{Movie, MovieId};
use marquee_motion::{Motion, Presence, PresenceChange, PresencePhase};
use serde::Serialize;

use super::TimelineArgs;
use crate::context::Context;
use crate::output::{format_millis, phase_badge};

/// One sampled frame of the keyed visual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub movie_id: String,
    pub phase: &'static str,
    /// Time since the phase started.
    pub t_ms: u128,
    pub opacity: f32,
    pub scale: f32,
}

/// Run the timeline command.
pub fn run(args: TimelineArgs, ctx: &Context) -> Result<()> {
    let step_ms = args.step_ms.unwrap_or(ctx.config.preview.step_ms);
    if step_ms == 0 {
        bail!("--step-ms must be greater than zero");
    }

    let movies = ctx.load_movies(&args.movies)?;
    let motion = ctx.config.banner.crossfade_motion();
    let samples = timeline(&movies, &motion, Duration::from_millis(step_ms));

    if ctx.output.is_json() {
        ctx.output.json(&samples);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Crossfade timeline ({} movies, every {})",
        movies.len(),
        format_millis(step_ms as u128)
    ));
    let widths = [16, 10, 8, 8, 8];
    ctx.output
        .table_row(&["MOVIE", "PHASE", "T", "OPACITY", "SCALE"], &widths);
    for sample in &samples {
        ctx.output.table_row(
            &[
                sample.movie_id.as_str(),
                phase_badge(sample.phase).as_str(),
                format_millis(sample.t_ms).as_str(),
                format!("{:.3}", sample.opacity).as_str(),
                format!("{:.3}", sample.scale).as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

/// Walk a keyed presence through `movies`, letting every exit and entrance
/// run to completion before the next movie arrives.
pub fn timeline(movies: &[Movie], motion: &Motion, step: Duration) -> Vec<Sample> {
    let mut samples = Vec::new();
    let Some((first, rest)) = movies.split_first() else {
        return samples;
    };

    let mut presence: Presence<MovieId, &Movie> = Presence::new(first.id.clone(), first);
    sample_phase(&mut samples, &presence, motion.transition.total(), step, |t| {
        motion.sample_enter(t)
    });
    presence.finish_enter();

    for movie in rest {
        match presence.update(movie.id.clone(), movie) {
            PresenceChange::ExitStarted => {}
            change => {
                tracing::debug!(movie_id = %movie.id, ?change, "no remount");
                continue;
            }
        }

        sample_phase(&mut samples, &presence, motion.exit_duration(), step, |t| {
            motion.sample_exit(t)
        });
        presence.finish_exit();

        sample_phase(&mut samples, &presence, motion.transition.total(), step, |t| {
            motion.sample_enter(t)
        });
        presence.finish_enter();
    }

    samples
}

fn sample_phase(
    samples: &mut Vec<Sample>,
    presence: &Presence<MovieId, &Movie>,
    length: Duration,
    step: Duration,
    pose_at: impl Fn(Duration) -> marquee_motion::Pose,
) {
    let visible = presence.visible();
    let phase = visible.phase;
    debug_assert!(phase != PresencePhase::Present);
    let movie_id = visible.key.to_string();

    let mut t = Duration::ZERO;
    loop {
        let t_clamped = t.min(length);
        let pose = pose_at(t_clamped);
        samples.push(Sample {
            movie_id: movie_id.clone(),
            phase: phase.as_str(),
            t_ms: t_clamped.as_millis(),
            opacity: pose.opacity,
            scale: pose.scale,
        });
        if t >= length {
            break;
        }
        t += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_banner::BannerConfig;

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new("m1", "First", "a.jpg", "Action"),
            Movie::new("m1", "First (edited)", "a.jpg", "Action"),
            Movie::new("m2", "Second", "b.jpg", "Drama"),
        ]
    }

    #[test]
    fn test_timeline_phases() {
        let motion = BannerConfig::default().crossfade_motion();
        let samples = timeline(&movies(), &motion, Duration::from_millis(350));

        let phases: Vec<(&str, &str, u128)> = samples
            .iter()
            .map(|s| (s.movie_id.as_str(), s.phase, s.t_ms))
            .collect();
        assert_eq!(
            phases,
            vec![
                ("m1", "entering", 0),
                ("m1", "entering", 350),
                ("m1", "entering", 700),
                ("m1", "exiting", 0),
                ("m1", "exiting", 350),
                ("m1", "exiting", 700),
                ("m2", "entering", 0),
                ("m2", "entering", 350),
                ("m2", "entering", 700),
            ]
        );
    }

    #[test]
    fn test_timeline_endpoints() {
        let motion = BannerConfig::default().crossfade_motion();
        let samples = timeline(&movies(), &motion, Duration::from_millis(700));

        let enter_start = &samples[0];
        assert_eq!(enter_start.opacity, 0.0);
        assert!((enter_start.scale - 1.05).abs() < 1e-6);

        let exit_end = &samples[3];
        assert_eq!(exit_end.phase, "exiting");
        assert_eq!(exit_end.t_ms, 700);
        assert_eq!(exit_end.opacity, 0.0);
        assert!((exit_end.scale - 0.97).abs() < 1e-6);
    }

    #[test]
    fn test_empty_timeline() {
        let motion = BannerConfig::default().crossfade_motion();
        assert!(timeline(&[], &motion, Duration::from_millis(100)).is_empty());
    }
}
