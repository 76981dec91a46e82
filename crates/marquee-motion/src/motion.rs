//! Poses, transitions and enter/exit motions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::error::MotionError;

/// A visual state: opacity, uniform scale and vertical offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub opacity: f32,
    pub scale: f32,
    pub y: f32,
}

impl Pose {
    /// Fully visible, unscaled, in place.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        scale: 1.0,
        y: 0.0,
    };

    /// Transparent at the given scale.
    pub fn faded(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            scale,
            y: 0.0,
        }
    }

    /// Transparent and pushed down by `y` pixels.
    pub fn lowered(y: f32) -> Self {
        Self {
            opacity: 0.0,
            scale: 1.0,
            y,
        }
    }

    /// Linear blend towards `to`; `t` is expected in `0.0..=1.0`.
    pub fn lerp(&self, to: &Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    /// CSS declarations for this pose.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.y, self.scale
        )
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(MotionError::InvalidOpacity(self.opacity));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MotionError::InvalidScale(self.scale));
        }
        if !self.y.is_finite() {
            return Err(MotionError::InvalidOffset(self.y));
        }
        Ok(())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Timing of a single animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            delay: Duration::ZERO,
            ease: Ease::EaseOut,
        }
    }
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Eased progress at `elapsed` since the animation was scheduled.
    /// Zero until the delay has passed; one once the duration is over.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        self.ease
            .apply(running.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// An element's entrance (initial -> animate) and optional exit
/// (animate -> exit).
///
/// Exits reuse the transition's duration and curve but start immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    pub exit: Option<Pose>,
    pub transition: Transition,
}

impl Motion {
    pub fn new(initial: Pose, animate: Pose) -> Self {
        Self {
            initial,
            animate,
            exit: None,
            transition: Transition::default(),
        }
    }

    /// Fade and scale in from `enter_scale`, fade and scale out to
    /// `exit_scale`.
    pub fn crossfade(enter_scale: f32, exit_scale: f32) -> Self {
        Self::new(Pose::faded(enter_scale), Pose::REST).with_exit(Pose::faded(exit_scale))
    }

    /// Slide up by `offset` pixels while fading in.
    pub fn rise(offset: f32) -> Self {
        Self::new(Pose::lowered(offset), Pose::REST)
    }

    pub fn with_exit(mut self, exit: Pose) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.transition.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.transition.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.transition.ease = ease;
        self
    }

    /// Pose `elapsed` after the element was mounted.
    pub fn sample_enter(&self, elapsed: Duration) -> Pose {
        self.initial
            .lerp(&self.animate, self.transition.progress(elapsed))
    }

    /// Pose `elapsed` after the exit started. Without an exit pose the
    /// element leaves instantly and stays at its animate pose.
    pub fn sample_exit(&self, elapsed: Duration) -> Pose {
        match self.exit {
            Some(exit) => {
                let timing = Transition {
                    delay: Duration::ZERO,
                    ..self.transition
                };
                self.animate.lerp(&exit, timing.progress(elapsed))
            }
            None => self.animate,
        }
    }

    /// How long the exit takes.
    pub fn exit_duration(&self) -> Duration {
        if self.exit.is_some() {
            self.transition.duration
        } else {
            Duration::ZERO
        }
    }

    /// CSS `@keyframes` for the entrance.
    pub fn enter_keyframes(&self, name: &str) -> String {
        keyframes(name, &self.initial, &self.animate)
    }

    /// CSS `@keyframes` for the exit, if there is one.
    pub fn exit_keyframes(&self, name: &str) -> Option<String> {
        self.exit.map(|exit| keyframes(name, &self.animate, &exit))
    }

    /// CSS `animation` shorthand for the entrance.
    pub fn enter_animation(&self, name: &str) -> String {
        format!(
            "{} {}ms {} {}ms both",
            name,
            self.transition.duration.as_millis(),
            self.transition.ease.css(),
            self.transition.delay.as_millis()
        )
    }

    /// CSS `animation` shorthand for the exit, if there is one.
    pub fn exit_animation(&self, name: &str) -> Option<String> {
        self.exit.map(|_| {
            format!(
                "{} {}ms {} 0ms both",
                name,
                self.transition.duration.as_millis(),
                self.transition.ease.css()
            )
        })
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        self.initial.validate()?;
        self.animate.validate()?;
        if let Some(exit) = &self.exit {
            exit.validate()?;
        }
        Ok(())
    }
}

fn keyframes(name: &str, from: &Pose, to: &Pose) -> String {
    format!(
        "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
        name,
        from.to_css(),
        to.to_css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_crossfade_endpoints() {
        let motion = Motion::crossfade(1.05, 0.97).with_duration(ms(700));

        assert_eq!(motion.sample_enter(Duration::ZERO), Pose::faded(1.05));
        assert_eq!(motion.sample_enter(ms(700)), Pose::REST);
        assert_eq!(motion.sample_exit(Duration::ZERO), Pose::REST);
        assert_eq!(motion.sample_exit(ms(700)), Pose::faded(0.97));
        assert_eq!(motion.exit_duration(), ms(700));
    }

    #[test]
    fn test_delay_holds_initial_pose() {
        let motion = Motion::rise(15.0).with_delay(ms(200));

        assert_eq!(motion.sample_enter(ms(150)), Pose::lowered(15.0));
        let midway = motion.sample_enter(ms(350));
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.y > 0.0 && midway.y < 15.0);
        assert_eq!(motion.sample_enter(ms(500)), Pose::REST);
    }

    #[test]
    fn test_exit_ignores_delay() {
        let motion = Motion::crossfade(1.05, 0.97)
            .with_duration(ms(100))
            .with_delay(ms(1000));
        assert_eq!(motion.sample_exit(ms(100)), Pose::faded(0.97));
    }

    #[test]
    fn test_no_exit_pose_means_instant_exit() {
        let motion = Motion::rise(20.0);
        assert_eq!(motion.exit_duration(), Duration::ZERO);
        assert_eq!(motion.sample_exit(ms(50)), Pose::REST);
        assert!(motion.exit_keyframes("x").is_none());
        assert!(motion.exit_animation("x").is_none());
    }

    #[test]
    fn test_css_output() {
        let motion = Motion::crossfade(1.05, 0.97).with_duration(ms(700));

        assert_eq!(
            motion.enter_animation("banner-in"),
            "banner-in 700ms ease-out 0ms both"
        );
        assert_eq!(
            motion.enter_keyframes("banner-in"),
            "@keyframes banner-in { from { opacity: 0; transform: translateY(0px) scale(1.05); } \
             to { opacity: 1; transform: translateY(0px) scale(1); } }"
        );
        assert_eq!(
            motion.exit_animation("banner-out").as_deref(),
            Some("banner-out 700ms ease-out 0ms both")
        );
    }

    #[test]
    fn test_validate_rejects_bad_poses() {
        let bad_opacity = Motion::new(
            Pose {
                opacity: 1.5,
                ..Pose::REST
            },
            Pose::REST,
        );
        assert_eq!(
            bad_opacity.validate(),
            Err(MotionError::InvalidOpacity(1.5))
        );

        let bad_scale = Motion::crossfade(1.05, 0.0);
        assert_eq!(bad_scale.validate(), Err(MotionError::InvalidScale(0.0)));

        assert!(Motion::crossfade(1.05, 0.97).validate().is_ok());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let transition = Transition::new(Duration::ZERO);
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
    }
}
