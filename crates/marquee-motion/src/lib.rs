//! Motion descriptions for the Marquee banner.
//!
//! Interpolation at runtime belongs to the platform (CSS animations in the
//! browser). This crate only describes what should move and when:
//!
//! - `Ease` - timing curves
//! - `Pose` / `Motion` - initial, animate and exit states plus a transition
//! - `Stagger` - ordered entrance delays for sibling fragments
//! - `Presence` - keyed mount/unmount in "wait" mode, so an outgoing visual
//!   finishes exiting before the incoming one enters

mod ease;
mod error;
mod motion;
mod presence;
mod stagger;

pub use ease::*;
pub use error::*;
pub use motion::*;
pub use presence::*;
pub use stagger::*;
