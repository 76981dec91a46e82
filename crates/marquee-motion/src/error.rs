//! Error types for motion descriptions.

use thiserror::Error;

/// Errors raised when validating a motion description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Opacity outside `0.0..=1.0`.
    #[error("Invalid opacity: {0} (expected 0.0..=1.0)")]
    InvalidOpacity(f32),

    /// Scale that is zero, negative or not finite.
    #[error("Invalid scale: {0} (expected a positive finite value)")]
    InvalidScale(f32),

    /// Offset that is not finite.
    #[error("Invalid offset: {0}")]
    InvalidOffset(f32),

    /// A stagger slot starts before the slot preceding it.
    #[error("Stagger slot {index} starts at {delay_ms}ms, before the previous slot at {previous_ms}ms")]
    StaggerOrder {
        index: usize,
        delay_ms: u128,
        previous_ms: u128,
    },
}
