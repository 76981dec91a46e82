//! Keyed presence in "wait" mode.
//!
//! A keyed subtree is remounted whenever its key changes. The outgoing
//! value plays its exit first; the incoming value is held back until
//! `finish_exit` and only then starts entering. At no point are two values
//! visible at once.

/// Lifecycle phase of the mounted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePhase {
    /// Mounted and playing its entrance.
    Entering,
    /// Entrance finished.
    Present,
    /// Playing its exit; a replacement is queued.
    Exiting,
}

impl PresencePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresencePhase::Entering => "entering",
            PresencePhase::Present => "present",
            PresencePhase::Exiting => "exiting",
        }
    }
}

/// Outcome of a presence operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceChange {
    /// Same key: value replaced in place, no remount.
    Updated,
    /// New key: the current value started exiting.
    ExitStarted,
    /// An exit was already running: the queued replacement was swapped.
    Queued,
    /// The queued value was mounted and is entering.
    Mounted,
    /// The entrance finished.
    Settled,
    /// Nothing to do in the current phase.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot<K, T> {
    key: K,
    value: T,
}

/// The single visible value and its phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visible<'a, K, T> {
    pub key: &'a K,
    pub value: &'a T,
    pub phase: PresencePhase,
}

/// Keyed presence tracking one mounted value and at most one queued
/// replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct Presence<K, T> {
    current: Slot<K, T>,
    phase: PresencePhase,
    queued: Option<Slot<K, T>>,
    generation: u64,
}

impl<K: PartialEq, T> Presence<K, T> {
    /// Mount `value` under `key`; it starts entering.
    pub fn new(key: K, value: T) -> Self {
        Self {
            current: Slot { key, value },
            phase: PresencePhase::Entering,
            queued: None,
            generation: 1,
        }
    }

    /// Offer the latest value.
    ///
    /// An exit is never reversed: once the current value is leaving, every
    /// update only replaces what mounts next, even when it carries the key
    /// that is leaving.
    pub fn update(&mut self, key: K, value: T) -> PresenceChange {
        if self.phase == PresencePhase::Exiting {
            self.queued = Some(Slot { key, value });
            tracing::debug!(generation = self.generation, "presence: replaced queued value");
            return PresenceChange::Queued;
        }

        if key == self.current.key {
            self.current.value = value;
            return PresenceChange::Updated;
        }

        self.queued = Some(Slot { key, value });
        self.phase = PresencePhase::Exiting;
        tracing::debug!(generation = self.generation, "presence: exit started");
        PresenceChange::ExitStarted
    }

    /// The exit animation finished: mount the queued value.
    pub fn finish_exit(&mut self) -> PresenceChange {
        if self.phase != PresencePhase::Exiting {
            return PresenceChange::Unchanged;
        }
        let Some(next) = self.queued.take() else {
            return PresenceChange::Unchanged;
        };

        self.current = next;
        self.phase = PresencePhase::Entering;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "presence: mounted");
        PresenceChange::Mounted
    }

    /// The entrance animation finished.
    pub fn finish_enter(&mut self) -> PresenceChange {
        if self.phase != PresencePhase::Entering {
            return PresenceChange::Unchanged;
        }
        self.phase = PresencePhase::Present;
        PresenceChange::Settled
    }

    /// The one value on screen.
    pub fn visible(&self) -> Visible<'_, K, T> {
        Visible {
            key: &self.current.key,
            value: &self.current.value,
            phase: self.phase,
        }
    }

    /// Value waiting for the exit to finish.
    pub fn queued(&self) -> Option<&T> {
        self.queued.as_ref().map(|slot| &slot.value)
    }

    /// Number of mounts so far; bumps only when the key changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
