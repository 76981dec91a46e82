//! Staggered entrance schedule for sibling fragments.

use std::time::Duration;

use crate::error::MotionError;

/// Ordered slots, each starting after a fixed delay.
///
/// Slots are kept in start order; a slot may share its start time with the
/// previous one but never begin before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stagger<S> {
    slots: Vec<(S, Duration)>,
}

impl<S: Copy + PartialEq> Stagger<S> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append a slot starting at `delay`.
    pub fn then(mut self, slot: S, delay: Duration) -> Result<Self, MotionError> {
        if let Some((_, previous)) = self.slots.last() {
            if delay < *previous {
                return Err(MotionError::StaggerOrder {
                    index: self.slots.len(),
                    delay_ms: delay.as_millis(),
                    previous_ms: previous.as_millis(),
                });
            }
        }
        self.slots.push((slot, delay));
        Ok(self)
    }

    /// Start delay of `slot`, if scheduled.
    pub fn delay_of(&self, slot: S) -> Option<Duration> {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, delay)| *delay)
    }

    /// Slots in start order.
    pub fn iter(&self) -> impl Iterator<Item = (S, Duration)> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S: Copy + PartialEq> Default for Stagger<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Block {
        Badges,
        Title,
        Meta,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_then_keeps_order() {
        let stagger = Stagger::new()
            .then(Block::Badges, ms(200))
            .and_then(|s| s.then(Block::Title, ms(300)))
            .and_then(|s| s.then(Block::Meta, ms(300)))
            .unwrap();

        assert_eq!(stagger.len(), 3);
        assert_eq!(stagger.delay_of(Block::Title), Some(ms(300)));
        let order: Vec<Block> = stagger.iter().map(|(b, _)| b).collect();
        assert_eq!(order, vec![Block::Badges, Block::Title, Block::Meta]);
    }

    #[test]
    fn test_then_rejects_earlier_slot() {
        let err = Stagger::new()
            .then(Block::Badges, ms(400))
            .and_then(|s| s.then(Block::Title, ms(300)))
            .unwrap_err();

        assert_eq!(
            err,
            MotionError::StaggerOrder {
                index: 1,
                delay_ms: 300,
                previous_ms: 400
            }
        );
    }

    #[test]
    fn test_missing_slot() {
        let stagger: Stagger<Block> = Stagger::new();
        assert!(stagger.is_empty());
        assert_eq!(stagger.delay_of(Block::Badges), None);
    }
}
