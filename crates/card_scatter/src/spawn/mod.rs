//! Spawning pipeline: kinds, weighted selection, sessions, borders and events.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod border;
pub mod config;
pub mod events;
pub mod selection;
pub mod session;

pub const DEFAULT_PRIORITY: u32 = 1;

pub type KindId = String;

/// A category of placeable card with its own spawn priority and optional cap.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnableKind {
    pub id: KindId,
    /// Relative selection weight. Zero is treated as [`DEFAULT_PRIORITY`].
    pub priority: u32,
    /// Maximum placements per session; `0` means unlimited.
    pub max_count: u32,
    /// Placements made so far in the running session.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub current_count: u32,
}

impl SpawnableKind {
    pub fn new(id: impl Into<KindId>, priority: u32) -> Self {
        Self {
            id: id.into(),
            priority,
            max_count: 0,
            current_count: 0,
        }
    }

    /// Sets the per-session cap (`0` = unlimited).
    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    /// Whether another placement is allowed under the cap.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.max_count == 0 || self.current_count < self.max_count
    }

    /// Selection weight: the priority, with zero counted as [`DEFAULT_PRIORITY`].
    #[inline]
    pub fn weight(&self) -> u64 {
        self.priority.max(DEFAULT_PRIORITY) as u64
    }

    /// Raises a zero priority to [`DEFAULT_PRIORITY`].
    pub fn normalize(&mut self) {
        if self.priority == 0 {
            self.priority = DEFAULT_PRIORITY;
        }
    }
}

/// Normalizes priorities and clears the per-session counters.
pub fn reset_kinds(kinds: &mut [SpawnableKind]) {
    for kind in kinds.iter_mut() {
        kind.normalize();
        kind.current_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_priority_normalizes_to_default() {
        let mut kind = SpawnableKind::new("ace", 0);
        kind.normalize();
        assert_eq!(kind.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn zero_priority_weighs_as_default() {
        assert_eq!(SpawnableKind::new("ace", 0).weight(), 1);
        assert_eq!(SpawnableKind::new("ace", 7).weight(), 7);
    }

    #[test]
    fn capacity_follows_cap() {
        let mut kind = SpawnableKind::new("ace", 1).with_max_count(2);
        assert!(kind.has_capacity());
        kind.current_count = 2;
        assert!(!kind.has_capacity());

        let mut unlimited = SpawnableKind::new("two", 1);
        unlimited.current_count = 10_000;
        assert!(unlimited.has_capacity());
    }

    #[test]
    fn reset_clears_counters() {
        let mut kinds = vec![
            SpawnableKind::new("a", 0).with_max_count(1),
            SpawnableKind::new("b", 4),
        ];
        kinds[0].current_count = 1;
        kinds[1].current_count = 7;
        reset_kinds(&mut kinds);
        assert!(kinds.iter().all(|k| k.current_count == 0));
        assert_eq!(kinds[0].priority, 1);
        assert_eq!(kinds[1].priority, 4);
    }
}
