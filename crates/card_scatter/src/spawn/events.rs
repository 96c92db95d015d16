//! Event types and sinks for observing spawn sessions and card removals.
//!
//! This module defines [`SpawnEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing a session via
//! [`crate::spawn::session::SpawnCoordinator`] or [`crate::spawn::session::run_session`],
//! and while clearing cards from a [`crate::table::CardTable`].
use crate::spawn::config::SpawnConfig;
use crate::spawn::session::{Placement, SessionResult};
use crate::table::Removal;

/// Describes events emitted by spawn operations.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SpawnEvent {
    /// Emitted when a session starts.
    SessionStarted {
        /// Normalized configuration used by the session.
        config: SpawnConfig,
        /// Number of ordinary placements requested.
        target_count: u32,
    },

    /// Emitted when a session finishes, including empty ones.
    SessionFinished {
        /// Everything the session produced.
        result: SessionResult,
    },

    /// Emitted when a session cannot run at all.
    SessionAborted {
        /// Human-readable reason.
        reason: String,
    },

    /// Emitted for each ordinary or special placement.
    PlacementMade {
        /// The placement data.
        placement: Placement,
    },

    /// Emitted when a draw found no eligible kind and was skipped.
    SelectionSkipped {
        /// Zero-based index of the draw within the session.
        draw: u32,
    },

    /// Emitted when a clicked card was removed and scored.
    CardRemoved {
        /// The removal record.
        removal: Removal,
    },

    /// Non-fatal warning generated during a session.
    Warning {
        /// Context string (e.g. "session", kind id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`SpawnEvent`], used to filter what a sink receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnEventKind {
    SessionStarted,
    SessionFinished,
    SessionAborted,
    PlacementMade,
    SelectionSkipped,
    CardRemoved,
    Warning,
}

impl SpawnEvent {
    pub fn kind(&self) -> SpawnEventKind {
        match self {
            SpawnEvent::SessionStarted { .. } => SpawnEventKind::SessionStarted,
            SpawnEvent::SessionFinished { .. } => SpawnEventKind::SessionFinished,
            SpawnEvent::SessionAborted { .. } => SpawnEventKind::SessionAborted,
            SpawnEvent::PlacementMade { .. } => SpawnEventKind::PlacementMade,
            SpawnEvent::SelectionSkipped { .. } => SpawnEventKind::SelectionSkipped,
            SpawnEvent::CardRemoved { .. } => SpawnEventKind::CardRemoved,
            SpawnEvent::Warning { .. } => SpawnEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`SpawnEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SpawnEvent);

    /// Whether this sink cares about events of `kind`. Producers skip building
    /// events nobody wants.
    #[inline]
    fn wants(&self, _kind: SpawnEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SpawnEvent) {}

    #[inline]
    fn wants(&self, _kind: SpawnEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    #[inline]
    fn send(&mut self, event: SpawnEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SpawnEvent>,
    only: Option<Vec<SpawnEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Restricts collection to the given event kinds.
    pub fn filtered(kinds: impl IntoIterator<Item = SpawnEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SpawnEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SpawnEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: SpawnEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SpawnEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    #[inline]
    fn wants(&self, kind: SpawnEventKind) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_sinks(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SpawnEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: SpawnEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
