#![forbid(unsafe_code)]
//! card_scatter: weighted card spawning inside a viewport-derived boundary, with click scoring.
//!
//! Modules:
//! - boundary: spawn rectangle from an orthographic viewport
//! - spawn: kinds, capped weighted selection, sessions, borders, events
//! - table: live cards, hit testing and click removal
//! - score: click score counters
//! - debug: line-based debug drawing through a host trait
//!
//! A session is fully determined by its inputs and the RNG; seed a `StdRng` to replay one.
pub mod boundary;
pub mod color;
pub mod debug;
pub mod error;
mod random;
pub mod score;
pub mod spawn;
pub mod table;

/// Convenient re-exports for common types. Import with `use card_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::boundary::{compute_boundary, BoundaryRect, ScreenBoundaryCalculator, Viewport};
    pub use crate::color::{Color, Palette};
    pub use crate::debug::{
        draw_borders, draw_boundary, draw_placements, DebugDraw, DebugLine, DebugLines,
    };
    pub use crate::error::{Error, Result};
    pub use crate::score::{AtomicScoreTracker, ScoreTracker};
    pub use crate::spawn::border::{BorderLayout, BorderPiece, Edge};
    pub use crate::spawn::config::{SpawnConfig, SpawnSetup, SpecialKind};
    pub use crate::spawn::events::{
        EventSink, FnSink, MultiSink, SpawnEvent, SpawnEventKind, VecSink,
    };
    pub use crate::spawn::selection::{pick_weighted_capped, select_kind, WeightedPrefabSelector};
    pub use crate::spawn::session::{
        run_session, run_session_with_events, Placement, SessionResult, SpawnCoordinator,
    };
    pub use crate::spawn::{reset_kinds, KindId, SpawnableKind};
    pub use crate::table::{Card, CardId, CardTable, Removal};
}
