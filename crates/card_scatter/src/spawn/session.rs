//! Spawn sessions: place a random number of weighted kinds inside a boundary,
//! then one special card at the top-left corner.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec2;
use rand::Rng as RngCore;
use tracing::{debug, error, info, warn};

use crate::boundary::{BoundaryRect, ScreenBoundaryCalculator, Viewport};
use crate::color::{Color, Palette};
use crate::random::{index, range_f32, range_inclusive_u32};
use crate::spawn::config::{SpawnConfig, SpecialKind};
use crate::spawn::events::{EventSink, SpawnEvent, SpawnEventKind};
use crate::spawn::selection::WeightedPrefabSelector;
use crate::spawn::{reset_kinds, KindId, SpawnableKind};

/// A card the host should instantiate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Kind identifier for this placement.
    pub kind_id: KindId,
    /// World position of the card center.
    pub position: Vec2,
    /// Rotation around the view axis in degrees.
    pub rotation: f32,
    /// Tint, when random colors are enabled.
    pub color: Option<Color>,
    /// Set for the single corner card of a session.
    pub special: bool,
}

/// Result of running a spawn session.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SessionResult {
    /// Ordinary placements followed by the special one.
    pub placements: Vec<Placement>,
    /// Number of ordinary placements that were requested.
    pub target_count: u32,
    /// Draws that found no eligible kind.
    pub skipped: u32,
    /// Set when the session could not run (no viewport).
    pub aborted: bool,
}

impl SessionResult {
    /// Creates a new empty [`SessionResult`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinary placements only.
    pub fn ordinary(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| !p.special)
    }

    /// The special corner placement, if the session produced one.
    pub fn special(&self) -> Option<&Placement> {
        self.placements.iter().find(|p| p.special)
    }

    fn aborted() -> Self {
        Self {
            aborted: true,
            ..Self::default()
        }
    }
}

/// Runs sessions with a fixed configuration and palette.
pub struct SpawnCoordinator {
    /// Session configuration; normalized before every run.
    pub config: SpawnConfig,
    /// Colors drawn from when `use_random_color` is set.
    pub palette: Palette,
}

impl SpawnCoordinator {
    pub fn new(config: SpawnConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    /// Boundary calculator matching this coordinator's screen share.
    pub fn boundary_calculator(&self) -> ScreenBoundaryCalculator {
        let cfg = self.config.normalized();
        ScreenBoundaryCalculator::new(cfg.width_pct, cfg.height_pct)
    }

    /// Runs a session inside `boundary`.
    pub fn run(
        &self,
        kinds: &mut [SpawnableKind],
        boundary: &BoundaryRect,
        rng: &mut impl RngCore,
    ) -> SessionResult {
        run_session(kinds, boundary, &self.config, &self.palette, rng, None)
    }

    pub fn run_with_events(
        &self,
        kinds: &mut [SpawnableKind],
        boundary: &BoundaryRect,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> SessionResult {
        run_session(kinds, boundary, &self.config, &self.palette, rng, Some(sink))
    }

    /// Derives the boundary from `viewport` and runs a session in it.
    ///
    /// Without a viewport nothing is placed: the failure is logged, a
    /// [`SpawnEvent::SessionAborted`] is emitted and an aborted result returned.
    pub fn run_in_viewport(
        &self,
        kinds: &mut [SpawnableKind],
        viewport: Option<&Viewport>,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> SessionResult {
        match self.boundary_calculator().compute(viewport) {
            Ok(boundary) => self.run_with_events(kinds, &boundary, rng, sink),
            Err(e) => {
                error!("Cannot spawn cards: {}.", e);
                if sink.wants(SpawnEventKind::SessionAborted) {
                    sink.send(SpawnEvent::SessionAborted {
                        reason: e.to_string(),
                    });
                }
                SessionResult::aborted()
            }
        }
    }
}

pub fn run_session<R: RngCore>(
    kinds: &mut [SpawnableKind],
    boundary: &BoundaryRect,
    config: &SpawnConfig,
    palette: &Palette,
    rng: &mut R,
    sink: Option<&mut dyn EventSink>,
) -> SessionResult {
    if let Some(s) = sink {
        run_session_with_events(kinds, boundary, config, palette, rng, s)
    } else {
        run_session_with_events(kinds, boundary, config, palette, rng, &mut ())
    }
}

pub fn run_session_with_events<R: RngCore>(
    kinds: &mut [SpawnableKind],
    boundary: &BoundaryRect,
    config: &SpawnConfig,
    palette: &Palette,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> SessionResult {
    let config = config.normalized();
    reset_kinds(kinds);

    if kinds.is_empty() || boundary.is_degenerate() {
        let message = if kinds.is_empty() {
            "No spawnable kinds configured; nothing to place".to_string()
        } else {
            format!(
                "Spawn boundary is degenerate ({} x {}); nothing to place",
                boundary.width, boundary.height
            )
        };
        warn!("{}.", message);
        if sink.wants(SpawnEventKind::Warning) {
            sink.send(SpawnEvent::Warning {
                context: "session".into(),
                message,
            });
        }
        let result = SessionResult::new();
        if sink.wants(SpawnEventKind::SessionFinished) {
            sink.send(SpawnEvent::SessionFinished {
                result: result.clone(),
            });
        }
        return result;
    }

    let target_count = range_inclusive_u32(rng, config.min_count, config.max_count);
    info!(
        "Spawning {} cards from {} kinds in {:.2} x {:.2}.",
        target_count,
        kinds.len(),
        boundary.width,
        boundary.height,
    );
    if sink.wants(SpawnEventKind::SessionStarted) {
        sink.send(SpawnEvent::SessionStarted {
            config: config.clone(),
            target_count,
        });
    }

    let half = boundary.half_extents();
    let use_color = config.use_random_color && !palette.is_empty();
    if config.use_random_color && palette.is_empty() {
        warn!("Random colors requested but the palette is empty; cards stay untinted.");
        if sink.wants(SpawnEventKind::Warning) {
            sink.send(SpawnEvent::Warning {
                context: "palette".into(),
                message: "Random colors requested but the palette is empty".into(),
            });
        }
    }

    let selector = WeightedPrefabSelector::new();
    let mut placements = Vec::with_capacity(target_count as usize + 1);
    let mut skipped = 0;
    for draw in 0..target_count {
        let Some(kind_index) = selector.pick(kinds, rng) else {
            debug!("Draw {} found no eligible kind; skipping.", draw);
            skipped += 1;
            if sink.wants(SpawnEventKind::SelectionSkipped) {
                sink.send(SpawnEvent::SelectionSkipped { draw });
            }
            continue;
        };

        let offset = Vec2::new(
            range_f32(rng, -half.x, half.x),
            range_f32(rng, -half.y, half.y),
        );
        let rotation = range_f32(rng, config.rotation_min, config.rotation_max);
        let color = if use_color { palette.pick(rng) } else { None };

        let placement = Placement {
            kind_id: kinds[kind_index].id.clone(),
            position: boundary.center + offset,
            rotation,
            color,
            special: false,
        };
        if sink.wants(SpawnEventKind::PlacementMade) {
            sink.send(SpawnEvent::PlacementMade {
                placement: placement.clone(),
            });
        }
        placements.push(placement);
    }

    let special_index = match config.special {
        SpecialKind::FirstKind => 0,
        SpecialKind::RandomKind => index(rng, kinds.len()),
    };
    let special = Placement {
        kind_id: kinds[special_index].id.clone(),
        position: boundary.top_left(),
        rotation: config.special_rotation,
        color: None,
        special: true,
    };
    if sink.wants(SpawnEventKind::PlacementMade) {
        sink.send(SpawnEvent::PlacementMade {
            placement: special.clone(),
        });
    }
    placements.push(special);

    info!(
        "Session finished: {} placements, {} of {} draws skipped.",
        placements.len(),
        skipped,
        target_count,
    );

    let result = SessionResult {
        placements,
        target_count,
        skipped,
        aborted: false,
    };

    if sink.wants(SpawnEventKind::SessionFinished) {
        sink.send(SpawnEvent::SessionFinished {
            result: result.clone(),
        });
    }

    result
}
