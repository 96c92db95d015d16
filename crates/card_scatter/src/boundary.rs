//! Spawn boundary derived from an orthographic viewport.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec2;

use crate::error::{Error, Result};

/// Vertical half extent and aspect ratio of an orthographic view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Half of the visible height in world units (orthographic size).
    pub half_height: f32,
    /// Visible width divided by visible height.
    pub aspect: f32,
}

impl Viewport {
    pub fn new(half_height: f32, aspect: f32) -> Self {
        Self {
            half_height,
            aspect,
        }
    }
}

/// Rectangle inside which ordinary cards are placed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl BoundaryRect {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Half of width and height.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Top-left corner, where the special card goes.
    pub fn top_left(&self) -> Vec2 {
        let half = self.half_extents();
        self.center + Vec2::new(-half.x, half.y)
    }

    /// Corners in counter-clockwise order starting at the bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    /// Inclusive on all edges.
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// True when there is no area to place anything in.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Derive the spawn rectangle from a viewport half height.
///
/// `height = half_height * 2 * height_pct` and `width = height * aspect * width_pct`.
/// Percentages are clamped to `[0, 1]`. Fails with [`Error::NoViewport`] when the
/// half height is not a positive finite number.
pub fn compute_boundary(
    half_height: f32,
    width_pct: f32,
    height_pct: f32,
    aspect: f32,
) -> Result<BoundaryRect> {
    if !half_height.is_finite() || half_height <= 0.0 {
        return Err(Error::NoViewport);
    }

    let height = half_height * 2.0 * clamp_pct(height_pct);
    let width = height * aspect * clamp_pct(width_pct);

    Ok(BoundaryRect::new(Vec2::ZERO, width, height))
}

fn clamp_pct(pct: f32) -> f32 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 1.0)
    }
}

/// Boundary calculator configured with the usable share of the screen.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBoundaryCalculator {
    /// Share of the visible width used for spawning, in [0, 1].
    pub width_pct: f32,
    /// Share of the visible height used for spawning, in [0, 1].
    pub height_pct: f32,
    /// World-space center of the resulting rectangle.
    pub center: Vec2,
}

impl Default for ScreenBoundaryCalculator {
    fn default() -> Self {
        Self {
            width_pct: 0.8,
            height_pct: 0.8,
            center: Vec2::ZERO,
        }
    }
}

impl ScreenBoundaryCalculator {
    pub fn new(width_pct: f32, height_pct: f32) -> Self {
        Self {
            width_pct,
            height_pct,
            ..Default::default()
        }
    }

    /// Sets the world-space center of the computed rectangle.
    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// Computes the boundary for `viewport`, or [`Error::NoViewport`] if there is none.
    pub fn compute(&self, viewport: Option<&Viewport>) -> Result<BoundaryRect> {
        let viewport = viewport.ok_or(Error::NoViewport)?;
        let mut rect = compute_boundary(
            viewport.half_height,
            self.width_pct,
            self.height_pct,
            viewport.aspect,
        )?;
        rect.center = self.center;
        Ok(rect)
    }
}
