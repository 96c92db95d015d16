//! Debug drawing of boundaries, borders and placements through a host-provided
//! [`DebugDraw`] implementation.
use glam::{Mat2, Vec2};

use crate::boundary::BoundaryRect;
use crate::color::Color;
use crate::spawn::border::BorderLayout;
use crate::spawn::session::Placement;

pub const BOUNDARY_COLOR: Color = Color::rgb(0.0, 1.0, 0.0);
pub const BORDER_COLOR: Color = Color::rgb(1.0, 0.5, 0.0);
pub const PLACEMENT_COLOR: Color = Color::rgb(1.0, 1.0, 0.0);
pub const SPECIAL_COLOR: Color = Color::rgb(1.0, 0.0, 1.0);

/// Line-drawing backend, e.g. an engine's gizmo API.
pub trait DebugDraw {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Outline of an axis-aligned rectangle.
    fn rect(&mut self, rect: &BoundaryRect, color: Color) {
        let [a, b, c, d] = rect.corners();
        self.line(a, b, color);
        self.line(b, c, color);
        self.line(c, d, color);
        self.line(d, a, color);
    }

    /// Small diagonal cross centered on `at`.
    fn cross(&mut self, at: Vec2, size: f32, color: Color) {
        let h = size * 0.5;
        self.line(at + Vec2::new(-h, -h), at + Vec2::new(h, h), color);
        self.line(at + Vec2::new(-h, h), at + Vec2::new(h, -h), color);
    }
}

/// A line segment recorded by [`DebugLines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// Collects lines for hosts that draw them later.
#[derive(Debug, Default, Clone)]
pub struct DebugLines {
    pub lines: Vec<DebugLine>,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DebugDraw for DebugLines {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines.push(DebugLine { from, to, color });
    }
}

pub fn draw_boundary(draw: &mut dyn DebugDraw, boundary: &BoundaryRect) {
    draw.rect(boundary, BOUNDARY_COLOR);
}

pub fn draw_borders(draw: &mut dyn DebugDraw, layout: &BorderLayout) {
    for piece in &layout.pieces {
        draw.rect(&piece.rect, BORDER_COLOR);
    }
}

/// Draws each placement as a cross plus a short heading line for its rotation.
pub fn draw_placements(draw: &mut dyn DebugDraw, placements: &[Placement], marker_size: f32) {
    for p in placements {
        let color = if p.special {
            SPECIAL_COLOR
        } else {
            PLACEMENT_COLOR
        };
        draw.cross(p.position, marker_size, color);
        let heading = Mat2::from_angle(p.rotation.to_radians()) * Vec2::Y * marker_size;
        draw.line(p.position, p.position + heading, color);
    }
}
