//! Border strips and board backdrop framing the spawn boundary.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec2;

use crate::boundary::BoundaryRect;

/// Which edge of the boundary a strip covers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A rectangular decoration piece.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderPiece {
    pub edge: Edge,
    pub rect: BoundaryRect,
}

/// Layout of the frame around a boundary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BorderLayout {
    /// Strips hugging the outside of each edge. Empty for non-positive thickness.
    pub pieces: Vec<BorderPiece>,
    /// Backdrop covering the boundary plus `board_margin` on every side.
    pub board: BoundaryRect,
}

impl BorderLayout {
    /// Frames `boundary` with strips of `thickness`.
    ///
    /// Top and bottom strips span the full outer width so the corners are closed;
    /// left and right strips span the boundary height only.
    pub fn around(boundary: &BoundaryRect, thickness: f32, board_margin: f32) -> Self {
        let margin = board_margin.max(0.0);
        let board = BoundaryRect::new(
            boundary.center,
            (boundary.width + 2.0 * margin).max(0.0),
            (boundary.height + 2.0 * margin).max(0.0),
        );

        if !thickness.is_finite() || thickness <= 0.0 || boundary.is_degenerate() {
            return Self {
                pieces: Vec::new(),
                board,
            };
        }

        let half = boundary.half_extents();
        let c = boundary.center;
        let t = thickness;
        let outer_width = boundary.width + 2.0 * t;
        let pieces = vec![
            BorderPiece {
                edge: Edge::Top,
                rect: BoundaryRect::new(c + Vec2::new(0.0, half.y + t * 0.5), outer_width, t),
            },
            BorderPiece {
                edge: Edge::Bottom,
                rect: BoundaryRect::new(c - Vec2::new(0.0, half.y + t * 0.5), outer_width, t),
            },
            BorderPiece {
                edge: Edge::Left,
                rect: BoundaryRect::new(c - Vec2::new(half.x + t * 0.5, 0.0), t, boundary.height),
            },
            BorderPiece {
                edge: Edge::Right,
                rect: BoundaryRect::new(c + Vec2::new(half.x + t * 0.5, 0.0), t, boundary.height),
            },
        ];

        Self { pieces, board }
    }

    pub fn piece(&self, edge: Edge) -> Option<&BorderPiece> {
        self.pieces.iter().find(|p| p.edge == edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hug_the_boundary() {
        let boundary = BoundaryRect::new(Vec2::ZERO, 8.0, 4.0);
        let layout = BorderLayout::around(&boundary, 0.5, 1.0);
        assert_eq!(layout.pieces.len(), 4);

        let top = layout.piece(Edge::Top).unwrap().rect;
        assert_eq!(top.min().y, 2.0);
        assert_eq!(top.width, 9.0);

        let left = layout.piece(Edge::Left).unwrap().rect;
        assert_eq!(left.max().x, -4.0);
        assert_eq!(left.height, 4.0);

        let right = layout.piece(Edge::Right).unwrap().rect;
        assert_eq!(right.min().x, 4.0);

        assert_eq!(layout.board.size(), Vec2::new(10.0, 6.0));
    }

    #[test]
    fn no_strips_for_zero_thickness() {
        let boundary = BoundaryRect::new(Vec2::new(1.0, 1.0), 2.0, 2.0);
        let layout = BorderLayout::around(&boundary, 0.0, 0.0);
        assert!(layout.pieces.is_empty());
        assert_eq!(layout.board, boundary);
    }

    #[test]
    fn strips_follow_an_offset_center() {
        let boundary = BoundaryRect::new(Vec2::new(10.0, -5.0), 2.0, 2.0);
        let layout = BorderLayout::around(&boundary, 1.0, 0.0);
        let bottom = layout.piece(Edge::Bottom).unwrap().rect;
        assert_eq!(bottom.center, Vec2::new(10.0, -6.5));
    }
}
