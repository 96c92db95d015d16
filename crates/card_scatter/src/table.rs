//! Live cards of a session and click removal.
//!
//! A [`CardTable`] takes the placements of a session, hands out [`CardId`]s, answers
//! which card lies under a point and removes clicked cards, adding points to a
//! [`ScoreTracker`]. Every removal scores the same flat amount; the removed kind is
//! still reported so hosts can tell cards apart.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::{Mat2, Vec2};
use mint::Vector2;
use tracing::debug;

use crate::score::{ScoreTracker, DEFAULT_POINTS};
use crate::spawn::events::{EventSink, SpawnEvent, SpawnEventKind};
use crate::spawn::session::Placement;
use crate::spawn::KindId;

/// Handle of a card on the table. Never reused within one table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

/// A placed card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub placement: Placement,
}

impl Card {
    /// Whether `point` falls inside this card's rotated footprint of `size`.
    pub fn covers(&self, point: Vec2, size: Vec2) -> bool {
        let local = Mat2::from_angle(-self.placement.rotation.to_radians())
            * (point - self.placement.position);
        let half = size * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}

/// Record of a card cleared by the player.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub card_id: CardId,
    pub kind_id: KindId,
    /// Points awarded for this removal.
    pub points: u32,
    /// Score after this removal.
    pub total: u64,
}

/// Cards currently in play, in placement order (last placed is on top).
#[derive(Debug, Clone)]
pub struct CardTable {
    cards: Vec<Card>,
    next_id: u32,
    /// Footprint of every card in world units.
    pub card_size: Vec2,
    /// Points added per removal.
    pub points_per_removal: u32,
}

impl Default for CardTable {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 0,
            card_size: Vec2::new(1.0, 1.4),
            points_per_removal: DEFAULT_POINTS,
        }
    }
}

impl CardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_size(mut self, card_size: Vec2) -> Self {
        self.card_size = card_size;
        self
    }

    pub fn with_points_per_removal(mut self, points: u32) -> Self {
        self.points_per_removal = points;
        self
    }

    /// Puts placements on the table, returning the ids handed out.
    pub fn deal(&mut self, placements: impl IntoIterator<Item = Placement>) -> Vec<CardId> {
        placements
            .into_iter()
            .map(|placement| {
                let id = CardId(self.next_id);
                self.next_id += 1;
                self.cards.push(Card { id, placement });
                id
            })
            .collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Topmost card under `point`.
    pub fn card_at(&self, point: impl Into<Vector2<f32>>) -> Option<&Card> {
        let point = Vec2::from(point.into());
        self.cards
            .iter()
            .rev()
            .find(|c| c.covers(point, self.card_size))
    }

    /// Removes the card with `id` and scores it.
    pub fn remove(&mut self, id: CardId, score: &mut ScoreTracker) -> Option<Removal> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        let card = self.cards.remove(pos);
        let total = score.add_score(self.points_per_removal);
        debug!(
            "Removed card {} ({}) for {} points.",
            card.id.0, card.placement.kind_id, self.points_per_removal
        );
        Some(Removal {
            card_id: card.id,
            kind_id: card.placement.kind_id,
            points: self.points_per_removal,
            total,
        })
    }

    /// Removes and scores the topmost card under `point`, if any.
    pub fn click(
        &mut self,
        point: impl Into<Vector2<f32>>,
        score: &mut ScoreTracker,
    ) -> Option<Removal> {
        let id = self.card_at(point)?.id;
        self.remove(id, score)
    }

    /// Like [`CardTable::click`] and reports the removal to `sink`.
    pub fn click_with_events(
        &mut self,
        point: impl Into<Vector2<f32>>,
        score: &mut ScoreTracker,
        sink: &mut dyn EventSink,
    ) -> Option<Removal> {
        let removal = self.click(point, score)?;
        if sink.wants(SpawnEventKind::CardRemoved) {
            sink.send(SpawnEvent::CardRemoved {
                removal: removal.clone(),
            });
        }
        Some(removal)
    }

    /// Drops every card without scoring, e.g. before the next session.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
