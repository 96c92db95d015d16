//! RGBA colors and palettes used to tint placed cards.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng as RngCore;

use crate::random::index;

/// Linear RGBA color with channels in [0, 1].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| c as f32 / 255.0);
        Self { r, g, b, a }
    }

    /// Converts to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Ordered set of colors a card tint is drawn from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Bright card-table colors.
    pub fn card_table() -> Self {
        Self::new(vec![
            Color::from_rgba8([231, 76, 60, 255]),
            Color::from_rgba8([46, 204, 113, 255]),
            Color::from_rgba8([52, 152, 219, 255]),
            Color::from_rgba8([241, 196, 15, 255]),
            Color::from_rgba8([155, 89, 182, 255]),
        ])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniformly random entry, or `None` for an empty palette.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index(rng, self.colors.len())])
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rgba8_conversion_is_stable() {
        let c = Color::from_rgba8([255, 128, 0, 255]);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn empty_palette_picks_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(Palette::default().pick(&mut rng).is_none());
    }

    #[test]
    fn pick_returns_palette_member() {
        let palette = Palette::card_table();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let c = palette.pick(&mut rng).unwrap();
            assert!(palette.colors.contains(&c));
        }
    }
}
