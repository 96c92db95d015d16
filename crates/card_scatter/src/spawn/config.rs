//! Session configuration: counts, boundary shares, rotation, tint and special card policy.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::{Error, Result};
use crate::spawn::SpawnableKind;

/// Which kind the special corner card uses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialKind {
    /// Always the first configured kind.
    #[default]
    FirstKind,
    /// A uniformly random configured kind.
    RandomKind,
}

/// Configuration for one spawn session.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
    /// Lower bound of ordinary placements, inclusive.
    pub min_count: u32,
    /// Upper bound of ordinary placements, inclusive.
    pub max_count: u32,
    /// Share of the visible width used for spawning.
    pub width_pct: f32,
    /// Share of the visible height used for spawning.
    pub height_pct: f32,
    /// Lower rotation bound in degrees.
    pub rotation_min: f32,
    /// Upper rotation bound in degrees.
    pub rotation_max: f32,
    /// Tint each ordinary card with a random palette color.
    pub use_random_color: bool,
    /// Kind policy for the special corner card.
    pub special: SpecialKind,
    /// Rotation of the special corner card in degrees.
    pub special_rotation: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_count: 10,
            max_count: 30,
            width_pct: 0.8,
            height_pct: 0.8,
            rotation_min: -180.0,
            rotation_max: 180.0,
            use_random_color: false,
            special: SpecialKind::FirstKind,
            special_rotation: 45.0,
        }
    }
}

impl SpawnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive placement count range.
    pub fn with_count_range(mut self, min_count: u32, max_count: u32) -> Self {
        self.min_count = min_count;
        self.max_count = max_count;
        self
    }

    /// Sets the share of the screen used for spawning.
    pub fn with_screen_share(mut self, width_pct: f32, height_pct: f32) -> Self {
        self.width_pct = width_pct;
        self.height_pct = height_pct;
        self
    }

    /// Sets the rotation range in degrees.
    pub fn with_rotation_range(mut self, rotation_min: f32, rotation_max: f32) -> Self {
        self.rotation_min = rotation_min;
        self.rotation_max = rotation_max;
        self
    }

    pub fn with_random_color(mut self, use_random_color: bool) -> Self {
        self.use_random_color = use_random_color;
        self
    }

    pub fn with_special(mut self, special: SpecialKind) -> Self {
        self.special = special;
        self
    }

    /// Returns a copy with every out-of-range value clamped.
    ///
    /// `min_count` above `max_count` is lowered to `max_count`, shares are clamped
    /// to [0, 1] (NaN becomes 0), swapped rotation bounds are reordered and
    /// non-finite rotations fall back to the defaults.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let mut out = self.clone();

        if out.min_count > out.max_count {
            out.min_count = out.max_count;
        }

        out.width_pct = clamp_share(out.width_pct);
        out.height_pct = clamp_share(out.height_pct);

        if !out.rotation_min.is_finite() {
            out.rotation_min = defaults.rotation_min;
        }
        if !out.rotation_max.is_finite() {
            out.rotation_max = defaults.rotation_max;
        }
        if out.rotation_min > out.rotation_max {
            std::mem::swap(&mut out.rotation_min, &mut out.rotation_max);
        }
        if !out.special_rotation.is_finite() {
            out.special_rotation = defaults.special_rotation;
        }

        out
    }

    /// Strict check for hosts that prefer rejecting bad input over clamping it.
    pub fn validate(&self) -> Result<()> {
        if self.min_count > self.max_count {
            return Err(Error::InvalidConfig(format!(
                "min_count ({}) must be <= max_count ({})",
                self.min_count, self.max_count
            )));
        }
        for (name, value) in [("width_pct", self.width_pct), ("height_pct", self.height_pct)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if !self.rotation_min.is_finite()
            || !self.rotation_max.is_finite()
            || !self.special_rotation.is_finite()
        {
            return Err(Error::InvalidConfig("rotations must be finite".into()));
        }
        Ok(())
    }

    /// Parses a configuration from RON text. Missing fields take their defaults.
    #[cfg(feature = "ron")]
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::de::from_str(text)?)
    }
}

fn clamp_share(pct: f32) -> f32 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 1.0)
    }
}

/// Everything a host configures for a scene: session settings, kinds and palette.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnSetup {
    pub config: SpawnConfig,
    pub kinds: Vec<SpawnableKind>,
    pub palette: Palette,
}

impl SpawnSetup {
    pub fn new(config: SpawnConfig, kinds: Vec<SpawnableKind>, palette: Palette) -> Self {
        Self {
            config,
            kinds,
            palette,
        }
    }

    /// Parses a full setup from RON text.
    #[cfg(feature = "ron")]
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::de::from_str(text)?)
    }

    /// Reads and parses a RON setup file.
    #[cfg(feature = "ron")]
    pub fn from_ron_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}
