//! Color harmony algorithms.
//!
//! Maps a base HSV color and a harmony mode to an ordered palette. All hue
//! arithmetic wraps modulo 1.0; the Smart UI mode substitutes fixed
//! saturation/value levels per role instead of offsetting them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Hsv;

/// Harmony rule used to derive a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HarmonyMode {
    /// Role-based UI palette: background, text, accent, secondary.
    #[default]
    SmartUi,
    /// Base plus its opposite on the hue wheel.
    Complementary,
    /// Three hues a third of the wheel apart.
    Triad,
    /// Four hues a quarter of the wheel apart.
    Tetrad,
    /// Base centered between two near neighbors.
    Analogous,
    /// Base plus three randomized companions.
    Random,
}

impl HarmonyMode {
    /// All available harmony modes, in menu order.
    pub const ALL: [HarmonyMode; 6] = [
        Self::SmartUi,
        Self::Complementary,
        Self::Triad,
        Self::Tetrad,
        Self::Analogous,
        Self::Random,
    ];

    /// Number of colors this mode produces.
    pub fn palette_len(&self) -> usize {
        match self {
            Self::Complementary => 2,
            Self::Triad | Self::Analogous => 3,
            Self::SmartUi | Self::Tetrad | Self::Random => 4,
        }
    }

    /// Expand a base color into an ordered palette.
    ///
    /// Deterministic for every mode except [`HarmonyMode::Random`], which
    /// draws its companion colors from `rng`. The first entry of Random
    /// output is always the base itself.
    pub fn expand(&self, base: Hsv, rng: &mut impl Rng) -> Vec<Hsv> {
        let (h, s, v) = (base.h(), base.s(), base.v());
        let colors = match self {
            Self::SmartUi => {
                let is_dark = v < 0.5;
                vec![
                    Hsv::new(h, s * 0.2, if is_dark { 0.12 } else { 0.98 }),
                    Hsv::new(h, 0.1, if is_dark { 0.95 } else { 0.1 }),
                    Hsv::new(h + 0.5, 0.8, 0.9),
                    Hsv::new(h + 0.1, 0.6, 0.8),
                ]
            }
            Self::Complementary => vec![base, base.rotate_hue(0.5)],
            Self::Triad => vec![base, base.rotate_hue(0.33), base.rotate_hue(0.66)],
            Self::Tetrad => vec![
                base,
                base.rotate_hue(0.25),
                base.rotate_hue(0.5),
                base.rotate_hue(0.75),
            ],
            Self::Analogous => vec![base.rotate_hue(-0.1), base, base.rotate_hue(0.1)],
            Self::Random => {
                let mut colors = vec![base];
                for _ in 0..3 {
                    colors.push(Hsv::new(
                        rng.random::<f64>(),
                        rng.random_range(0.4..=1.0),
                        rng.random_range(0.4..=1.0),
                    ));
                }
                colors
            }
        };
        debug!(mode = %self, entries = colors.len(), "expanded palette");
        colors
    }

    /// Label for the swatch at `index`.
    ///
    /// Smart UI slots carry semantic roles; every other mode numbers them.
    pub fn slot_label(&self, index: usize) -> String {
        match self {
            Self::SmartUi => Role::from_index(index)
                .map(|r| r.label().to_string())
                .unwrap_or_else(|| format!("Color {}", index + 1)),
            _ => format!("Color {}", index + 1),
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmartUi => write!(f, "Smart UI"),
            Self::Complementary => write!(f, "Complementary"),
            Self::Triad => write!(f, "Triad"),
            Self::Tetrad => write!(f, "Tetrad"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Random => write!(f, "Random"),
        }
    }
}

impl FromStr for HarmonyMode {
    type Err = UnknownMode;

    /// Case-insensitive exact match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "smart ui" | "smartui" => Ok(Self::SmartUi),
            "complementary" => Ok(Self::Complementary),
            "triad" => Ok(Self::Triad),
            "tetrad" => Ok(Self::Tetrad),
            "analogous" => Ok(Self::Analogous),
            "random" => Ok(Self::Random),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Error for an unrecognized harmony mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown harmony mode: {0:?}")]
pub struct UnknownMode(pub String);

/// Semantic role of a Smart UI palette slot, assigned by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Background,
    Text,
    Accent,
    Secondary,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Background, Self::Text, Self::Accent, Self::Secondary];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Text => "Text",
            Self::Accent => "Accent",
            Self::Secondary => "Secondary",
        }
    }
}

/// Draw a random base color suitable for seeding a palette.
///
/// Hue is uniform over the wheel; saturation and value stay in the upper
/// half so the base reads as an actual color rather than near-gray mud.
pub fn random_base(rng: &mut impl Rng) -> Hsv {
    Hsv::new(
        rng.random::<f64>(),
        rng.random_range(0.5..=1.0),
        rng.random_range(0.5..=1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn complementary_hues() {
        let colors = HarmonyMode::Complementary.expand(Hsv::new(0.0, 0.8, 0.8), &mut rng());
        assert_eq!(colors.len(), 2);
        assert!((colors[0].h() - 0.0).abs() < 1e-9);
        assert!((colors[1].h() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn triad_hues() {
        let colors = HarmonyMode::Triad.expand(Hsv::new(0.0, 0.8, 0.8), &mut rng());
        assert_eq!(colors.len(), 3);
        assert!((colors[1].h() - 0.33).abs() < 1e-9);
        assert!((colors[2].h() - 0.66).abs() < 1e-9);
    }

    #[test]
    fn tetrad_hues() {
        let colors = HarmonyMode::Tetrad.expand(Hsv::new(0.0, 0.8, 0.8), &mut rng());
        let hues: Vec<f64> = colors.iter().map(|c| c.h()).collect();
        assert_eq!(colors.len(), 4);
        for (got, want) in hues.iter().zip([0.0, 0.25, 0.5, 0.75]) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn analogous_centers_base_and_wraps() {
        let colors = HarmonyMode::Analogous.expand(Hsv::new(0.05, 0.8, 0.8), &mut rng());
        assert_eq!(colors.len(), 3);
        assert!((colors[0].h() - 0.95).abs() < 1e-9);
        assert!((colors[1].h() - 0.05).abs() < 1e-9);
        assert!((colors[2].h() - 0.15).abs() < 1e-9);
    }

    #[test]
    fn smart_ui_dark_base() {
        let colors = HarmonyMode::SmartUi.expand(Hsv::new(0.6, 0.5, 0.3), &mut rng());
        assert_eq!(colors.len(), 4);
        // Background
        assert!((colors[0].v() - 0.12).abs() < 1e-9);
        assert!((colors[0].s() - 0.1).abs() < 1e-9);
        // Text stays light on a dark background
        assert!((colors[1].v() - 0.95).abs() < 1e-9);
        assert!((colors[1].s() - 0.1).abs() < 1e-9);
        // Accent is the complement
        assert!((colors[2].h() - 0.1).abs() < 1e-9);
        assert!((colors[2].s() - 0.8).abs() < 1e-9);
        assert!((colors[2].v() - 0.9).abs() < 1e-9);
        // Secondary
        assert!((colors[3].h() - 0.7).abs() < 1e-9);
        assert!((colors[3].v() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn smart_ui_light_base() {
        let colors = HarmonyMode::SmartUi.expand(Hsv::new(0.6, 0.5, 0.7), &mut rng());
        assert!((colors[0].v() - 0.98).abs() < 1e-9);
        assert!((colors[1].v() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn random_mode_keeps_base_and_bounds() {
        let base = Hsv::new(0.2, 0.9, 0.9);
        let colors = HarmonyMode::Random.expand(base, &mut rng());
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0], base);
        for c in &colors[1..] {
            assert!((0.0..1.0).contains(&c.h()));
            assert!((0.4..=1.0).contains(&c.s()));
            assert!((0.4..=1.0).contains(&c.v()));
        }
    }

    #[test]
    fn random_mode_is_seed_reproducible() {
        let base = Hsv::new(0.2, 0.9, 0.9);
        let a = HarmonyMode::Random.expand(base, &mut StdRng::seed_from_u64(42));
        let b = HarmonyMode::Random.expand(base, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn palette_len_matches_expansion() {
        let base = Hsv::new(0.4, 0.6, 0.6);
        for mode in HarmonyMode::ALL {
            assert_eq!(mode.expand(base, &mut rng()).len(), mode.palette_len());
        }
    }

    #[test]
    fn mode_names_roundtrip() {
        for mode in HarmonyMode::ALL {
            let parsed: HarmonyMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("pentad".parse::<HarmonyMode>().is_err());
    }

    #[test]
    fn smart_ui_slot_labels() {
        assert_eq!(HarmonyMode::SmartUi.slot_label(0), "Background");
        assert_eq!(HarmonyMode::SmartUi.slot_label(3), "Secondary");
        assert_eq!(HarmonyMode::Triad.slot_label(0), "Color 1");
    }

    #[test]
    fn random_base_bounds() {
        let mut r = rng();
        for _ in 0..32 {
            let c = random_base(&mut r);
            assert!((0.5..=1.0).contains(&c.s()));
            assert!((0.5..=1.0).contains(&c.v()));
        }
    }
}
