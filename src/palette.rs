//! Mutable palette state.
//!
//! Owns the ordered color list produced by a harmony expansion and supports
//! the two mutations the interactive flow needs: wholesale replacement on
//! regeneration, and targeted single-entry updates from fine-tuning.
//! Single-writer by contract; callers wrapping this in a concurrent layer
//! must serialize mutations themselves.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Hsv;
use crate::contrast::ContrastReport;
use crate::harmony::HarmonyMode;

/// Error from palette mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A fine-tune targeted a slot the palette does not have.
    #[error("palette index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// An ordered set of colors plus the mode that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Hsv>,
    mode: HarmonyMode,
}

/// Read model for one palette slot: everything a view or exporter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub label: String,
    pub color: Hsv,
    pub hex: String,
    pub report: ContrastReport,
}

impl Palette {
    /// Generate a palette from a base color and harmony mode.
    pub fn generate(base: Hsv, mode: HarmonyMode, rng: &mut impl Rng) -> Self {
        Self {
            colors: mode.expand(base, rng),
            mode,
        }
    }

    /// Regenerate in place, replacing every entry.
    pub fn regenerate(&mut self, base: Hsv, mode: HarmonyMode, rng: &mut impl Rng) {
        self.colors = mode.expand(base, rng);
        self.mode = mode;
    }

    /// Replace the full color list, keeping the current mode.
    pub fn replace_all(&mut self, colors: Vec<Hsv>) {
        self.colors = colors;
    }

    /// Replace the entry at `index`.
    ///
    /// The palette is left untouched when the index is out of bounds.
    pub fn update_at(&mut self, index: usize, color: Hsv) -> Result<(), PaletteError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfBounds { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Fine-tune one entry: substitute saturation and value, keep hue.
    pub fn tune_at(&mut self, index: usize, s: f64, v: f64) -> Result<(), PaletteError> {
        let current = *self
            .colors
            .get(index)
            .ok_or(PaletteError::IndexOutOfBounds {
                index,
                len: self.colors.len(),
            })?;
        self.update_at(index, current.with_saturation(s).with_value(v))
    }

    pub fn mode(&self) -> HarmonyMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Hsv> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Hsv] {
        &self.colors
    }

    /// Per-slot read model: label, hex code, and contrast report.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| Swatch {
                index,
                label: self.mode.slot_label(index),
                color,
                hex: color.to_hex(),
                report: ContrastReport::for_color(color),
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            mode: HarmonyMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Rating;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn triad() -> Palette {
        Palette::generate(
            Hsv::new(0.0, 0.8, 0.8),
            HarmonyMode::Triad,
            &mut StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn generate_stores_mode_and_colors() {
        let palette = triad();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.mode(), HarmonyMode::Triad);
        assert!(!palette.is_empty());
    }

    #[test]
    fn update_at_replaces_single_entry() {
        let mut palette = triad();
        let replacement = Hsv::new(0.5, 0.5, 0.5);
        palette.update_at(1, replacement).unwrap();
        assert_eq!(palette.get(1), Some(replacement));
        // Neighbors untouched
        assert!((palette.get(0).unwrap().h() - 0.0).abs() < 1e-9);
        assert!((palette.get(2).unwrap().h() - 0.66).abs() < 1e-9);
    }

    #[test]
    fn update_out_of_bounds_leaves_palette_unmodified() {
        let mut palette = triad();
        let before = palette.clone();
        let err = palette.update_at(3, Hsv::BLACK).unwrap_err();
        assert_eq!(err, PaletteError::IndexOutOfBounds { index: 3, len: 3 });
        assert_eq!(palette, before);

        let err = palette.tune_at(10, 0.5, 0.5).unwrap_err();
        assert_eq!(err, PaletteError::IndexOutOfBounds { index: 10, len: 3 });
        assert_eq!(palette, before);
    }

    #[test]
    fn tune_at_preserves_hue() {
        let mut palette = triad();
        let hue = palette.get(2).unwrap().h();
        palette.tune_at(2, 0.25, 0.4).unwrap();
        let tuned = palette.get(2).unwrap();
        assert!((tuned.h() - hue).abs() < 1e-12);
        assert!((tuned.s() - 0.25).abs() < 1e-9);
        assert!((tuned.v() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn regenerate_replaces_colors_and_mode() {
        let mut palette = triad();
        palette.regenerate(
            Hsv::new(0.3, 0.7, 0.7),
            HarmonyMode::Complementary,
            &mut StdRng::seed_from_u64(2),
        );
        assert_eq!(palette.mode(), HarmonyMode::Complementary);
        assert_eq!(palette.len(), 2);
        assert!((palette.get(1).unwrap().h() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut palette = triad();
        palette.replace_all(vec![Hsv::WHITE]);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(0), Some(Hsv::WHITE));
        assert_eq!(palette.mode(), HarmonyMode::Triad);
    }

    #[test]
    fn swatches_expose_hex_labels_and_contrast() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = Palette::generate(Hsv::new(0.6, 0.5, 0.3), HarmonyMode::SmartUi, &mut rng);
        let swatches = palette.swatches();
        assert_eq!(swatches.len(), 4);
        assert_eq!(swatches[0].label, "Background");
        assert_eq!(swatches[1].label, "Text");
        for swatch in &swatches {
            assert_eq!(swatch.hex, swatch.color.to_hex());
            assert!(swatch.hex.starts_with('#'));
        }
        // Dark background reads well under white text
        assert_eq!(swatches[0].report.on_white.rating, Rating::Aaa);
    }
}
