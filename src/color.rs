//! Hsv type — the canonical color representation for palette generation.
//!
//! Stores hue/saturation/value as f64 in the 0.0–1.0 range. Hex strings
//! (`#rrggbb`) are a presentation encoding derived on demand; all generation
//! and tuning happens in HSV.

use serde::{Deserialize, Serialize};

use crate::math;

/// HSV color with components in the 0.0–1.0 range.
///
/// Hue is cyclic and wraps modulo 1.0; saturation and value are clamped.
/// The constructor enforces both, so a stored `Hsv` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    /// Pure black, also the fallback for unparseable hex input.
    pub const BLACK: Hsv = Hsv { h: 0.0, s: 0.0, v: 0.0 };

    /// Pure white.
    pub const WHITE: Hsv = Hsv { h: 0.0, s: 0.0, v: 1.0 };

    /// Create a color, wrapping hue and clamping saturation/value.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Hue component (0.0–1.0, cyclic).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation component (0.0–1.0).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Value component (0.0–1.0).
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Parse a hex string, with or without a leading `#`.
    ///
    /// Anything that is not exactly 6 hex digits after stripping the prefix
    /// yields [`Hsv::BLACK`] instead of an error. Callers that want strict
    /// validation must check the input themselves; the silent fallback is
    /// part of the public contract.
    pub fn from_hex(hex: &str) -> Self {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::BLACK;
        }
        // Length and digit checks above make these parses infallible.
        let r = u8::from_str_radix(&stripped[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&stripped[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&stripped[4..6], 16).unwrap_or(0);
        let (h, s, v) = math::rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self::new(h, s, v)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert to 0–255 RGB, rounding to the nearest integer per channel.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let (r, g, b) = math::hsv_to_rgb(self.h, self.s, self.v);
        (
            (r * 255.0).round().clamp(0.0, 255.0) as u8,
            (g * 255.0).round().clamp(0.0, 255.0) as u8,
            (b * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }

    /// New color with the same saturation/value and a rotated hue.
    pub fn rotate_hue(&self, offset: f64) -> Self {
        Self::new(self.h + offset, self.s, self.v)
    }

    /// New color with substituted saturation.
    pub fn with_saturation(&self, s: f64) -> Self {
        Self::new(self.h, s, self.v)
    }

    /// New color with substituted value.
    pub fn with_value(&self, v: f64) -> Self {
        Self::new(self.h, self.s, v)
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        let a = Hsv::from_hex("#bb86fc");
        let b = Hsv::from_hex("bb86fc");
        assert_eq!(a, b);
        assert!(a.v() > 0.9);
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        assert_eq!(Hsv::from_hex("#ZZZZZZ"), Hsv::BLACK);
        assert_eq!(Hsv::from_hex("#ABC"), Hsv::BLACK);
        assert_eq!(Hsv::from_hex(""), Hsv::BLACK);
        assert_eq!(Hsv::from_hex("#bb86fc00"), Hsv::BLACK);
    }

    #[test]
    fn hex_roundtrip_within_one_per_channel() {
        for hex in ["#000000", "#ffffff", "#bb86fc", "#03dac6", "#cf6679", "#123456"] {
            let color = Hsv::from_hex(hex);
            let (r, g, b) = color.to_rgb8();
            let er = u8::from_str_radix(&hex[1..3], 16).unwrap();
            let eg = u8::from_str_radix(&hex[3..5], 16).unwrap();
            let eb = u8::from_str_radix(&hex[5..7], 16).unwrap();
            assert!((r as i16 - er as i16).abs() <= 1, "{hex} red drift");
            assert!((g as i16 - eg as i16).abs() <= 1, "{hex} green drift");
            assert!((b as i16 - eb as i16).abs() <= 1, "{hex} blue drift");
        }
    }

    #[test]
    fn hue_survives_hex_roundtrip_when_saturated() {
        let color = Hsv::new(0.62, 0.8, 0.7);
        let back = Hsv::from_hex(&color.to_hex());
        assert!((color.h() - back.h()).abs() < 0.01);
    }

    #[test]
    fn constructor_wraps_and_clamps() {
        let c = Hsv::new(1.3, 1.5, -0.2);
        assert!((c.h() - 0.3).abs() < 1e-9);
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.v(), 0.0);

        let c = Hsv::new(-0.1, 0.5, 0.5);
        assert!((c.h() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn rotate_hue_wraps() {
        let c = Hsv::new(0.9, 1.0, 1.0).rotate_hue(0.2);
        assert!((c.h() - 0.1).abs() < 1e-9);
    }
}
