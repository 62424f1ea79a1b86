//! WCAG 2.0 contrast evaluation.
//!
//! Relative luminance and contrast ratio per the W3C formula, plus the
//! rating levels shown next to each swatch. Luminance is computed from the
//! quantized 8-bit channels, the same values that end up in the hex code.

use serde::{Deserialize, Serialize};

use crate::color::Hsv;

/// Relative luminance of an 8-bit RGB triple, in 0.0–1.0.
///
/// Piecewise gamma linearization per WCAG 2.0: `c / 12.92` below the
/// 0.03928 knee, `((c + 0.055) / 1.055)^2.4` above it.
pub fn relative_luminance(rgb: (u8, u8, u8)) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    let (r, g, b) = rgb;
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG contrast ratio between two colors, in 1.0–21.0.
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: Hsv, b: Hsv) -> f64 {
    let la = relative_luminance(a.to_rgb8());
    let lb = relative_luminance(b.to_rgb8());
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Accessibility rating derived from a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// Ratio >= 7.0.
    Aaa,
    /// Ratio >= 4.5.
    Aa,
    /// Ratio >= 3.0, acceptable for large text only.
    AaLarge,
    /// Ratio below 3.0.
    Fail,
}

impl Rating {
    /// Classify a ratio, checking thresholds from highest to lowest.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Badge text shown next to a swatch.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA (Perfect)",
            Self::Aa => "AA (Good)",
            Self::AaLarge => "AA Large (Ok)",
            Self::Fail => "FAIL",
        }
    }

    /// Fixed indicator color for the badge, as a hex string.
    ///
    /// Display-only; correctness of the rating never depends on it.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Aaa => "#03dac6",
            Self::Aa => "#bb86fc",
            Self::AaLarge => "#ffd700",
            Self::Fail => "#cf6679",
        }
    }
}

/// A contrast ratio against one reference background, with its rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub rating: Rating,
}

impl ContrastResult {
    /// Evaluate `color` against `reference`.
    pub fn evaluate(color: Hsv, reference: Hsv) -> Self {
        let ratio = contrast_ratio(color, reference);
        Self {
            ratio,
            rating: Rating::from_ratio(ratio),
        }
    }
}

/// Contrast of one color against both fixed reference backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub on_white: ContrastResult,
    pub on_black: ContrastResult,
}

impl ContrastReport {
    pub fn for_color(color: Hsv) -> Self {
        Self {
            on_white: ContrastResult::evaluate(color, Hsv::WHITE),
            on_black: ContrastResult::evaluate(color, Hsv::BLACK),
        }
    }
}
