//! # color-alchemy
//!
//! Color palette generation from a base color using classical harmony rules
//! (complementary, triad, tetrad, analogous, role-based Smart UI, random),
//! with WCAG 2.0 contrast evaluation against white and black backgrounds,
//! per-entry fine-tuning, and PNG sheet export.
//!
//! The crate is presentation-agnostic: it takes hex strings and mode
//! selections in, and hands ordered colors, contrast reports, and rendered
//! sheets back. Wiring those to a UI is the caller's concern.
//!
//! ## Usage
//!
//! ```rust
//! use color_alchemy::{HarmonyMode, Hsv, Palette};
//!
//! let base = Hsv::from_hex("#bb86fc");
//! let mut palette = Palette::generate(base, HarmonyMode::Triad, &mut rand::rng());
//!
//! // Fine-tune the second color, keeping its hue.
//! palette.tune_at(1, 0.6, 0.9).unwrap();
//!
//! for swatch in palette.swatches() {
//!     println!(
//!         "{}: {} / on white {:.1} ({})",
//!         swatch.label,
//!         swatch.hex,
//!         swatch.report.on_white.ratio,
//!         swatch.report.on_white.rating.label(),
//!     );
//! }
//! ```

mod color;
mod contrast;
mod export;
mod font;
mod harmony;
mod math;
mod palette;

pub use color::Hsv;
pub use contrast::{contrast_ratio, relative_luminance, ContrastReport, ContrastResult, Rating};
pub use export::{export_png, Column, ExportError, SheetLayout, LABEL_BAND, SHEET_HEIGHT, SHEET_WIDTH};
pub use font::FontSource;
pub use harmony::{random_base, HarmonyMode, Role, UnknownMode};
pub use palette::{Palette, PaletteError, Swatch};
