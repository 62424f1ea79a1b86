//! Palette sheet export.
//!
//! Lays a palette out as a fixed 1200×400 sheet of equal-width swatch
//! columns with hex and contrast captions in the bottom band, rasterizes it
//! to an [`RgbImage`], and saves it as PNG. No color science happens here;
//! the numbers come from the contrast module and the hex codes from `Hsv`.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;
use tracing::info;

use crate::color::Hsv;
use crate::contrast;
use crate::font::FontSource;
use crate::palette::Palette;

/// Sheet width in pixels.
pub const SHEET_WIDTH: u32 = 1200;
/// Sheet height in pixels.
pub const SHEET_HEIGHT: u32 = 400;
/// Height of the caption band at the bottom of the sheet.
pub const LABEL_BAND: u32 = 100;

/// Sheet background, behind the caption band and any column remainder.
const BACKGROUND: Rgb<u8> = Rgb([0x12, 0x12, 0x12]);
/// Hex caption color.
const CAPTION: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
/// Contrast caption color.
const CAPTION_DIM: Rgb<u8> = Rgb([0x88, 0x88, 0x88]);

/// Left inset for captions within a column.
const TEXT_INSET: i64 = 20;
/// Caption rows, measured from the top of the sheet.
const HEX_TEXT_Y: i64 = (SHEET_HEIGHT - 80) as i64;
const RATIO_TEXT_Y: i64 = (SHEET_HEIGHT - 40) as i64;

/// Error from sheet export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to lay out.
    #[error("cannot export an empty palette")]
    EmptyPalette,
    /// PNG encode or file write failure.
    #[error("failed to write palette sheet: {0}")]
    Image(#[from] image::ImageError),
}

/// One swatch column of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub x: u32,
    pub width: u32,
    pub color: Hsv,
    pub hex: String,
    /// Contrast ratio against white, the value printed in the caption.
    pub on_white: f64,
}

/// Resolved geometry and captions for a palette sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub columns: Vec<Column>,
}

impl SheetLayout {
    /// Divide the sheet into equal columns, one per palette entry.
    ///
    /// Column width is the integer quotient; any remainder stays as
    /// background on the right edge.
    pub fn new(palette: &Palette) -> Result<Self, ExportError> {
        if palette.is_empty() {
            return Err(ExportError::EmptyPalette);
        }
        let width = SHEET_WIDTH / palette.len() as u32;
        let columns = palette
            .colors()
            .iter()
            .enumerate()
            .map(|(i, &color)| Column {
                x: i as u32 * width,
                width,
                color,
                hex: color.to_hex(),
                on_white: contrast::contrast_ratio(color, Hsv::WHITE),
            })
            .collect();
        Ok(Self { columns })
    }

    /// Rasterize the sheet with the given font source.
    pub fn rasterize(&self, font: &FontSource) -> RgbImage {
        let mut img = RgbImage::from_pixel(SHEET_WIDTH, SHEET_HEIGHT, BACKGROUND);
        let swatch_height = SHEET_HEIGHT - LABEL_BAND;
        for column in &self.columns {
            let (r, g, b) = column.color.to_rgb8();
            let fill = Rgb([r, g, b]);
            for y in 0..swatch_height {
                for x in column.x..column.x + column.width {
                    img.put_pixel(x, y, fill);
                }
            }
            let text_x = column.x as i64 + TEXT_INSET;
            font.draw_text(&mut img, text_x, HEX_TEXT_Y, &column.hex, CAPTION);
            font.draw_text(
                &mut img,
                text_x,
                RATIO_TEXT_Y,
                &format!("On White: {:.1}", column.on_white),
                CAPTION_DIM,
            );
        }
        img
    }
}

/// Render `palette` and save it as a PNG at `path`.
///
/// One-shot blocking write; failures propagate, nothing retries.
pub fn export_png(palette: &Palette, path: &Path) -> Result<(), ExportError> {
    let layout = SheetLayout::new(palette)?;
    let img = layout.rasterize(&FontSource::detect());
    img.save(path)?;
    info!(path = %path.display(), colors = palette.len(), "palette sheet saved");
    Ok(())
}
