//! Text rendering for exported palette sheets.
//!
//! Prefers a real TTF rasterized through fontdue when one can be found on
//! the host; otherwise falls back to a built-in 5×7 bitmap font covering the
//! label charset (hex digits plus the contrast caption). Export never fails
//! because a font is missing.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::warn;

/// Pixel size used for TTF rasterization.
const TTF_PX: f32 = 24.0;

/// Scale factor applied to the 5×7 builtin glyphs.
const BUILTIN_SCALE: u32 = 3;

/// Horizontal advance of a builtin glyph, in unscaled cells.
const BUILTIN_ADVANCE: u32 = 6;

/// Candidate font files probed by [`FontSource::detect`], in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// A source of glyphs for label text.
pub enum FontSource {
    Truetype(fontdue::Font),
    Builtin,
}

impl FontSource {
    /// Probe well-known system font paths, falling back to the builtin
    /// bitmap font when none parses.
    pub fn detect() -> Self {
        for path in FONT_CANDIDATES {
            if let Some(font) = Self::load(Path::new(path)) {
                return font;
            }
        }
        warn!("no system font found, using builtin bitmap font");
        Self::Builtin
    }

    fn load(path: &Path) -> Option<Self> {
        let bytes = fs::read(path).ok()?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).ok()?;
        Some(Self::Truetype(font))
    }

    /// Draw `text` with its top-left corner at (x, y).
    ///
    /// Pixels outside the image are clipped, never panicked on.
    pub fn draw_text(&self, img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        match self {
            Self::Truetype(font) => draw_ttf(font, img, x, y, text, color),
            Self::Builtin => draw_builtin(img, x, y, text, color),
        }
    }
}

fn draw_ttf(font: &fontdue::Font, img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
    let ascent = font
        .horizontal_line_metrics(TTF_PX)
        .map(|m| m.ascent)
        .unwrap_or(TTF_PX);
    let baseline = y + ascent.round() as i64;
    let mut pen_x = x as f32;
    for ch in text.chars() {
        let (metrics, bitmap) = font.rasterize(ch, TTF_PX);
        let glyph_x = pen_x.round() as i64 + metrics.xmin as i64;
        let glyph_top = baseline - metrics.ymin as i64 - metrics.height as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col];
                if coverage > 0 {
                    blend(
                        img,
                        glyph_x + col as i64,
                        glyph_top + row as i64,
                        color,
                        coverage,
                    );
                }
            }
        }
        pen_x += metrics.advance_width;
    }
}

fn draw_builtin(img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
    let mut pen_x = x;
    for ch in text.chars() {
        let rows = builtin_glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if bits & (0x10u8 >> col) != 0 {
                    // Scaled-up pixel block
                    for dy in 0..BUILTIN_SCALE {
                        for dx in 0..BUILTIN_SCALE {
                            blend(
                                img,
                                pen_x + (col * BUILTIN_SCALE + dx) as i64,
                                y + (row as u32 * BUILTIN_SCALE + dy) as i64,
                                color,
                                255,
                            );
                        }
                    }
                }
            }
        }
        pen_x += (BUILTIN_ADVANCE * BUILTIN_SCALE) as i64;
    }
}

fn blend(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: u8) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let a = coverage as u16;
    for i in 0..3 {
        let blended = (color.0[i] as u16 * a + dst.0[i] as u16 * (255 - a)) / 255;
        dst.0[i] = blended as u8;
    }
}

/// 5×7 glyph rows, MSB-left in the low 5 bits.
///
/// Covers the export label charset: `#rrggbb` codes and the
/// `On White: 12.3` caption. Unknown characters render as a filled box so
/// a charset gap is visible in output instead of silently dropped.
fn builtin_glyph(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        'f' => [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08],
        'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
        'i' => [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E],
        'n' => [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11],
        't' => [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        ' ' => [0x00; 7],
        _ => [0x1F; 7],
    }
}
