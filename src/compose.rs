//! Canvas composition: background fill and centered glyph drawing.

use image::{Rgba, RgbaImage};

use crate::color::Rgb;

/// Glyph point size as a fraction of the canvas dimension.
///
/// Scales with the canvas so the letter keeps its proportions at any size.
pub(crate) const FONT_SIZE_RATIO: f32 = 0.6;

/// The letter color: a fixed light tone, never derived from the background.
///
/// Legibility against arbitrary random backgrounds comes from the tone
/// being near-white while random RGB backgrounds rarely are; there is no
/// computed contrast guarantee.
pub(crate) const TEXT_COLOR: Rgb = Rgb {
    r: 250,
    g: 250,
    b: 250,
};

/// Composes the avatar canvas: a `size` x `size` square filled with
/// `background`, with `letter` drawn centered in the fixed text color.
///
/// The glyph is rasterized at [`FONT_SIZE_RATIO`] of the canvas dimension.
/// fontdue reports the tight pixel bounding box of the rendered glyph, so
/// placing that box at `((size - w) / 2, (size - h) / 2)` centers the
/// visual extent of the letter rather than its baseline origin.
pub(crate) fn compose(letter: char, background: Rgb, size: u32, font: &fontdue::Font) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        size,
        size,
        Rgba([background.r, background.g, background.b, 255]),
    );

    let px = size as f32 * FONT_SIZE_RATIO;
    let (metrics, coverage) = font.rasterize(letter, px);
    log::debug!(
        "composing {size}x{size} canvas, letter '{letter}' at {px}px ({}x{} glyph) on {background}",
        metrics.width,
        metrics.height,
    );

    let origin_x = (size as i64 - metrics.width as i64) / 2;
    let origin_y = (size as i64 - metrics.height as i64) / 2;
    log::trace!("glyph draw origin: ({origin_x}, {origin_y})");

    for row in 0..metrics.height {
        for col in 0..metrics.width {
            let alpha = coverage[row * metrics.width + col];
            if alpha == 0 {
                continue;
            }
            let x = origin_x + col as i64;
            let y = origin_y + row as i64;
            if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            pixel.0 = [
                blend(TEXT_COLOR.r, pixel.0[0], alpha),
                blend(TEXT_COLOR.g, pixel.0[1], alpha),
                blend(TEXT_COLOR.b, pixel.0[2], alpha),
                255,
            ];
        }
    }

    canvas
}

/// Blends one text-color channel over a background channel by rasterizer
/// coverage, rounding to nearest.
fn blend(fg: u8, bg: u8, coverage: u8) -> u8 {
    let c = coverage as u32;
    ((fg as u32 * c + bg as u32 * (255 - c) + 127) / 255) as u8
}

// ============================================================================
// Tests
// ============================================================================
