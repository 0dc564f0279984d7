//! Cell color mapping for the host's raster surface.

use crate::cell::{Cell, Species};
use crate::config::PaletteMode;

/// Opaque sand yellow.
const SAND_RGBA: [u8; 4] = [255, 255, 0, 255];
/// Translucent water blue.
const WATER_RGBA: [u8; 4] = [0, 150, 255, 178];
/// Empty cells leave the background visible.
const CLEAR_RGBA: [u8; 4] = [0, 0, 0, 0];

/// RGBA for one cell under the given palette mode.
#[must_use]
pub fn rgba(cell: Cell, mode: PaletteMode) -> [u8; 4] {
    match (mode, cell.species) {
        (_, Species::Empty | Species::Boundary) => CLEAR_RGBA,
        (PaletteMode::Fixed, Species::Sand) => SAND_RGBA,
        (PaletteMode::Fixed, Species::Water) => WATER_RGBA,
        (PaletteMode::Hue, _) => hue_rgba(cell.hue),
    }
}

/// Fully saturated, half-lightness color from a hue byte (256 steps per
/// turn).
fn hue_rgba(hue: u8) -> [u8; 4] {
    let degrees = f32::from(hue) / 256.0 * 360.0;
    let (r, g, b) = hsl_to_rgb(degrees, 1.0, 0.5);
    [r, g, b, 255]
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}
