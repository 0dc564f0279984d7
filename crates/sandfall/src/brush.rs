//! Block stamping: how pointer input drops particles onto the grid.

use crate::cell::{Cell, Species};
use crate::config::SimConfig;
use crate::Grid;

/// Stamps sparse square blocks of particles and owns the hue cursor.
#[derive(Debug)]
pub struct Brush {
    /// Block half-width in cells; radius 1 stamps a 3x3 neighborhood.
    pub radius: i32,
    /// Independent per-cell chance that a candidate actually drops.
    pub drop_chance: f64,
    hue: u8,
    hue_step: u8,
}

impl Brush {
    #[must_use]
    pub fn new(radius: i32, drop_chance: f64) -> Self {
        Self {
            radius,
            drop_chance,
            hue: 0,
            hue_step: 4,
        }
    }

    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            radius: config.block_radius,
            drop_chance: config.drop_chance,
            hue: config.hue_start,
            hue_step: config.hue_step,
        }
    }

    /// Current hue cursor.
    #[must_use]
    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Stamp a block of `species` centered on `(cx, cy)`.
    ///
    /// Candidates falling off the grid are skipped silently — clicks near
    /// an edge are expected. Each in-bounds candidate drops independently
    /// with `drop_chance`, which is what keeps the blob sparse and organic
    /// instead of a solid square. The whole block shares one hue, and the
    /// cursor advances once per block, not per cell.
    pub fn stamp(&mut self, grid: &mut Grid, cx: i32, cy: i32, species: Species) {
        for dy in -self.radius..=self.radius {
            for dx in -self.radius..=self.radius {
                let (x, y) = (cx + dx, cy + dy);
                if !grid.in_bounds(x, y) {
                    continue;
                }
                if !grid.roll(self.drop_chance) {
                    continue;
                }
                grid.set(x, y, Cell::hued(species, self.hue));
            }
        }
        self.hue = self.hue.wrapping_add(self.hue_step);
    }
}
