//! Configuration for the sandbox.

use serde::{Deserialize, Serialize};

/// How sand picks a diagonal when the cell below is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagonalPolicy {
    /// Try both diagonals in random order; the first vacant one wins.
    #[default]
    TryBoth,
    /// Pick one random diagonal and give up if it is blocked. Simplified
    /// mode: piles settle steeper because grains can rest against a blocked
    /// side the other diagonal would have accepted.
    SinglePick,
}

/// How occupied cells map to colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteMode {
    /// Fixed per-species colors.
    #[default]
    Fixed,
    /// Render every occupied cell from its stamped hue byte.
    Hue,
}

/// Main configuration for the sandbox demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Square cell edge in pixels; grid dimensions derive from it
    pub cell_size: u32,
    /// Brush half-width in cells (1 = a 3x3 block)
    pub block_radius: i32,
    /// Per-cell chance a stamped block actually drops a particle
    pub drop_chance: f64,
    /// Chance a vacant same-row target still refuses a move
    pub lateral_refusal: f64,
    /// Hue cursor start (hue palette)
    pub hue_start: u8,
    /// Hue cursor increment per placed block
    pub hue_step: u8,
    /// Color mapping mode
    pub palette: PaletteMode,
    /// Diagonal handling for sand
    pub diagonal: DiagonalPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 8,
            block_radius: 1,
            drop_chance: 0.75,
            lateral_refusal: 0.5,
            hue_start: 0,
            hue_step: 4,
            palette: PaletteMode::Fixed,
            diagonal: DiagonalPolicy::TryBoth,
        }
    }
}

impl SimConfig {
    /// Load config with defaults
    #[must_use]
    pub fn load() -> Self {
        Self::default()
    }

    /// Grid columns: the canvas width floored to whole cells.
    #[must_use]
    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Grid rows: the canvas height floored to whole cells.
    #[must_use]
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_derives_a_75x75_grid() {
        let config = SimConfig::default();
        assert_eq!(config.cols(), 75);
        assert_eq!(config.rows(), 75);
    }

    #[test]
    fn grid_dimensions_floor_partial_cells() {
        let config = SimConfig {
            width: 610,
            height: 599,
            ..SimConfig::default()
        };
        assert_eq!(config.cols(), 76);
        assert_eq!(config.rows(), 74);
    }

    #[test]
    fn load_matches_defaults() {
        let config = SimConfig::load();
        assert_eq!(config.cell_size, 8);
        assert!((config.drop_chance - 0.75).abs() < f64::EPSILON);
        assert!((config.lateral_refusal - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.block_radius, 1);
        assert_eq!(config.palette, PaletteMode::Fixed);
        assert_eq!(config.diagonal, DiagonalPolicy::TryBoth);
    }
}
