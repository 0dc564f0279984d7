//! Falling sand and water simulation engine.
//!
//! The [`Grid`] owns all simulation state; [`Universe`] wraps it for a
//! canvas host. One [`Grid::tick`] advances every particle by at most one
//! move, once per animation frame.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod elements;
pub mod palette;
pub mod runner;
pub mod universe;

use cell::{Cell, Species};
use config::{DiagonalPolicy, SimConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub use universe::Universe;

/// 2D grid of cells. Out-of-bounds reads return Boundary, writes are no-ops.
///
/// The grid is the whole simulation context: it owns the cells, the RNG,
/// and the movement tuning. Construct once at startup, mutate through
/// methods, discard at shutdown — there are no process-level globals.
#[derive(Debug)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<Cell>,
    /// Completed [`Grid::tick`] calls since construction.
    pub ticks: u64,
    /// Probability that a vacant same-row target still refuses a move.
    /// Throttles lateral spread so flow looks viscous.
    pub lateral_refusal: f64,
    /// How sand handles a blocked straight-down path.
    pub diagonal: DiagonalPolicy,
    rng: Xoshiro256PlusPlus,
}

impl Grid {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_rng(cols, rows, Xoshiro256PlusPlus::from_entropy())
    }

    /// Deterministic twin of [`Grid::new`] for tests and replays.
    #[must_use]
    pub fn seeded(cols: usize, rows: usize, seed: u64) -> Self {
        Self::with_rng(cols, rows, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    /// Dimensions derived from the configured canvas, tuning copied over.
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        let mut grid = Self::new(config.cols(), config.rows());
        grid.lateral_refusal = config.lateral_refusal;
        grid.diagonal = config.diagonal;
        grid
    }

    /// Deterministic twin of [`Grid::from_config`].
    #[must_use]
    pub fn from_config_seeded(config: &SimConfig, seed: u64) -> Self {
        let mut grid = Self::seeded(config.cols(), config.rows(), seed);
        grid.lateral_refusal = config.lateral_refusal;
        grid.diagonal = config.diagonal;
        grid
    }

    fn with_rng(cols: usize, rows: usize, rng: Xoshiro256PlusPlus) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::empty(); cols * rows],
            ticks: 0,
            lateral_refusal: 0.5,
            diagonal: DiagonalPolicy::TryBoth,
            rng,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.cols && y >= 0 && (y as usize) < self.rows
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.cols + x as usize]
        } else {
            Cell::boundary()
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.cols + x as usize] = cell;
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.species != Species::Empty)
            .count()
    }

    /// Reset every cell to Empty. Dimensions, tuning, and RNG state stay.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Move the cell at `(x, y)` into `(target_x, target_y)` if the target
    /// is a vacant grid cell. Returns whether the move happened.
    ///
    /// Same-row moves must additionally pass the [`Grid::lateral_refusal`]
    /// roll, so lateral spread stays throttled even with a vacant neighbor.
    /// Vertical and diagonal moves are never gated here. On success the
    /// target becomes a copy of the source (species and hue preserved) and
    /// the source becomes Empty — exactly one cell vacated, exactly one
    /// filled.
    ///
    /// A refusal is a normal outcome, not an error. Callers are expected to
    /// pass an occupied, in-bounds source; anything else refuses the move.
    pub fn try_move(&mut self, x: i32, y: i32, target_x: i32, target_y: i32) -> bool {
        if !self.in_bounds(x, y) || !self.in_bounds(target_x, target_y) {
            return false;
        }
        if self.get(target_x, target_y).species != Species::Empty {
            return false;
        }
        if target_y == y && self.rng.gen::<f64>() < self.lateral_refusal {
            return false;
        }
        let moved = self.get(x, y);
        self.set(target_x, target_y, moved);
        self.set(x, y, Cell::empty());
        true
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans rows bottom-to-top and each row left-to-right. Bottom-to-top
    /// is load-bearing: a particle that falls one row lands behind the scan
    /// front, so a single tick can never cascade it through several rows.
    pub fn tick(&mut self) {
        self.ticks += 1;
        let cols = self.cols as i32;
        let rows = self.rows as i32;

        for y in (0..rows).rev() {
            for x in 0..cols {
                let species = self.get(x, y).species;
                if species == Species::Empty {
                    continue;
                }
                let mut cell_api = api::SandApi::new(self, x, y);
                elements::update_cell(species, &mut cell_api);
            }
        }
    }

    /// Uniform draw against a probability threshold.
    pub(crate) fn roll(&mut self, chance: f64) -> bool {
        self.rng.gen::<f64>() < chance
    }

    pub(crate) fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
