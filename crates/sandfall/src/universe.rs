//! Browser-facing facade: one object owning the grid, the brush, and the
//! RGBA buffer the canvas host blits every frame.
//!
//! The host's animation-frame callback calls [`Universe::tick`] once, then
//! reads [`Universe::pixels_ptr`] straight out of linear memory and paints.
//! Pointer handlers call [`Universe::paint`] between frames. The host
//! installs its own logger (`console_log` in the browser, `env_logger`
//! natively); this crate only talks to the `log` facade.

use wasm_bindgen::prelude::*;

use crate::brush::Brush;
use crate::cell::{Cell, Species};
use crate::config::SimConfig;
use crate::{palette, Grid};

/// A complete simulation instance.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    config: SimConfig,
    grid: Grid,
    brush: Brush,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// Universe with `cols x rows` cells and default tuning.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Universe {
        let mut config = SimConfig::load();
        config.width = cols * config.cell_size;
        config.height = rows * config.cell_size;
        Self::with_config(config)
    }

    /// Advance the simulation one tick, then refresh the pixel buffer.
    pub fn tick(&mut self) {
        self.grid.tick();
        self.sync_pixels();
    }

    /// Stamp a brush block of the given raw species at a cell coordinate.
    /// The host converts pointer pixels to cells with [`Universe::cell_size`].
    pub fn paint(&mut self, x: i32, y: i32, species: u8) {
        self.stamp(x, y, Species::from_u8(species));
    }

    /// Write one cell directly, bypassing the brush (tools, tests).
    pub fn set_cell(&mut self, x: i32, y: i32, species: u8) {
        self.grid.set(x, y, Cell::new(Species::from_u8(species)));
    }

    /// Empty the grid.
    pub fn clear(&mut self) {
        log::debug!("clearing {}x{} grid", self.grid.cols, self.grid.rows);
        self.grid.clear();
        self.sync_pixels();
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.grid.cols as u32
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.grid.rows as u32
    }

    /// Square cell edge in canvas pixels.
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    /// Completed ticks since construction.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.grid.ticks
    }

    /// Occupied-cell count (host HUD).
    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.grid.occupied() as u32
    }

    /// Raw cell buffer in linear memory: `cols * rows` 2-byte cells,
    /// row-major.
    #[must_use]
    pub fn cells_ptr(&self) -> *const Cell {
        self.grid.cells.as_ptr()
    }

    /// RGBA buffer in linear memory: `cols * rows * 4` bytes, refreshed by
    /// [`Universe::tick`] and [`Universe::clear`].
    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }
}

impl Universe {
    /// Build from an explicit config (native embedding, tests).
    #[must_use]
    pub fn with_config(config: SimConfig) -> Self {
        let grid = Grid::from_config(&config);
        Self::assemble(config, grid)
    }

    /// Deterministic twin of [`Universe::with_config`].
    #[must_use]
    pub fn with_config_seeded(config: SimConfig, seed: u64) -> Self {
        let grid = Grid::from_config_seeded(&config, seed);
        Self::assemble(config, grid)
    }

    fn assemble(config: SimConfig, grid: Grid) -> Self {
        log::info!(
            "universe: {}x{} cells at {}px",
            grid.cols,
            grid.rows,
            config.cell_size
        );
        let brush = Brush::from_config(&config);
        let pixels = vec![0; grid.cols * grid.rows * 4];
        let mut universe = Self {
            config,
            grid,
            brush,
            pixels,
        };
        universe.sync_pixels();
        universe
    }

    /// Stamp a brush block with a typed species.
    pub fn stamp(&mut self, x: i32, y: i32, species: Species) {
        self.brush.stamp(&mut self.grid, x, y, species);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn sync_pixels(&mut self) {
        let mode = self.config.palette;
        for (cell, px) in self
            .grid
            .cells
            .iter()
            .zip(self.pixels.chunks_exact_mut(4))
        {
            px.copy_from_slice(&palette::rgba(*cell, mode));
        }
    }
}
