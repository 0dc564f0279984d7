//! Relative-offset API for element update functions.

use crate::cell::Cell;
use crate::Grid;

/// View pinned to the cell currently being updated. All movement funnels
/// through [`Grid::try_move`], so bounds checks and the lateral gate apply
/// uniformly no matter which element rule is running.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.get(self.x + dx, self.y + dy)
    }

    /// Attempt to move this cell by `(dx, dy)`.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        self.grid
            .try_move(self.x, self.y, self.x + dx, self.y + dy)
    }

    /// The left and right offsets in uniformly random order — an explicit
    /// coin flip, so neither side is favored across ticks.
    pub fn shuffled_sides(&mut self) -> [i32; 2] {
        if self.grid.coin_flip() {
            [-1, 1]
        } else {
            [1, -1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Species;
    use proptest::prelude::*;

    #[test]
    fn get_reads_relative_to_the_pinned_cell() {
        let mut grid = Grid::seeded(8, 8, 1);
        grid.set(4, 5, Cell::hued(Species::Water, 3));
        let cell_api = SandApi::new(&mut grid, 3, 4);
        assert_eq!(cell_api.get(1, 1), Cell::hued(Species::Water, 3));
        assert_eq!(cell_api.get(0, 0), Cell::empty());
    }

    #[test]
    fn get_past_the_edge_reads_boundary() {
        let mut grid = Grid::seeded(8, 8, 1);
        let cell_api = SandApi::new(&mut grid, 0, 7);
        assert_eq!(cell_api.get(-1, 0).species, Species::Boundary);
        assert_eq!(cell_api.get(0, 1).species, Species::Boundary);
    }

    #[test]
    fn try_move_relocates_the_pinned_cell() {
        let mut grid = Grid::seeded(8, 8, 1);
        grid.set(4, 4, Cell::new(Species::Sand));
        let mut cell_api = SandApi::new(&mut grid, 4, 4);
        assert!(cell_api.try_move(0, 1));
        assert_eq!(grid.get(4, 4), Cell::empty());
        assert_eq!(grid.get(4, 5).species, Species::Sand);
    }

    #[test]
    fn shuffled_sides_yields_both_orders() {
        let mut grid = Grid::seeded(2, 2, 99);
        let mut cell_api = SandApi::new(&mut grid, 0, 0);
        let mut left_first = 0u32;
        for _ in 0..1_000 {
            if cell_api.shuffled_sides() == [-1, 1] {
                left_first += 1;
            }
        }
        // 1_000 fair coin flips; +-95 is six standard deviations.
        assert!(
            (405..=595).contains(&left_first),
            "left-first orders: {left_first}"
        );
    }

    proptest! {
        /// Relative reads agree with absolute reads for any offset.
        #[test]
        fn prop_relative_get_matches_absolute_get(
            base_x in 0i32..16,
            base_y in 0i32..16,
            dx in -20i32..20,
            dy in -20i32..20,
            hue in any::<u8>(),
        ) {
            let mut grid = Grid::seeded(16, 16, 7);
            let target = (base_x + dx, base_y + dy);
            if grid.in_bounds(target.0, target.1) {
                grid.set(target.0, target.1, Cell::hued(Species::Sand, hue));
            }
            let expected = grid.get(target.0, target.1);
            let cell_api = SandApi::new(&mut grid, base_x, base_y);
            prop_assert_eq!(cell_api.get(dx, dy), expected);
        }
    }
}
