//! Per-element update functions dispatched from the tick loop.

mod sand;
mod water;


use crate::api::SandApi;
use crate::cell::Species;

/// Dispatch to the appropriate element update function.
///
/// Empty cells are skipped before calling this; Boundary never appears in
/// the grid.
pub fn update_cell(species: Species, api: &mut SandApi) {
    match species {
        Species::Sand => sand::update_sand(api),
        Species::Water => water::update_water(api),
        Species::Empty | Species::Boundary => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{Cell, Species};
    use crate::Grid;
    use proptest::prelude::*;

    /// Helper: count occurrences of each species in the grid.
    fn species_counts(grid: &Grid) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for cell in &grid.cells {
            counts[cell.species as usize] += 1;
        }
        counts
    }

    proptest! {
        /// A tick moves particles around but never creates or destroys
        /// them: per-species counts are invariant.
        #[test]
        fn prop_tick_conserves_species_counts(
            species in proptest::collection::vec(
                prop_oneof![
                    Just(Species::Empty),
                    Just(Species::Sand),
                    Just(Species::Water),
                ],
                16 * 16,
            ),
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::seeded(16, 16, seed);
            for (i, &sp) in species.iter().enumerate() {
                grid.cells[i] = Cell::new(sp);
            }

            let before = species_counts(&grid);
            grid.tick();
            let after = species_counts(&grid);

            prop_assert_eq!(before, after);
        }
    }

    proptest! {
        /// Hue bytes travel with their particles: the multiset of occupied
        /// cells is preserved across a tick.
        #[test]
        fn prop_tick_preserves_occupied_cell_values(
            cells in proptest::collection::vec(
                (
                    prop_oneof![
                        Just(Species::Empty),
                        Just(Species::Sand),
                        Just(Species::Water),
                    ],
                    any::<u8>(),
                ),
                16 * 16,
            ),
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::seeded(16, 16, seed);
            for (i, &(sp, hue)) in cells.iter().enumerate() {
                grid.cells[i] = Cell::hued(sp, hue);
            }

            let mut before: Vec<Cell> = grid
                .cells
                .iter()
                .copied()
                .filter(|c| c.species != Species::Empty)
                .collect();
            grid.tick();
            let mut after: Vec<Cell> = grid
                .cells
                .iter()
                .copied()
                .filter(|c| c.species != Species::Empty)
                .collect();

            before.sort_unstable_by_key(|c| (c.species as u8, c.hue));
            after.sort_unstable_by_key(|c| (c.species as u8, c.hue));
            prop_assert_eq!(before, after);
        }
    }

    proptest! {
        #[test]
        fn prop_empty_grid_stays_empty(seed in any::<u64>()) {
            let mut grid = Grid::seeded(16, 16, seed);
            grid.tick();
            prop_assert_eq!(grid.occupied(), 0);
        }
    }
}
