//! Sand element: falls straight down, otherwise rolls to a diagonal.

use crate::api::SandApi;
use crate::config::DiagonalPolicy;

pub fn update_sand(api: &mut SandApi) {
    if api.try_move(0, 1) {
        return;
    }

    // Blocked below: roll toward a diagonal, sides in random order.
    let sides = api.shuffled_sides();
    match api.grid.diagonal {
        DiagonalPolicy::TryBoth => {
            for dx in sides {
                if api.try_move(dx, 1) {
                    return;
                }
            }
        }
        DiagonalPolicy::SinglePick => {
            api.try_move(sides[0], 1);
        }
    }
}
