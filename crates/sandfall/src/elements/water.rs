//! Water element: falls straight down, otherwise spreads sideways.
//!
//! Lateral attempts run through the refusal gate in `Grid::try_move`, so a
//! vacant neighbor still only accepts the flow about half the time — that
//! throttle is what keeps puddles from flattening instantly.

use crate::api::SandApi;

pub fn update_water(api: &mut SandApi) {
    if api.try_move(0, 1) {
        return;
    }

    for dx in api.shuffled_sides() {
        if api.try_move(dx, 0) {
            return;
        }
    }
}
