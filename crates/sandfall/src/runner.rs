//! Tick-then-present loop for hosts that own their own schedule.
//!
//! The browser host drives [`Universe::tick`] from its animation-frame
//! callback instead; this loop serves native and headless embedding, where
//! nobody hands out frame callbacks.

use std::ops::ControlFlow;

use crate::Universe;

/// Run `universe` until `present` asks to stop.
///
/// Each iteration is one frame: a full synchronous tick, then the `present`
/// callback (render, pace, decide whether to continue). Returning
/// [`ControlFlow::Break`] is the stop signal. There is no mid-tick
/// cancellation — a tick always completes before the loop can end.
pub fn run<P>(universe: &mut Universe, mut present: P)
where
    P: FnMut(&Universe) -> ControlFlow<()>,
{
    loop {
        universe.tick();
        if present(universe).is_break() {
            return;
        }
    }
}
