//! Demo-mode casting
//!
//! Casts when some creature will swim under the hook by the time the hook
//! sinks to its lane.

use super::state::{Creature, GameState};
use crate::consts::*;

/// Where a creature will be when a hook cast now reaches its depth
fn intercept_offset(creature: &Creature, line_x: f32) -> Option<f32> {
    let depth = creature.pos.y - HOOK_REST_Y;
    if !(0.0..=HOOK_MAX_DEPTH).contains(&depth) {
        return None;
    }
    let travel_time = depth / HOOK_DESCEND_RATE;
    let future_x = creature.pos.x + creature.heading.sign() * creature.speed * travel_time;
    Some((future_x - line_x).abs())
}

/// Whether an idle hook should be cast this tick
pub fn wants_cast(state: &GameState) -> bool {
    if state.hook.is_active() {
        return false;
    }
    let line_x = state.fisherman.line_x();
    state.creatures.iter().any(|creature| {
        intercept_offset(creature, line_x)
            .is_some_and(|offset| offset < creature.catch_radius() * 0.5)
    })
}
