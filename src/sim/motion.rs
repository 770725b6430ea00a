//! Creature motion along lanes

use super::state::Creature;
use crate::consts::*;
use crate::wrap_phase;

/// Whether `x` lies outside the band creatures may occupy, on either side
#[inline]
pub fn is_offscreen(x: f32) -> bool {
    x > EXIT_RIGHT_X || x < EXIT_LEFT_X
}

/// Move every creature along its lane and drop the ones that swam off-screen
pub fn advance_creatures(creatures: &mut Vec<Creature>, dt: f32) {
    creatures.retain_mut(|creature| {
        let x = creature.pos.x + creature.heading.sign() * creature.speed * dt;
        if is_offscreen(x) {
            return false;
        }
        creature.pos.x = x;
        creature.swim_phase = wrap_phase(creature.swim_phase + SWIM_PHASE_RATE * dt);
        true
    });
}
