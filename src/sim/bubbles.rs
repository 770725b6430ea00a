//! Cosmetic bubble stream
//!
//! Bubbles have no gameplay effect; they share the tick's timestep and RNG.
//! Each frame a bubble may be emitted, then every bubble rises and the ones
//! past the ceiling pop.

use glam::Vec2;
use rand::Rng;

use super::state::Bubble;
use crate::consts::*;

/// Maybe emit one bubble from the sea floor
pub fn emit_bubble<R: Rng>(bubbles: &mut Vec<Bubble>, chance: f32, rng: &mut R) {
    if rng.random::<f32>() >= chance {
        return;
    }
    bubbles.push(Bubble {
        pos: Vec2::new(rng.random::<f32>() * FIELD_WIDTH, FIELD_HEIGHT),
        size: rng.random_range(5.0..15.0),
        speed: rng.random_range(20.0..50.0),
    });
}

/// Rise and pop bubbles that reached the surface
pub fn update_bubbles(bubbles: &mut Vec<Bubble>, dt: f32) {
    bubbles.retain_mut(|bubble| {
        bubble.pos.y -= bubble.speed * dt;
        bubble.pos.y > BUBBLE_CEILING_Y
    });
}
