//! Lane spawning
//!
//! Each tick may add one ordinary fish and one abyssal creature. A spawn is
//! rejected when the lane's entry edge is still crowded.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::ruleset::{Heading, Ruleset};
use super::state::{Creature, GameState};

/// True when no creature in the lane sits within `spacing` of the entry edge
pub fn lane_has_room(creatures: &[Creature], y: f32, heading: Heading, spacing: f32) -> bool {
    let entry_x = heading.entry_x();
    let mut in_lane = creatures.iter().filter(|c| c.in_lane(y));
    match heading {
        Heading::Right => !in_lane.any(|c| c.pos.x < entry_x + spacing),
        Heading::Left => !in_lane.any(|c| c.pos.x > entry_x - spacing),
    }
}

/// Maybe add an ordinary fish to a random lane. Returns the new creature's ID.
pub fn spawn_fish<R: Rng>(
    state: &mut GameState,
    rules: &Ruleset,
    rng: &mut R,
) -> Option<String> {
    if rules.lanes.is_empty() || rng.random::<f32>() >= rules.fish_spawn_chance {
        return None;
    }

    let lane = &rules.lanes[rng.random_range(0..rules.lanes.len())];
    if !lane_has_room(&state.creatures, lane.y, lane.heading, rules.fish_min_spacing) {
        return None;
    }

    let id = state.next_entity_id("fish");
    let creature = Creature::new(
        id.clone(),
        lane.kind,
        Vec2::new(lane.heading.entry_x(), lane.y),
        lane.heading,
        lane.speed,
        rng.random::<f32>() * TAU,
    );
    log::debug!("spawned {:?} {} in lane y={}", lane.kind, id, lane.y);
    state.creatures.push(creature);
    Some(id)
}

/// Maybe add an octopus or monster to the abyssal lane. Returns the new creature's ID.
pub fn spawn_abyssal<R: Rng>(
    state: &mut GameState,
    rules: &Ruleset,
    rng: &mut R,
) -> Option<String> {
    let lane = rules.abyssal.as_ref()?;
    if rng.random::<f32>() >= lane.spawn_chance {
        return None;
    }

    let kinds = rules.abyssal_kinds();
    if kinds.is_empty() {
        return None;
    }
    let kind = kinds[rng.random_range(0..kinds.len())];

    if !lane_has_room(&state.creatures, lane.y, lane.heading, lane.min_spacing) {
        return None;
    }

    let id = state.next_entity_id("abyssal");
    let creature = Creature::new(
        id.clone(),
        kind,
        Vec2::new(lane.heading.entry_x(), lane.y),
        lane.heading,
        kind.profile().speed,
        rng.random::<f32>() * TAU,
    );
    log::debug!("{:?} {} surfaced in the abyssal lane", kind, id);
    state.creatures.push(creature);
    Some(id)
}
