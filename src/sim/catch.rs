//! Catch detection and resolution
//!
//! The hook is a point; a creature is caught when the hook comes within its
//! catch radius. At most one creature is caught per frame.

use glam::Vec2;

use super::state::{Creature, GameState, Vitality};
use crate::consts::HIT_DAMAGE;

/// Result of hooking a creature
#[derive(Debug, Clone, PartialEq)]
pub struct CatchOutcome {
    /// The creature as it was when hooked
    pub creature: Creature,
    /// Points added to the score this frame (catch + any defeat bonus)
    pub points: u64,
    /// Whether the creature left the field
    pub removed: bool,
    /// Whether a multi-hit creature ran out of health
    pub defeated: bool,
}

/// Index of the first creature within catch radius of the hook
pub fn find_catch(hook_pos: Vec2, creatures: &[Creature]) -> Option<usize> {
    creatures
        .iter()
        .position(|c| hook_pos.distance(c.pos) < c.catch_radius())
}

/// Hook the first creature in range, award points and apply damage.
///
/// Ordinary creatures are removed. Multi-hit creatures lose `HIT_DAMAGE`
/// health and are removed with a defeat bonus when it reaches zero.
pub fn resolve_catch(state: &mut GameState, hook_pos: Vec2) -> Option<CatchOutcome> {
    let idx = find_catch(hook_pos, &state.creatures)?;
    let hooked = state.creatures[idx].clone();

    let mut points = u64::from(hooked.points);
    let (removed, defeated) = match hooked.vitality {
        Vitality::Ordinary => (true, false),
        Vitality::MultiHit { health } => {
            let remaining = health.saturating_sub(HIT_DAMAGE);
            if remaining == 0 {
                points += hooked.kind.defeat_bonus();
                (true, true)
            } else {
                state.creatures[idx].vitality = Vitality::MultiHit { health: remaining };
                (false, false)
            }
        }
    };

    if removed {
        state.creatures.swap_remove(idx);
    }
    if defeated {
        state.monsters_defeated += 1;
        log::debug!("{:?} {} defeated", hooked.kind, hooked.id);
    }
    state.score = state.score.saturating_add(points);
    log::debug!("hooked {:?} {} for {} points", hooked.kind, hooked.id, points);

    Some(CatchOutcome {
        creature: hooked,
        points,
        removed,
        defeated,
    })
}
