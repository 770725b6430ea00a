//! Hook state machine
//!
//! Idle → Descending on cast; Descending → Ascending on a catch or at max
//! depth; Ascending → Idle once the hook is back at the surface.

use glam::Vec2;

use super::catch::{CatchOutcome, resolve_catch};
use super::state::{Fisherman, GameState, Hook, HookPhase};
use crate::consts::*;

/// Drop the hook if it is resting. Returns false when it is already out.
pub fn cast_hook(hook: &mut Hook, fisherman: &Fisherman) -> bool {
    if hook.is_active() {
        return false;
    }
    hook.depth = 0.0;
    hook.pos = Vec2::new(fisherman.line_x(), HOOK_REST_Y);
    hook.angle = fisherman.rod_angle;
    hook.phase = HookPhase::Descending;
    true
}

/// Advance the hook by one step, resolving a catch while descending
pub fn update_hook(state: &mut GameState, dt: f32) -> Option<CatchOutcome> {
    let line_x = state.fisherman.line_x();

    match state.hook.phase {
        HookPhase::Idle => None,

        HookPhase::Descending => {
            let depth = (state.hook.depth + HOOK_DESCEND_RATE * dt).min(HOOK_MAX_DEPTH);
            let pos = Vec2::new(line_x, HOOK_REST_Y + depth);
            state.hook.depth = depth;
            state.hook.pos = pos;

            let outcome = resolve_catch(state, pos);
            if let Some(outcome) = &outcome {
                state.hook.phase = HookPhase::Ascending {
                    caught: Some(outcome.creature.clone()),
                };
            } else if depth >= HOOK_MAX_DEPTH {
                log::debug!("hook hit bottom, reeling in empty");
                state.hook.phase = HookPhase::Ascending { caught: None };
            }
            outcome
        }

        HookPhase::Ascending { .. } => {
            let depth = (state.hook.depth - HOOK_ASCEND_RATE * dt).max(0.0);
            state.hook.depth = depth;
            state.hook.pos = Vec2::new(line_x, HOOK_REST_Y + depth);

            if depth <= 0.0 {
                state.hook.phase = HookPhase::Idle;
                state.hook.pos = Vec2::new(line_x, HOOK_REST_Y);
            }
            None
        }
    }
}
