//! Simulation tick
//!
//! Pure step from one snapshot to the next. Stages run in a fixed order:
//! rod → creatures → hook/catch → spawns → bubbles → status.

use rand::Rng;

use super::autopilot::wants_cast;
use super::bubbles::{emit_bubble, update_bubbles};
use super::hook::{cast_hook, update_hook};
use super::motion::advance_creatures;
use super::ruleset::{Ruleset, VictoryCondition};
use super::spawn::{spawn_abyssal, spawn_fish};
use super::state::{GameState, GameStatus};

/// Commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the hook (ignored unless playing with the hook at rest)
    pub cast: bool,
    /// Start over from the ruleset's opening snapshot
    pub reset: bool,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - casts on its own when a catch looks likely
    pub idle_mode: bool,
}

/// Apply a cast between ticks
pub fn cast(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::Playing {
        cast_hook(&mut next.hook, &next.fisherman);
    }
    next
}

/// Canonical starting snapshot, regardless of what came before
pub fn reset(rules: &Ruleset) -> GameState {
    GameState::new(rules)
}

/// Produce the next snapshot after `dt` seconds
pub fn tick<R: Rng>(
    prev: &GameState,
    input: &TickInput,
    dt: f32,
    rules: &Ruleset,
    rng: &mut R,
) -> GameState {
    if input.reset {
        log::info!("match reset");
        return reset(rules);
    }

    let mut state = prev.clone();

    if input.pause {
        match state.status {
            GameStatus::Playing => {
                state.status = GameStatus::Paused;
                return state;
            }
            GameStatus::Paused => state.status = GameStatus::Playing,
            _ => {}
        }
    }

    // Paused and finished matches are frozen
    if state.status != GameStatus::Playing {
        return state;
    }
    // Zero, negative or NaN steps never move time backwards
    if !(dt > 0.0) {
        return state;
    }

    if input.cast || (input.idle_mode && wants_cast(&state)) {
        cast_hook(&mut state.hook, &state.fisherman);
    }

    state.time_left = (state.time_left - dt).max(0.0);
    state.time_ticks += 1;

    state.fisherman.swing(dt);
    advance_creatures(&mut state.creatures, dt);
    update_hook(&mut state, dt);

    spawn_fish(&mut state, rules, rng);
    spawn_abyssal(&mut state, rules, rng);

    emit_bubble(&mut state.bubbles, rules.bubble_chance, rng);
    update_bubbles(&mut state.bubbles, dt);

    evaluate_status(&mut state, rules);
    if state.status != GameStatus::Playing {
        log::info!(
            "match over: {:?} with {} points, {:.2}s left",
            state.status,
            state.score,
            state.time_left
        );
    }

    state
}

/// Time expiry first, then the victory check, so a win on the final
/// frame still counts.
fn evaluate_status(state: &mut GameState, rules: &Ruleset) {
    if state.time_left <= 0.0 {
        state.status = GameStatus::GameOver;
    }

    let won = match rules.victory {
        VictoryCondition::ScoreTarget(target) => state.score >= target,
        VictoryCondition::MonstersDefeated(count) => state.monsters_defeated >= count,
    };
    if won {
        state.status = GameStatus::Victory;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::test_rng::{always, never};
    use crate::sim::{Creature, CreatureKind, Heading, HookPhase};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 0.016;

    fn empty_sea(rules: &Ruleset) -> GameState {
        let mut state = GameState::new(rules);
        state.creatures.clear();
        state
    }

    fn parked(id: &str, kind: CreatureKind, pos: Vec2) -> Creature {
        Creature::new(id.into(), kind, pos, Heading::Left, 0.0, 0.0)
    }

    fn step(state: &GameState, input: &TickInput, rules: &Ruleset) -> GameState {
        tick(state, input, DT, rules, &mut never())
    }

    fn cast_input() -> TickInput {
        TickInput {
            cast: true,
            ..Default::default()
        }
    }

    /// Cast and tick until the hook is back at rest or the match ends
    fn fish_once(state: GameState, rules: &Ruleset) -> GameState {
        let mut state = step(&state, &cast_input(), rules);
        while state.hook.is_active() && state.status == GameStatus::Playing {
            state = step(&state, &TickInput::default(), rules);
        }
        state
    }

    #[test]
    fn test_empty_cast_returns_without_catch() {
        let rules = Ruleset::abyssal();
        let mut state = step(&empty_sea(&rules), &cast_input(), &rules);
        assert_eq!(state.hook.phase, HookPhase::Descending);

        let mut reached_bottom = false;
        for _ in 0..1000 {
            state = step(&state, &TickInput::default(), &rules);
            if state.hook.phase == (HookPhase::Ascending { caught: None }) {
                reached_bottom = true;
            }
            if !state.hook.is_active() {
                break;
            }
        }

        assert!(reached_bottom);
        assert_eq!(state.hook.phase, HookPhase::Idle);
        assert_eq!(state.hook.depth, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_small_fish_on_hook_path_is_caught() {
        let rules = Ruleset::abyssal();
        let mut state = step(&empty_sea(&rules), &cast_input(), &rules);
        let next_y = HOOK_REST_Y + state.hook.depth + HOOK_DESCEND_RATE * DT;
        state
            .creatures
            .push(parked("snack", CreatureKind::Small, Vec2::new(205.0, next_y)));

        let next = step(&state, &TickInput::default(), &rules);
        assert_eq!(next.score, state.score + 10);
        assert!(next.creatures.is_empty());
        assert!(next.hook.is_returning());
        assert_eq!(next.hook.caught_fish().map(|c| c.id.as_str()), Some("snack"));
    }

    #[test]
    fn test_kraken_takes_three_hooks() {
        let rules = Ruleset::abyssal();
        let mut state = empty_sea(&rules);
        state
            .creatures
            .push(parked("kraken", CreatureKind::Kraken, Vec2::new(205.0, 120.0)));

        state = fish_once(state, &rules);
        assert_eq!(state.score, 500);
        assert_eq!(state.find_creature("kraken").unwrap().health(), Some(30));

        state = fish_once(state, &rules);
        assert_eq!(state.score, 1000);
        assert_eq!(state.find_creature("kraken").unwrap().health(), Some(10));

        state = fish_once(state, &rules);
        assert!(state.find_creature("kraken").is_none());
        assert_eq!(state.score, 2000);
        assert_eq!(state.monsters_defeated, 1);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_victory_beats_time_expiry() {
        let rules = Ruleset::abyssal();
        let mut state = step(&empty_sea(&rules), &cast_input(), &rules);
        state.score = 4990;
        state.time_left = DT / 2.0;
        let next_y = HOOK_REST_Y + state.hook.depth + HOOK_DESCEND_RATE * DT;
        state
            .creatures
            .push(parked("last", CreatureKind::Small, Vec2::new(205.0, next_y)));

        let next = step(&state, &TickInput::default(), &rules);
        assert_eq!(next.time_left, 0.0);
        assert_eq!(next.score, 5000);
        assert_eq!(next.status, GameStatus::Victory);
    }

    #[test]
    fn test_time_expiry_ends_match() {
        let rules = Ruleset::abyssal();
        let mut state = empty_sea(&rules);
        state.time_left = 0.01;
        let next = step(&state, &TickInput::default(), &rules);
        assert_eq!(next.time_left, 0.0);
        assert_eq!(next.status, GameStatus::GameOver);
    }

    #[test]
    fn test_classic_won_by_defeating_octopus() {
        let rules = Ruleset::classic();
        let mut state = empty_sea(&rules);
        let mut octopus = parked("octopus", CreatureKind::Octopus, Vec2::new(205.0, 100.0));
        octopus.vitality = crate::sim::Vitality::MultiHit { health: 20 };
        state.creatures.push(octopus);

        let state = fish_once(state, &rules);
        assert_eq!(state.score, 1500);
        assert_eq!(state.status, GameStatus::Victory);
    }

    #[test]
    fn test_new_bubble_rises_on_its_first_tick() {
        let rules = Ruleset::abyssal();
        let next = tick(&empty_sea(&rules), &TickInput::default(), DT, &rules, &mut always());
        assert_eq!(next.bubbles.len(), 1);
        // Slowest bubble (20 units/s) from the sea floor
        assert!((next.bubbles[0].pos.y - (FIELD_HEIGHT - 20.0 * DT)).abs() < 1e-4);
    }

    #[test]
    fn test_finished_match_is_frozen() {
        let rules = Ruleset::abyssal();
        let mut state = GameState::new(&rules);
        state.status = GameStatus::GameOver;
        let next = step(&state, &cast_input(), &rules);
        assert_eq!(next, state);
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let rules = Ruleset::abyssal();
        let state = GameState::new(&rules);
        for dt in [0.0, -0.5, f32::NAN] {
            let next = tick(&state, &cast_input(), dt, &rules, &mut never());
            assert_eq!(next, state);
        }
    }

    #[test]
    fn test_double_cast_is_idempotent() {
        let rules = Ruleset::abyssal();
        let state = GameState::new(&rules);
        let once = cast(&state);
        let twice = cast(&once);
        assert_eq!(once, twice);
        assert_eq!(once.hook.phase, HookPhase::Descending);
    }

    #[test]
    fn test_cast_ignored_unless_playing() {
        let rules = Ruleset::abyssal();
        let mut state = GameState::new(&rules);
        state.status = GameStatus::Paused;
        assert!(!cast(&state).hook.is_active());
    }

    #[test]
    fn test_reset_restores_opening_snapshot() {
        let rules = Ruleset::abyssal();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(&rules);
        for i in 0..600 {
            let input = TickInput {
                cast: i % 50 == 0,
                ..Default::default()
            };
            state = tick(&state, &input, DT, &rules, &mut rng);
        }
        assert_ne!(state, GameState::new(&rules));

        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        let fresh = tick(&state, &input, DT, &rules, &mut rng);
        assert_eq!(fresh, GameState::new(&rules));
        assert_eq!(reset(&rules), GameState::new(&rules));
    }

    #[test]
    fn test_tick_pause() {
        let rules = Ruleset::abyssal();
        let state = GameState::new(&rules);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        let paused = step(&state, &pause, &rules);
        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(paused.time_left, state.time_left);

        // Frozen while paused, cast included
        let still = step(&paused, &cast_input(), &rules);
        assert_eq!(still, paused);

        let resumed = step(&paused, &pause, &rules);
        assert_eq!(resumed.status, GameStatus::Playing);
        assert!(resumed.time_left < state.time_left);
    }

    #[test]
    fn test_demo_mode_catches_fish() {
        let rules = Ruleset::abyssal();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut state = GameState::new(&rules);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..3000 {
            state = tick(&state, &input, DT, &rules, &mut rng);
        }
        assert!(state.score > 0);
    }

    #[test]
    fn test_seeded_ticks_are_deterministic() {
        let rules = Ruleset::abyssal();
        let run = |seed: u64| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&rules);
            let input = TickInput {
                idle_mode: true,
                ..Default::default()
            };
            for _ in 0..2000 {
                state = tick(&state, &input, DT, &rules, &mut rng);
            }
            state
        };
        assert_eq!(run(12345), run(12345));
    }

    proptest! {
        #[test]
        fn prop_tick_invariants(
            seed in any::<u64>(),
            steps in prop::collection::vec((any::<bool>(), 0.0f32..0.02), 1..400),
        ) {
            let rules = Ruleset::abyssal();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&rules);

            for (cast, dt) in steps {
                let input = TickInput { cast, ..Default::default() };
                let next = tick(&state, &input, dt, &rules, &mut rng);

                prop_assert!(next.score >= state.score);
                prop_assert!(next.time_left >= 0.0);
                prop_assert!(next.time_left <= state.time_left);
                if next.time_left <= 0.0 {
                    prop_assert_ne!(next.status, GameStatus::Playing);
                }
                prop_assert!((0.0..=HOOK_MAX_DEPTH).contains(&next.hook.depth));
                prop_assert!(next.creatures.len() <= state.creatures.len() + 2);

                for creature in &next.creatures {
                    let Some(health) = creature.health() else { continue };
                    prop_assert!(health > 0);
                    let before = state.find_creature(&creature.id).and_then(|c| c.health());
                    if let Some(before) = before {
                        prop_assert!(before == health || before == health + HIT_DAMAGE);
                    }
                }
                state = next;
            }
        }

        #[test]
        fn prop_hook_depth_is_monotonic_within_phase(dt in 0.001f32..0.016) {
            let rules = Ruleset::abyssal();
            let mut state = step(&empty_sea(&rules), &cast_input(), &rules);
            for _ in 0..20_000 {
                let next = tick(&state, &TickInput::default(), dt, &rules, &mut never());
                match (&state.hook.phase, &next.hook.phase) {
                    (HookPhase::Descending, HookPhase::Descending) => {
                        prop_assert!(next.hook.depth > state.hook.depth);
                    }
                    (HookPhase::Ascending { .. }, HookPhase::Ascending { .. }) => {
                        prop_assert!(next.hook.depth < state.hook.depth);
                    }
                    _ => {}
                }
                state = next;
                if !state.hook.is_active() {
                    break;
                }
            }
            prop_assert!(!state.hook.is_active());
        }
    }
}
