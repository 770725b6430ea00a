//! Frame-driven match session
//!
//! Owns the current snapshot, the ruleset, the seeded RNG and the frame
//! clock. Hosts call `frame` once per display refresh and queue player
//! commands in between.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::SettingsError;
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::clock::clamp_delta;
use crate::sim::{FrameClock, GameState, Ruleset, TickInput, reset, tick};

/// A running match plus everything needed to step it
pub struct Session {
    state: GameState,
    rules: Ruleset,
    rng: Pcg32,
    seed: u64,
    clock: FrameClock,
    /// Commands applied at the start of the next tick
    input: TickInput,
    demo_mode: bool,
    running: bool,
    /// Whether the current match is already on the leaderboard
    recorded: bool,
    high_scores: HighScores,
}

impl Session {
    pub fn new(rules: Ruleset, seed: u64) -> Self {
        log::info!("New session (seed {seed})");
        Self {
            state: GameState::new(&rules),
            rules,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            clock: FrameClock::new(),
            input: TickInput::default(),
            demo_mode: false,
            running: true,
            recorded: false,
            high_scores: HighScores::new(),
        }
    }

    /// Build a session from settings, using `fallback_seed` when none is set
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Result<Self, SettingsError> {
        let mut session = Self::new(settings.ruleset()?, settings.seed.unwrap_or(fallback_seed));
        session.demo_mode = settings.demo_mode;
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn set_demo_mode(&mut self, enabled: bool) {
        self.demo_mode = enabled;
    }

    /// Whether the host should keep scheduling frames
    pub fn is_running(&self) -> bool {
        self.running && !self.state.status.is_finished()
    }

    /// Handle one display refresh. Returns whether another frame is wanted.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        if let Some(dt) = self.clock.advance(now_ms) {
            self.step(dt);
        }
        self.is_running()
    }

    /// Step by `dt` seconds without a host clock (clamped like a frame)
    pub fn advance(&mut self, dt: f32) {
        if let Some(dt) = clamp_delta(dt) {
            self.step(dt);
        }
    }

    fn step(&mut self, dt: f32) {
        let mut input = std::mem::take(&mut self.input);
        input.idle_mode = self.demo_mode;
        self.state = tick(&self.state, &input, dt, &self.rules, &mut self.rng);

        if self.state.status.is_finished() && !self.recorded {
            self.recorded = true;
            self.high_scores.record(&self.state);
        }
    }

    /// Request a cast on the next tick
    pub fn cast(&mut self) {
        self.input.cast = true;
    }

    /// Request a pause toggle on the next tick; two requests cancel out
    pub fn toggle_pause(&mut self) {
        self.input.pause = !self.input.pause;
    }

    /// Start a fresh match immediately
    pub fn reset(&mut self) {
        log::info!("Session reset");
        self.state = reset(&self.rules);
        self.input = TickInput::default();
        self.recorded = false;
        self.running = true;
    }

    /// Stop scheduling frames until the next reset
    pub fn stop(&mut self) {
        log::info!("Session stopped");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameStatus, HookPhase};
    use crate::settings::RulesetPreset;

    fn session() -> Session {
        Session::new(Ruleset::abyssal(), 12345)
    }

    #[test]
    fn test_first_frame_only_starts_clock() {
        let mut session = session();
        assert!(session.frame(1000.0));
        assert_eq!(session.state().time_ticks, 0);

        assert!(session.frame(1016.0));
        assert_eq!(session.state().time_ticks, 1);
        assert!((session.state().time_left - (60.0 - 0.016)).abs() < 1e-4);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut session = session();
        session.frame(0.0);
        session.frame(5000.0);
        assert!((session.state().time_left - (60.0 - 0.016)).abs() < 1e-4);
    }

    #[test]
    fn test_sub_epsilon_frame_is_skipped() {
        let mut session = session();
        session.frame(1000.0);
        session.frame(1000.05);
        assert_eq!(session.state().time_ticks, 0);
    }

    #[test]
    fn test_cast_applies_on_next_tick() {
        let mut session = session();
        session.cast();
        session.cast();
        assert!(!session.state().hook.is_active());

        session.advance(0.016);
        assert_eq!(session.state().hook.phase, HookPhase::Descending);

        // Queue was drained
        let depth = session.state().hook.depth;
        session.advance(0.016);
        assert!(session.state().hook.depth > depth);
    }

    #[test]
    fn test_toggle_pause() {
        let mut session = session();
        session.toggle_pause();
        session.advance(0.016);
        assert_eq!(session.state().status, GameStatus::Paused);
        assert!(session.frame(0.0));

        session.toggle_pause();
        session.toggle_pause();
        session.advance(0.016);
        assert_eq!(session.state().status, GameStatus::Paused);
    }

    #[test]
    fn test_match_end_stops_loop_and_records() {
        let mut session = session();
        session.set_demo_mode(true);
        let mut frames = 0;
        let mut now = 0.0;
        while session.frame(now) {
            now += 16.0;
            frames += 1;
            assert!(frames < 10_000, "match never ended");
        }
        assert!(session.state().status.is_finished());
        assert!(!session.frame(now + 16.0));

        let recorded = session.high_scores().entries.len();
        assert!(recorded <= 1);
        assert_eq!(recorded == 1, session.state().score > 0);
    }

    #[test]
    fn test_reset_rearms_stopped_session() {
        let mut session = session();
        session.advance(0.016);
        session.stop();
        assert!(!session.frame(100.0));
        assert!(!session.is_running());

        session.cast();
        session.reset();
        assert!(session.is_running());
        assert_eq!(session.state(), &GameState::new(&Ruleset::abyssal()));

        // The cast queued before the reset was dropped
        session.advance(0.016);
        assert!(!session.state().hook.is_active());
    }

    #[test]
    fn test_same_seed_same_match() {
        let play = || {
            let mut session = session();
            session.set_demo_mode(true);
            for _ in 0..1500 {
                session.advance(0.016);
            }
            session.state().clone()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            preset: RulesetPreset::Classic,
            seed: Some(5),
            ..Settings::default()
        };
        let session = Session::from_settings(&settings, 1).unwrap();
        assert_eq!(session.seed(), 5);
        assert_eq!(session.rules(), &Ruleset::classic());

        let session = Session::from_settings(&Settings::default(), 77).unwrap();
        assert_eq!(session.seed(), 77);
    }
}
