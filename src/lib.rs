//! Pirate Fishing - a lane-based fishing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hook, creatures, spawning, scoring)
//! - `session`: Frame loop wrapper that owns the RNG and clock
//! - `platform`: Browser host bridge
//! - `settings`: Player preferences and ruleset presets

pub mod error;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{RulesetError, SettingsError};
pub use highscores::HighScores;
pub use session::Session;
pub use settings::{RulesetPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Largest step the clock will report (one 60 Hz frame)
    pub const MAX_FRAME_DT: f32 = 0.016;
    /// Frames shorter than this are skipped entirely
    pub const MIN_FRAME_DT: f32 = 0.0001;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Creatures past these x positions are dropped
    pub const EXIT_RIGHT_X: f32 = 450.0;
    pub const EXIT_LEFT_X: f32 = -100.0;
    /// Spawn edges for rightward and leftward lanes
    pub const ENTRY_LEFT_X: f32 = -50.0;
    pub const ENTRY_RIGHT_X: f32 = 450.0;

    /// Fisherman anchor (ship deck)
    pub const FISHERMAN_X: f32 = 200.0;
    pub const FISHERMAN_Y: f32 = 20.0;
    /// Horizontal offset from the fisherman to the line
    pub const LINE_OFFSET: f32 = 5.0;
    /// Hook height at depth 0
    pub const HOOK_REST_Y: f32 = FISHERMAN_Y + 5.0;

    /// Rod swing, in degrees
    pub const ROD_AMPLITUDE: f32 = 35.0;
    pub const ROD_SPEED: f32 = 25.0;
    /// Vibration at full swing (presentation only)
    pub const ROD_VIBRATION_SCALE: f32 = 0.5;

    /// Hook travel (units per second)
    pub const HOOK_DESCEND_RATE: f32 = 90.0;
    pub const HOOK_ASCEND_RATE: f32 = 110.0;
    pub const HOOK_MAX_DEPTH: f32 = 350.0;

    /// Catch radius = base + size * factor
    pub const CATCH_RADIUS_BASE: f32 = 25.0;
    pub const CATCH_RADIUS_PER_SIZE: f32 = 5.0;

    /// Health removed from a multi-hit creature per catch
    pub const HIT_DAMAGE: u32 = 20;
    /// Flat bonus for finishing off an octopus
    pub const OCTOPUS_DEFEAT_BONUS: u64 = 500;

    /// Cosmetic swim bobbing (radians per second)
    pub const SWIM_PHASE_RATE: f32 = 1.5;

    /// Bubbles are dropped once they rise above this
    pub const BUBBLE_CEILING_Y: f32 = -20.0;
}

/// Wrap a cyclic phase into [0, 2π)
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}
