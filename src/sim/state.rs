//! Game state and core simulation types
//!
//! A `GameState` is a complete snapshot; each tick produces a new one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinds::CreatureKind;
use super::ruleset::{Heading, RosterEntry, Ruleset};
use crate::consts::*;
use crate::wrap_phase;

/// Overall match status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Clock running, hook usable
    Playing,
    /// Frozen until unpaused
    Paused,
    /// Timer ran out before the victory condition
    GameOver,
    Victory,
}

impl GameStatus {
    /// Whether the match has ended
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }
}

/// Single-catch fish or a creature with a health pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vitality {
    Ordinary,
    /// Health is always above zero while the creature is alive
    MultiHit { health: u32 },
}

/// A fish or monster swimming along a lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    pub kind: CreatureKind,
    /// `y` is the lane height and never changes
    pub pos: Vec2,
    pub points: u32,
    pub speed: f32,
    pub heading: Heading,
    /// Scales catch radius and sprite
    pub size: f32,
    pub vitality: Vitality,
    /// Cosmetic bobbing phase in [0, 2π)
    pub swim_phase: f32,
}

impl Creature {
    /// Create a creature with the kind's stats
    pub fn new(
        id: String,
        kind: CreatureKind,
        pos: Vec2,
        heading: Heading,
        speed: f32,
        swim_phase: f32,
    ) -> Self {
        let profile = kind.profile();
        let vitality = match profile.health {
            Some(health) => Vitality::MultiHit { health },
            None => Vitality::Ordinary,
        };
        Self {
            id,
            kind,
            pos,
            points: profile.points,
            speed,
            heading,
            size: profile.size,
            vitality,
            swim_phase: wrap_phase(swim_phase),
        }
    }

    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self::new(
            entry.id.clone(),
            entry.kind,
            Vec2::new(entry.x, entry.y),
            entry.heading,
            entry.speed,
            entry.swim_phase,
        )
    }

    pub fn is_monster(&self) -> bool {
        self.kind.is_monster()
    }

    /// Remaining health for multi-hit creatures
    pub fn health(&self) -> Option<u32> {
        match self.vitality {
            Vitality::Ordinary => None,
            Vitality::MultiHit { health } => Some(health),
        }
    }

    /// Distance below which the hook catches this creature
    #[inline]
    pub fn catch_radius(&self) -> f32 {
        CATCH_RADIUS_BASE + self.size * CATCH_RADIUS_PER_SIZE
    }

    /// Whether this creature travels along the lane at height `y`
    #[inline]
    pub fn in_lane(&self, y: f32) -> bool {
        (self.pos.y - y).abs() < 0.5
    }
}

/// Hook state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HookPhase {
    /// Resting under the rod
    Idle,
    /// Sinking, checking for catches every frame
    Descending,
    /// Reeling in, possibly with a catch on the line
    Ascending { caught: Option<Creature> },
}

/// The fishing hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    pub pos: Vec2,
    /// Distance below the rest position, in [0, HOOK_MAX_DEPTH]
    pub depth: f32,
    /// Rod angle captured at cast time (degrees)
    pub angle: f32,
    pub phase: HookPhase,
}

impl Hook {
    /// A resting hook under the given anchor
    pub fn at_rest(anchor_x: f32) -> Self {
        Self {
            pos: Vec2::new(anchor_x + LINE_OFFSET, HOOK_REST_Y),
            depth: 0.0,
            angle: 0.0,
            phase: HookPhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, HookPhase::Idle)
    }

    pub fn is_returning(&self) -> bool {
        matches!(self.phase, HookPhase::Ascending { .. })
    }

    /// Creature on the line while reeling in
    pub fn caught_fish(&self) -> Option<&Creature> {
        match &self.phase {
            HookPhase::Ascending { caught } => caught.as_ref(),
            _ => None,
        }
    }
}

/// The fisherman and his oscillating rod
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fisherman {
    pub x: f32,
    pub y: f32,
    /// Degrees, within [-ROD_AMPLITUDE, ROD_AMPLITUDE]
    pub rod_angle: f32,
    /// +1 or -1
    pub rod_direction: f32,
    /// Presentation jitter, 0 at rest to ROD_VIBRATION_SCALE at full swing
    pub rod_vibration: f32,
}

impl Default for Fisherman {
    fn default() -> Self {
        Self {
            x: FISHERMAN_X,
            y: FISHERMAN_Y,
            rod_angle: 0.0,
            rod_direction: 1.0,
            rod_vibration: 0.0,
        }
    }
}

impl Fisherman {
    /// Where the line hangs from
    #[inline]
    pub fn line_x(&self) -> f32 {
        self.x + LINE_OFFSET
    }

    /// Swing the rod, bouncing off the amplitude bounds
    pub fn swing(&mut self, dt: f32) {
        self.rod_angle += self.rod_direction * ROD_SPEED * dt;

        if self.rod_angle > ROD_AMPLITUDE {
            self.rod_angle = ROD_AMPLITUDE;
            self.rod_direction = -1.0;
        } else if self.rod_angle < -ROD_AMPLITUDE {
            self.rod_angle = -ROD_AMPLITUDE;
            self.rod_direction = 1.0;
        }

        self.rod_vibration = self.rod_angle.abs() / ROD_AMPLITUDE * ROD_VIBRATION_SCALE;
    }
}

/// A rising bubble (purely cosmetic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Complete game state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    /// Seconds left on the match clock
    pub time_left: f32,
    pub status: GameStatus,
    pub fisherman: Fisherman,
    pub hook: Hook,
    /// Live creatures (order carries no meaning)
    pub creatures: Vec<Creature>,
    pub bubbles: Vec<Bubble>,
    /// Multi-hit creatures brought down to zero health
    pub monsters_defeated: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Next spawned creature ID
    next_id: u32,
}

impl GameState {
    /// Canonical starting snapshot for a ruleset
    pub fn new(rules: &Ruleset) -> Self {
        let fisherman = Fisherman::default();
        let hook = Hook::at_rest(fisherman.x);
        Self {
            score: 0,
            time_left: rules.match_duration,
            status: GameStatus::Playing,
            fisherman,
            hook,
            creatures: rules.roster.iter().map(Creature::from_roster).collect(),
            bubbles: Vec::new(),
            monsters_defeated: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new creature ID
    pub fn next_entity_id(&mut self, prefix: &str) -> String {
        let id = self.next_id;
        self.next_id += 1;
        format!("{prefix}_{id}")
    }

    pub fn find_creature(&self, id: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }
}
