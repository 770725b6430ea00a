//! Rule variants
//!
//! One engine, parameterized by a `Ruleset`: lane table, abyssal lane,
//! starting roster and victory condition.

use serde::{Deserialize, Serialize};

use super::kinds::CreatureKind;
use crate::consts::*;
use crate::error::RulesetError;

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Right,
    Left,
}

impl Heading {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Right => 1.0,
            Heading::Left => -1.0,
        }
    }

    /// Edge a creature enters from when travelling this way
    #[inline]
    pub fn entry_x(self) -> f32 {
        match self {
            Heading::Right => ENTRY_LEFT_X,
            Heading::Left => ENTRY_RIGHT_X,
        }
    }
}

/// An ordinary fish lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub y: f32,
    pub heading: Heading,
    pub kind: CreatureKind,
    pub speed: f32,
}

/// The deep lane reserved for octopus and monster spawns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbyssalLane {
    pub y: f32,
    pub heading: Heading,
    /// Kinds drawn uniformly on each spawn
    pub kinds: Vec<CreatureKind>,
    pub spawn_chance: f32,
    pub min_spacing: f32,
}

/// A creature present at the start of every match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub kind: CreatureKind,
    pub x: f32,
    pub y: f32,
    pub heading: Heading,
    pub speed: f32,
    pub swim_phase: f32,
}

/// How a match is won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryCondition {
    /// Reach this many points
    ScoreTarget(u64),
    /// Defeat this many multi-hit creatures
    MonstersDefeated(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub lanes: Vec<Lane>,
    pub fish_spawn_chance: f32,
    pub fish_min_spacing: f32,
    /// Absent when the variant has no deep-lane spawning
    pub abyssal: Option<AbyssalLane>,
    /// Allow monster kinds in the abyssal lane (octopus is always allowed)
    pub monsters_enabled: bool,
    pub roster: Vec<RosterEntry>,
    pub victory: VictoryCondition,
    /// Match length in seconds
    pub match_duration: f32,
    pub bubble_chance: f32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::abyssal()
    }
}

fn lane(y: f32, heading: Heading, kind: CreatureKind, speed: f32) -> Lane {
    Lane {
        y,
        heading,
        kind,
        speed,
    }
}

fn fish_lanes() -> Vec<Lane> {
    use CreatureKind::*;
    use Heading::*;
    vec![
        lane(120.0, Right, Small, 25.0),
        lane(150.0, Left, Medium, 20.0),
        lane(180.0, Right, Large, 15.0),
        lane(220.0, Left, Small, 25.0),
        lane(250.0, Right, Medium, 20.0),
    ]
}

/// Abyssal lane height
pub const ABYSSAL_Y: f32 = 300.0;

fn roster_entry(
    id: &str,
    kind: CreatureKind,
    x: f32,
    y: f32,
    heading: Heading,
    speed: f32,
    swim_phase: f32,
) -> RosterEntry {
    RosterEntry {
        id: id.to_string(),
        kind,
        x,
        y,
        heading,
        speed,
        swim_phase,
    }
}

/// Two fish per lane, staggered off-screen
fn fish_roster() -> Vec<RosterEntry> {
    use CreatureKind::*;
    use Heading::*;
    vec![
        roster_entry("fish1", Small, -50.0, 120.0, Right, 25.0, 0.0),
        roster_entry("fish2", Small, -120.0, 120.0, Right, 25.0, 1.5),
        roster_entry("fish3", Medium, 450.0, 150.0, Left, 20.0, 0.8),
        roster_entry("fish4", Medium, 520.0, 150.0, Left, 20.0, 2.3),
        roster_entry("fish5", Large, -50.0, 180.0, Right, 15.0, 1.2),
        roster_entry("fish6", Large, -120.0, 180.0, Right, 15.0, 3.1),
        roster_entry("fish7", Small, 450.0, 220.0, Left, 25.0, 0.5),
        roster_entry("fish8", Small, 520.0, 220.0, Left, 25.0, 2.8),
        roster_entry("fish9", Medium, -50.0, 250.0, Right, 20.0, 1.8),
        roster_entry("fish10", Medium, -120.0, 250.0, Right, 20.0, 0.3),
    ]
}

impl Ruleset {
    /// Five fish lanes plus a monster-infested abyssal lane; first to 5000 wins
    pub fn abyssal() -> Self {
        use CreatureKind::*;
        use Heading::Left;

        let mut roster = fish_roster();
        roster.extend([
            roster_entry("octopus1", Octopus, 450.0, ABYSSAL_Y, Left, 8.0, 0.0),
            roster_entry("kraken1", Kraken, 520.0, ABYSSAL_Y, Left, 8.0, 1.5),
            roster_entry("seaSerpent1", SeaSerpent, 580.0, ABYSSAL_Y, Left, 12.0, 2.1),
            roster_entry("kingOctopus1", KingOctopus, 400.0, ABYSSAL_Y, Left, 6.0, 0.7),
        ]);

        Self {
            lanes: fish_lanes(),
            fish_spawn_chance: 0.03,
            fish_min_spacing: 80.0,
            abyssal: Some(AbyssalLane {
                y: ABYSSAL_Y,
                heading: Left,
                kinds: vec![Octopus, Kraken, SeaSerpent, KingOctopus, GiantSquid, SeaDragon],
                spawn_chance: 0.008,
                min_spacing: 120.0,
            }),
            monsters_enabled: true,
            roster,
            victory: VictoryCondition::ScoreTarget(5000),
            match_duration: 60.0,
            bubble_chance: 0.1,
        }
    }

    /// Fish lanes and a single octopus; defeating it wins
    pub fn classic() -> Self {
        let mut roster = fish_roster();
        roster.push(roster_entry(
            "octopus1",
            CreatureKind::Octopus,
            450.0,
            ABYSSAL_Y,
            Heading::Left,
            8.0,
            0.0,
        ));

        Self {
            lanes: fish_lanes(),
            fish_spawn_chance: 0.03,
            fish_min_spacing: 80.0,
            abyssal: None,
            monsters_enabled: false,
            roster,
            victory: VictoryCondition::MonstersDefeated(1),
            match_duration: 60.0,
            bubble_chance: 0.1,
        }
    }

    /// Abyssal kinds after applying the monster flag
    pub fn abyssal_kinds(&self) -> Vec<CreatureKind> {
        match &self.abyssal {
            Some(lane) => lane
                .kinds
                .iter()
                .copied()
                .filter(|k| self.monsters_enabled || !k.is_monster())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), RulesetError> {
        if self.lanes.is_empty() {
            return Err(RulesetError::NoLanes);
        }
        for (lane, entry) in self.lanes.iter().enumerate() {
            if entry.speed <= 0.0 {
                return Err(RulesetError::LaneSpeedNotPositive {
                    lane,
                    speed: entry.speed,
                });
            }
            if entry.kind.is_multi_hit() {
                return Err(RulesetError::LaneKindIsMultiHit {
                    lane,
                    kind: entry.kind,
                });
            }
        }
        check_chance("fish_spawn_chance", self.fish_spawn_chance)?;
        check_chance("bubble_chance", self.bubble_chance)?;
        check_spacing("fish_min_spacing", self.fish_min_spacing)?;

        if let Some(abyssal) = &self.abyssal {
            if let Some(&kind) = abyssal.kinds.iter().find(|k| !k.is_multi_hit()) {
                return Err(RulesetError::AbyssalKindIsOrdinary { kind });
            }
            if self.abyssal_kinds().is_empty() {
                return Err(RulesetError::AbyssalLaneEmpty);
            }
            check_chance("abyssal.spawn_chance", abyssal.spawn_chance)?;
            check_spacing("abyssal.min_spacing", abyssal.min_spacing)?;
        }

        if self.match_duration.is_nan() || self.match_duration <= 0.0 {
            return Err(RulesetError::DurationNotPositive {
                seconds: self.match_duration,
            });
        }
        match self.victory {
            VictoryCondition::ScoreTarget(0) | VictoryCondition::MonstersDefeated(0) => {
                return Err(RulesetError::ZeroVictoryTarget);
            }
            _ => {}
        }

        for (i, entry) in self.roster.iter().enumerate() {
            if self.roster[..i].iter().any(|e| e.id == entry.id) {
                return Err(RulesetError::DuplicateRosterId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_chance(field: &'static str, value: f32) -> Result<(), RulesetError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RulesetError::ChanceOutOfRange { field, value })
    }
}

fn check_spacing(field: &'static str, value: f32) -> Result<(), RulesetError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RulesetError::SpacingNegative { field, value })
    }
}
