//! Creature kinds and their stat table

use serde::{Deserialize, Serialize};

/// Every creature that can swim through the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreatureKind {
    Small,
    Medium,
    Large,
    Octopus,
    Kraken,
    SeaSerpent,
    KingOctopus,
    GiantSquid,
    SeaDragon,
}

/// Base stats for a kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    pub name: &'static str,
    pub points: u32,
    pub speed: f32,
    pub size: f32,
    /// Starting health for multi-hit kinds
    pub health: Option<u32>,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 9] = [
        CreatureKind::Small,
        CreatureKind::Medium,
        CreatureKind::Large,
        CreatureKind::Octopus,
        CreatureKind::Kraken,
        CreatureKind::SeaSerpent,
        CreatureKind::KingOctopus,
        CreatureKind::GiantSquid,
        CreatureKind::SeaDragon,
    ];

    /// The five sea monsters
    pub const MONSTERS: [CreatureKind; 5] = [
        CreatureKind::Kraken,
        CreatureKind::SeaSerpent,
        CreatureKind::KingOctopus,
        CreatureKind::GiantSquid,
        CreatureKind::SeaDragon,
    ];

    pub const fn profile(self) -> KindProfile {
        match self {
            CreatureKind::Small => KindProfile {
                name: "Red Fish",
                points: 10,
                speed: 25.0,
                size: 1.0,
                health: None,
            },
            CreatureKind::Medium => KindProfile {
                name: "Tropical Fish",
                points: 25,
                speed: 20.0,
                size: 1.5,
                health: None,
            },
            CreatureKind::Large => KindProfile {
                name: "Shark",
                points: 50,
                speed: 15.0,
                size: 2.0,
                health: None,
            },
            CreatureKind::Octopus => KindProfile {
                name: "Octopus",
                points: 1000,
                speed: 10.0,
                size: 3.0,
                health: Some(100),
            },
            CreatureKind::Kraken => KindProfile {
                name: "Kraken",
                points: 500,
                speed: 8.0,
                size: 2.5,
                health: Some(50),
            },
            CreatureKind::SeaSerpent => KindProfile {
                name: "Sea Serpent",
                points: 500,
                speed: 12.0,
                size: 2.0,
                health: Some(30),
            },
            CreatureKind::KingOctopus => KindProfile {
                name: "King Octopus",
                points: 500,
                speed: 6.0,
                size: 3.5,
                health: Some(100),
            },
            CreatureKind::GiantSquid => KindProfile {
                name: "Giant Squid",
                points: 500,
                speed: 10.0,
                size: 3.0,
                health: Some(80),
            },
            CreatureKind::SeaDragon => KindProfile {
                name: "Sea Dragon",
                points: 500,
                speed: 7.0,
                size: 2.8,
                health: Some(60),
            },
        }
    }

    pub const fn is_monster(self) -> bool {
        matches!(
            self,
            CreatureKind::Kraken
                | CreatureKind::SeaSerpent
                | CreatureKind::KingOctopus
                | CreatureKind::GiantSquid
                | CreatureKind::SeaDragon
        )
    }

    /// Octopus and monsters take several catches to defeat
    pub const fn is_multi_hit(self) -> bool {
        self.profile().health.is_some()
    }

    /// Points awarded on top of the catch when health runs out
    pub const fn defeat_bonus(self) -> u64 {
        match self {
            CreatureKind::Octopus => crate::consts::OCTOPUS_DEFEAT_BONUS,
            _ if self.is_monster() => self.profile().points as u64,
            _ => 0,
        }
    }
}
