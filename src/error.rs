//! Configuration errors
//!
//! The simulation itself never fails; only loading and validating
//! rulesets and settings can.

use core::fmt;

use crate::sim::CreatureKind;

#[derive(Clone, Debug, PartialEq)]
pub enum RulesetError {
    NoLanes,
    LaneSpeedNotPositive { lane: usize, speed: f32 },
    LaneKindIsMultiHit { lane: usize, kind: CreatureKind },
    AbyssalLaneEmpty,
    AbyssalKindIsOrdinary { kind: CreatureKind },
    ChanceOutOfRange { field: &'static str, value: f32 },
    SpacingNegative { field: &'static str, value: f32 },
    DurationNotPositive { seconds: f32 },
    ZeroVictoryTarget,
    DuplicateRosterId { id: String },
}

impl fmt::Display for RulesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLanes => write!(f, "ruleset has no fish lanes"),
            Self::LaneSpeedNotPositive { lane, speed } => {
                write!(f, "lane {lane} has non-positive speed {speed}")
            }
            Self::LaneKindIsMultiHit { lane, kind } => {
                write!(f, "lane {lane} spawns multi-hit kind {kind:?}")
            }
            Self::AbyssalLaneEmpty => write!(f, "abyssal lane has no creature kinds"),
            Self::AbyssalKindIsOrdinary { kind } => {
                write!(f, "abyssal lane lists ordinary kind {kind:?}")
            }
            Self::ChanceOutOfRange { field, value } => {
                write!(f, "{field} must be within [0, 1], got {value}")
            }
            Self::SpacingNegative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::DurationNotPositive { seconds } => {
                write!(f, "match duration must be positive, got {seconds}s")
            }
            Self::ZeroVictoryTarget => write!(f, "victory target must be non-zero"),
            Self::DuplicateRosterId { id } => write!(f, "roster id {id:?} is used twice"),
        }
    }
}

impl std::error::Error for RulesetError {}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Ruleset(RulesetError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
            Self::Ruleset(err) => write!(f, "settings produce an invalid ruleset: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Ruleset(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<RulesetError> for SettingsError {
    fn from(err: RulesetError) -> Self {
        Self::Ruleset(err)
    }
}
