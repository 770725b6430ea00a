//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Each tick maps a previous snapshot to a new one
//! - Randomness comes only from the RNG passed into the tick
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bubbles;
pub mod catch;
pub mod clock;
pub mod hook;
pub mod kinds;
pub mod motion;
pub mod ruleset;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catch::CatchOutcome;
pub use clock::FrameClock;
pub use kinds::{CreatureKind, KindProfile};
pub use ruleset::{AbyssalLane, Heading, Lane, RosterEntry, Ruleset, VictoryCondition};
pub use state::{Bubble, Creature, Fisherman, GameState, GameStatus, Hook, HookPhase, Vitality};
pub use tick::{TickInput, cast, reset, tick};
