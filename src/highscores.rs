//! High score leaderboard
//!
//! Keeps the top 10 finished matches for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, GameStatus};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreEntry {
    pub score: u64,
    /// `Victory` or `GameOver`
    pub outcome: GameStatus,
    /// Seconds left on the clock when the match ended
    pub time_left: f32,
}

/// High score leaderboard, sorted by score descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 0-based slot a score would take, None if it would not make the board.
    /// Ties keep the earlier match ahead.
    fn slot_for(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Insert a score. Returns the rank achieved (1-indexed).
    pub fn add_score(&mut self, score: u64, outcome: GameStatus, time_left: f32) -> Option<usize> {
        let slot = self.slot_for(score)?;
        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                outcome,
                time_left,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Record a finished match. Unfinished states are ignored.
    pub fn record(&mut self, state: &GameState) -> Option<usize> {
        if !state.status.is_finished() {
            return None;
        }
        let rank = self.add_score(state.score, state.status, state.time_left);
        if let Some(rank) = rank {
            log::info!("New high score #{rank}: {}", state.score);
        }
        rank
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
