//! Session game state.
//!
//! ## GameState
//!
//! Everything the engine tracks for one learner session:
//! - Current level and the attempt being edited
//! - Result of the last check
//! - Progression: completed levels, streak, total score
//! - Navigator page
//!
//! Uses an `im` persistent set for completed levels so snapshots are
//! O(1) to clone.
//!
//! ## Invariants
//!
//! - `completed_levels`, `streak` and `total_score` never decrease.
//! - Entering a level always starts from the baseline attempt with
//!   `is_correct == false`.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::core::UserAttempt;
use crate::levels::LevelId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Level being played.
    pub current_level: LevelId,

    /// Learner's current property values.
    pub attempt: UserAttempt,

    /// Result of the last check. Not recomputed on edits.
    pub is_correct: bool,

    /// Levels completed this session.
    pub completed_levels: OrdSet<LevelId>,

    /// Newly completed levels this session. Never reset by a failed check.
    pub streak: u32,

    /// Sum of awarded points.
    pub total_score: u32,

    /// Zero-based navigator page.
    pub level_page: usize,
}

impl GameState {
    /// Fresh session state starting at `first_level`.
    #[must_use]
    pub fn new(first_level: LevelId) -> Self {
        Self {
            current_level: first_level,
            attempt: UserAttempt::baseline(),
            is_correct: false,
            completed_levels: OrdSet::new(),
            streak: 0,
            total_score: 0,
            level_page: 0,
        }
    }

    /// Move to a level, starting over from the baseline attempt.
    pub fn enter_level(&mut self, level: LevelId) {
        self.current_level = level;
        self.reset_attempt();
    }

    /// Restore the baseline attempt and clear the last check result.
    pub fn reset_attempt(&mut self) {
        self.attempt = UserAttempt::baseline();
        self.is_correct = false;
    }

    /// Check if a level has been completed.
    #[must_use]
    pub fn is_completed(&self, level: LevelId) -> bool {
        self.completed_levels.contains(&level)
    }

    /// Encode as compact binary for hand-off to the presentation layer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes`.
    ///
    /// The result is not validated against a level set; pass it to
    /// `FlexboxGame::restore` for that.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
