//! Engine events and check results.
//!
//! `check_solution` reports its result directly as a `CheckOutcome` and
//! also queues `GameEvent`s for hosts that react to progression (e.g. a
//! congratulations dialog). Queued events are drained with
//! `FlexboxGame::take_events`.

use serde::{Deserialize, Serialize};

use crate::levels::LevelId;

/// Something that happened to the learner's progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A level was completed for the first time this session.
    LevelCompleted { level: LevelId, points: u32 },

    /// The last uncompleted level was just completed. Fires once per session.
    AllLevelsComplete { total_score: u32 },
}

/// Result of one `check_solution` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the attempt matches the current level.
    pub is_correct: bool,

    /// Whether this check completed the level for the first time.
    pub newly_completed: bool,

    /// Points added to the total score by this check.
    pub points_awarded: u32,

    /// Whether this check completed the final remaining level.
    pub all_levels_complete: bool,
}
