//! The level-matching game engine.
//!
//! `FlexboxGame` is the single owner of a session's `GameState`. The
//! presentation layer reads state through accessors and mutates it only
//! through the operations below. Everything is synchronous; each call
//! runs to completion.
//!
//! ## Example
//!
//! ```
//! use flexbox_quest::core::ContainerProperty;
//! use flexbox_quest::engine::FlexboxGame;
//!
//! let mut game = FlexboxGame::builtin();
//! game.update_container_property(ContainerProperty::Display, "flex");
//! game.update_container_property(ContainerProperty::JustifyContent, "center");
//! game.update_container_property(ContainerProperty::AlignItems, "center");
//!
//! let outcome = game.check_solution();
//! assert!(outcome.is_correct);
//! assert_eq!(game.total_score(), 10);
//! ```

use tracing::{debug, info, warn};

use super::error::GameError;
use super::event::{CheckOutcome, GameEvent};
use super::state::GameState;
use crate::core::{
    ConfigError, ContainerProperty, GameConfig, ItemIndex, ItemProperty, PageBoundsPolicy, UnknownLevelPolicy, UserAttempt,
};
use crate::css;
use crate::levels::{Level, LevelId, LevelPage, LevelSet, Mismatch};

/// Game engine for one learner session.
#[derive(Clone, Debug)]
pub struct FlexboxGame {
    levels: LevelSet,
    config: GameConfig,
    state: GameState,
    /// Events not yet drained by the host.
    events: Vec<GameEvent>,
}

impl FlexboxGame {
    /// Start a session on the first level with default configuration.
    #[must_use]
    pub fn new(levels: LevelSet) -> Self {
        Self::from_parts(levels, GameConfig::default())
    }

    /// Start a session on the first level.
    ///
    /// The configuration is validated first, since it may have been
    /// deserialized without going through the builder.
    pub fn with_config(levels: LevelSet, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(levels, config))
    }

    fn from_parts(levels: LevelSet, config: GameConfig) -> Self {
        let state = GameState::new(levels.first().id);
        Self {
            levels,
            config,
            state,
            events: Vec::new(),
        }
    }

    /// Start a session over the bundled levels.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(LevelSet::builtin())
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn current_level_id(&self) -> LevelId {
        self.state.current_level
    }

    /// Data of the level being played.
    #[must_use]
    pub fn current_level(&self) -> &Level {
        // `current_level` is only ever set to an id from `levels`.
        self.levels
            .get(self.state.current_level)
            .unwrap_or_else(|| self.levels.first())
    }

    #[must_use]
    pub fn attempt(&self) -> &UserAttempt {
        &self.state.attempt
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.state.is_correct
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.state.total_score
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed_levels.len()
    }

    #[must_use]
    pub fn is_completed(&self, level: LevelId) -> bool {
        self.state.is_completed(level)
    }

    /// Whether every level has been completed.
    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        self.completed_count() == self.levels.len()
    }

    /// Completed levels as a percentage of all levels (0.0..=100.0).
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        self.completed_count() as f64 / self.levels.len() as f64 * 100.0
    }

    #[must_use]
    pub fn level_page(&self) -> usize {
        self.state.level_page
    }

    /// Number of navigator pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.levels.total_pages(self.config.page_size)
    }

    /// Levels on the current navigator page.
    #[must_use]
    pub fn current_page_levels(&self) -> LevelPage<'_> {
        self.levels.page(self.state.level_page, self.config.page_size)
    }

    /// Targeted values the attempt currently gets wrong.
    #[must_use]
    pub fn mismatches(&self) -> Vec<Mismatch<'_>> {
        self.current_level().mismatches(&self.state.attempt)
    }

    /// Generated CSS for the current attempt.
    #[must_use]
    pub fn css_output(&self) -> String {
        css::render_css(&self.state.attempt)
    }

    // === Level Navigation ===

    /// Move to a level, resetting the attempt.
    ///
    /// Unknown ids fall back to the first level, or fail with
    /// `InvalidLevelId` under `UnknownLevelPolicy::Reject`. Returns the
    /// level actually entered.
    pub fn set_current_level(&mut self, level: LevelId) -> Result<LevelId, GameError> {
        let target = if self.levels.contains(level) {
            level
        } else {
            match self.config.unknown_level {
                UnknownLevelPolicy::Reject => {
                    warn!(%level, "Rejected unknown level");
                    return Err(GameError::InvalidLevelId(level));
                }
                UnknownLevelPolicy::Fallback => {
                    let first = self.levels.first().id;
                    warn!(%level, fallback = %first, "Unknown level, falling back to first level");
                    first
                }
            }
        };

        self.state.enter_level(target);
        debug!(level = %target, "Entered level");
        Ok(target)
    }

    /// Advance to the next level in list order.
    ///
    /// Returns the new level, or `None` (no change) on the last level.
    pub fn go_to_next_level(&mut self) -> Option<LevelId> {
        let next = self.levels.next_after(self.state.current_level)?.id;
        self.state.enter_level(next);
        debug!(level = %next, "Advanced to next level");
        Some(next)
    }

    // === Attempt Editing ===

    /// Overwrite a container value. Does not re-check the solution.
    pub fn update_container_property(&mut self, prop: ContainerProperty, value: impl Into<String>) {
        let value = value.into();
        debug!(property = prop.key(), %value, "Container property updated");
        self.state.attempt.container_properties.set(prop, value);
    }

    /// Overwrite one item's value. Other items are untouched.
    pub fn update_item_property(&mut self, prop: ItemProperty, item: ItemIndex, value: impl Into<String>) {
        let value = value.into();
        debug!(property = prop.key(), item = item.get(), %value, "Item property updated");
        self.state.attempt.item_properties.set(prop, item, value);
    }

    /// `update_item_property` with a raw index.
    ///
    /// Fails with `IndexOutOfRange`, without mutating, if `item` is not a
    /// tracked item.
    pub fn update_item_property_at(
        &mut self,
        prop: ItemProperty,
        item: usize,
        value: impl Into<String>,
    ) -> Result<(), GameError> {
        let item = ItemIndex::new(item).map_err(|e| {
            warn!(property = prop.key(), index = e.0, "Rejected item update");
            e
        })?;
        self.update_item_property(prop, item, value);
        Ok(())
    }

    /// Restore the baseline attempt for the current level.
    ///
    /// Progression (completed levels, streak, score) is kept.
    pub fn reset_level(&mut self) {
        self.state.reset_attempt();
        debug!(level = %self.state.current_level, "Level reset");
    }

    // === Checking ===

    /// Compare the attempt with the current level's target.
    ///
    /// A first-time match completes the level: it is added to the
    /// completed set, the streak goes up by one and the difficulty's
    /// points are added to the score. Re-checking a completed level
    /// awards nothing. A miss only clears `is_correct`; the streak is
    /// kept.
    pub fn check_solution(&mut self) -> CheckOutcome {
        let level = self.current_level();
        let id = level.id;
        let is_match = level.matches(&self.state.attempt);
        let points = self.config.points.points(level.difficulty);

        self.state.is_correct = is_match;

        let mut outcome = CheckOutcome {
            is_correct: is_match,
            ..CheckOutcome::default()
        };

        if !is_match {
            debug!(level = %id, "Solution does not match");
            return outcome;
        }
        if self.state.is_completed(id) {
            debug!(level = %id, "Solution matches already completed level");
            return outcome;
        }

        self.state.completed_levels.insert(id);
        self.state.streak += 1;
        self.state.total_score += points;

        outcome.newly_completed = true;
        outcome.points_awarded = points;
        self.events.push(GameEvent::LevelCompleted { level: id, points });

        info!(
            level = %id,
            points,
            streak = self.state.streak,
            total_score = self.state.total_score,
            "Level completed"
        );

        if self.is_all_complete() {
            outcome.all_levels_complete = true;
            self.events.push(GameEvent::AllLevelsComplete {
                total_score: self.state.total_score,
            });
            info!(total_score = self.state.total_score, "All levels complete");
        }

        outcome
    }

    /// Drain queued events in the order they occurred.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Pagination ===

    /// Show a navigator page.
    ///
    /// Out-of-range pages are clamped to the last page, or fail with
    /// `PageOutOfRange` under `PageBoundsPolicy::Reject`. Returns the page
    /// actually shown.
    pub fn set_level_page(&mut self, page: usize) -> Result<usize, GameError> {
        let total_pages = self.total_pages();
        let last = total_pages.saturating_sub(1);

        let page = if page <= last {
            page
        } else {
            match self.config.page_bounds {
                PageBoundsPolicy::Reject => {
                    warn!(page, total_pages, "Rejected level page");
                    return Err(GameError::PageOutOfRange { page, total_pages });
                }
                PageBoundsPolicy::Clamp => {
                    debug!(page, clamped = last, "Clamped level page");
                    last
                }
            }
        };

        self.state.level_page = page;
        Ok(page)
    }

    /// Show the next navigator page, staying on the last page.
    pub fn next_page(&mut self) -> usize {
        let last = self.total_pages().saturating_sub(1);
        self.state.level_page = (self.state.level_page + 1).min(last);
        self.state.level_page
    }

    /// Show the previous navigator page, staying on the first page.
    pub fn previous_page(&mut self) -> usize {
        self.state.level_page = self.state.level_page.saturating_sub(1);
        self.state.level_page
    }

    // === Snapshots ===

    /// Copy of the current state. O(1) for the completed set.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Replace the session state with a snapshot.
    ///
    /// The snapshot must refer only to levels in this engine's level set
    /// and to a valid page; otherwise state is left untouched. Queued
    /// events are discarded.
    pub fn restore(&mut self, state: GameState) -> Result<(), GameError> {
        if !self.levels.contains(state.current_level) {
            return Err(GameError::InvalidLevelId(state.current_level));
        }
        if let Some(unknown) = state.completed_levels.iter().find(|id| !self.levels.contains(**id)) {
            return Err(GameError::InvalidLevelId(*unknown));
        }
        let total_pages = self.total_pages();
        if state.level_page >= total_pages {
            return Err(GameError::PageOutOfRange {
                page: state.level_page,
                total_pages,
            });
        }

        info!(
            level = %state.current_level,
            completed = state.completed_levels.len(),
            "Restored game state"
        );
        self.state = state;
        self.events.clear();
        Ok(())
    }
}
