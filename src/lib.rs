//! # flexbox-quest
//!
//! Game engine for an interactive CSS Flexbox trainer.
//!
//! Each level is a target style configuration. The learner edits an
//! attempt (six container properties plus five properties for each of
//! three items), checks it against the target, and earns points and
//! streak for every level completed for the first time.
//!
//! ## Design Principles
//!
//! 1. **Closed Vocabulary**: Property keys are enums and item indices are
//!    bounded, so unknown keys and out-of-range items can't be stored.
//!
//! 2. **Single Owner**: `FlexboxGame` owns the session state. Hosts read it
//!    and call operations; nothing else mutates it.
//!
//! 3. **Data-Driven Levels**: Levels are plain data, loaded from JSON or
//!    taken from the bundled set, and validated once at startup.
//!
//! ## Modules
//!
//! - `core`: Property vocabulary, the learner's attempt, configuration
//! - `levels`: Level definitions, the validated level set, bundled levels
//! - `engine`: Session state, operations, events, errors
//! - `css`: Generated CSS for an attempt
//! - `telemetry`: Optional tracing subscriber setup for hosts

pub mod core;
pub mod levels;
pub mod engine;
pub mod css;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    ContainerProperty, ItemProperty, ItemIndex, ITEM_COUNT,
    ContainerProperties, ItemProperties, UserAttempt,
    GameConfig, ScoreTable, UnknownLevelPolicy, PageBoundsPolicy, ConfigError,
};

pub use crate::levels::{
    Level, LevelId, Difficulty, LevelSet, LevelError, Mismatch, PropertySlot,
};

pub use crate::engine::{FlexboxGame, GameState, GameError, GameEvent, CheckOutcome};

pub use crate::css::render_css;
