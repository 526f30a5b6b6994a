//! Core types: property vocabulary, the learner's attempt, configuration.
//!
//! These are the building blocks the level data and the engine share.

pub mod property;
pub mod attempt;
pub mod config;

pub use property::{ContainerProperty, ItemIndex, ItemIndexOutOfRange, ItemProperty, ITEM_COUNT};
pub use attempt::{ContainerProperties, ItemProperties, UserAttempt};
pub use config::{
    ConfigError, GameConfig, PageBoundsPolicy, ScoreTable, UnknownLevelPolicy, DEFAULT_PAGE_SIZE,
};
