//! Game configuration.
//!
//! Hosts configure the engine at startup with a `GameConfig`, either via the
//! builder methods or from TOML:
//!
//! ```toml
//! page_size = 10
//! unknown_level = "fallback"   # or "reject"
//! page_bounds = "clamp"        # or "reject"
//!
//! [points]
//! beginner = 10
//! intermediate = 20
//! advanced = 30
//! ```
//!
//! Every field is optional; omitted fields take the defaults shown.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::levels::Difficulty;

/// Levels listed per page in the level navigator.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration loading/validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Points awarded for completing a level, per difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
}

impl ScoreTable {
    /// Points for a level of the given difficulty.
    #[must_use]
    pub const fn points(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            beginner: 10,
            intermediate: 20,
            advanced: 30,
        }
    }
}

/// What to do when asked to move to a level id that doesn't exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLevelPolicy {
    /// Move to the first level of the set.
    #[default]
    Fallback,
    /// Return `InvalidLevelId` and leave state untouched.
    Reject,
}

/// What to do with a level page outside `0..total_pages`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBoundsPolicy {
    /// Clamp to the nearest valid page.
    #[default]
    Clamp,
    /// Return `PageOutOfRange` and leave state untouched.
    Reject,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Levels per navigator page (>= 1).
    pub page_size: usize,

    /// Points per difficulty.
    pub points: ScoreTable,

    /// Policy for unknown level ids.
    pub unknown_level: UnknownLevelPolicy,

    /// Policy for out-of-range level pages.
    pub page_bounds: PageBoundsPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            points: ScoreTable::default(),
            unknown_level: UnknownLevelPolicy::default(),
            page_bounds: PageBoundsPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the navigator page size.
    ///
    /// Panics if `page_size` is 0.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "Page size must be at least 1");
        self.page_size = page_size;
        self
    }

    /// Set the score table.
    #[must_use]
    pub fn with_points(mut self, points: ScoreTable) -> Self {
        self.points = points;
        self
    }

    /// Reject unknown level ids instead of falling back.
    #[must_use]
    pub fn reject_unknown_levels(mut self) -> Self {
        self.unknown_level = UnknownLevelPolicy::Reject;
        self
    }

    /// Reject out-of-range pages instead of clamping.
    #[must_use]
    pub fn reject_out_of_range_pages(mut self) -> Self {
        self.page_bounds = PageBoundsPolicy::Reject;
        self
    }

    /// Check invariants that serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), page_size = config.page_size, "Loaded game config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.points.points(Difficulty::Beginner), 10);
        assert_eq!(config.points.points(Difficulty::Intermediate), 20);
        assert_eq!(config.points.points(Difficulty::Advanced), 30);
        assert_eq!(config.unknown_level, UnknownLevelPolicy::Fallback);
        assert_eq!(config.page_bounds, PageBoundsPolicy::Clamp);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_page_size(5)
            .reject_unknown_levels()
            .reject_out_of_range_pages();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.unknown_level, UnknownLevelPolicy::Reject);
        assert_eq!(config.page_bounds, PageBoundsPolicy::Reject);
    }

    #[test]
    #[should_panic(expected = "Page size must be at least 1")]
    fn test_builder_zero_page_size() {
        let _ = GameConfig::new().with_page_size(0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            unknown_level = "reject"

            [points]
            advanced = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.unknown_level, UnknownLevelPolicy::Reject);
        assert_eq!(config.points.beginner, 10);
        assert_eq!(config.points.advanced, 50);
    }

    #[test]
    fn test_toml_zero_page_size() {
        let err = GameConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_toml_bad_policy() {
        let err = GameConfig::from_toml_str(r#"page_bounds = "wrap""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/flexbox-quest.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
