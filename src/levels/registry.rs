//! The ordered level set.
//!
//! `LevelSet` holds every level of a game in progression order and
//! provides lookup by `LevelId`, difficulty filtering and pagination for
//! the level navigator.
//!
//! Construction validates the dataset, so a `LevelSet` is never empty and
//! never contains duplicate ids or levels without container targets.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use super::level::{Difficulty, Level, LevelId};

/// Levels on one navigator page. Inline capacity covers the default page size.
pub type LevelPage<'a> = SmallVec<[&'a Level; 10]>;

/// Dataset validation failure.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level set is empty")]
    Empty,

    #[error("duplicate level id {0}")]
    DuplicateId(LevelId),

    #[error("level ids must be positive")]
    ZeroId,

    #[error("{0} has no container target")]
    EmptyContainerTarget(LevelId),

    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validated, ordered collection of levels.
#[derive(Clone, Debug)]
pub struct LevelSet {
    levels: Vec<Level>,
    positions: FxHashMap<LevelId, usize>,
}

impl LevelSet {
    /// Validate and index a dataset. Order of `levels` is progression order.
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut positions = FxHashMap::default();
        for (pos, level) in levels.iter().enumerate() {
            if level.id.raw() == 0 {
                return Err(LevelError::ZeroId);
            }
            if level.container_target.is_empty() {
                return Err(LevelError::EmptyContainerTarget(level.id));
            }
            if positions.insert(level.id, pos).is_some() {
                return Err(LevelError::DuplicateId(level.id));
            }
        }

        debug!(count = levels.len(), "Indexed level set");
        Ok(Self { levels, positions })
    }

    /// Parse a JSON array of levels.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by ID.
    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.position(id).map(|pos| &self.levels[pos])
    }

    /// Check if a level ID exists.
    #[must_use]
    pub fn contains(&self, id: LevelId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Index of a level in progression order.
    #[must_use]
    pub fn position(&self, id: LevelId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// First level in progression order.
    #[must_use]
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    /// Last level in progression order.
    #[must_use]
    pub fn last(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    /// The level after `id` in progression order.
    ///
    /// Follows list order rather than `id + 1`, so sparse ids still advance.
    #[must_use]
    pub fn next_after(&self, id: LevelId) -> Option<&Level> {
        let pos = self.position(id)?;
        self.levels.get(pos + 1)
    }

    /// Iterate levels in progression order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Levels of one difficulty, in progression order.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(move |l| l.difficulty == difficulty)
    }

    /// Number of navigator pages: `ceil(len / page_size)`.
    #[must_use]
    pub fn total_pages(&self, page_size: usize) -> usize {
        self.levels.len().div_ceil(page_size)
    }

    /// Levels on a page. Empty if `page` is past the end.
    #[must_use]
    pub fn page(&self, page: usize, page_size: usize) -> LevelPage<'_> {
        self.levels
            .iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    /// Page containing a level.
    #[must_use]
    pub fn page_of(&self, id: LevelId, page_size: usize) -> Option<usize> {
        self.position(id).map(|pos| pos / page_size)
    }
}
