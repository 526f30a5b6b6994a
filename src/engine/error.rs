//! Engine errors.
//!
//! All of these are caller contract violations. Depending on
//! `GameConfig`, unknown levels and out-of-range pages are recovered
//! (fallback / clamp) instead of being returned.

use thiserror::Error;

use crate::core::ItemIndexOutOfRange;
use crate::levels::LevelId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown level id {0}")]
    InvalidLevelId(LevelId),

    #[error(transparent)]
    IndexOutOfRange(#[from] ItemIndexOutOfRange),

    #[error("level page {page} out of range 0..{total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
