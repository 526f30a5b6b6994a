//! Level data: definitions, the validated level set, and bundled levels.
//!
//! Levels are static data supplied to the engine at startup. The engine
//! only reads them; it never interprets titles, descriptions or hints.

pub mod level;
pub mod registry;
pub mod builtin;

pub use level::{Difficulty, Level, LevelId, Mismatch, PropertySlot};
pub use registry::{LevelError, LevelPage, LevelSet};
pub use builtin::builtin_levels;
