//! Game engine: session state, operations, events and errors.
//!
//! `FlexboxGame` owns one learner's `GameState` and is the only thing that
//! mutates it. Hosts drive it from UI event handlers and read back state,
//! `CheckOutcome`s and queued `GameEvent`s.

pub mod error;
pub mod event;
pub mod state;
pub mod game;

pub use error::GameError;
pub use event::{CheckOutcome, GameEvent};
pub use state::GameState;
pub use game::FlexboxGame;
