//! Game engine
//!
//! Owns the game state machine: target selection, guess processing,
//! attempt tracking, and the aggregate grey/yellow/green symbol sets.

mod game;
pub mod selector;
mod symbols;

pub use game::{GameConfig, GameEngine, GameStatus, MAX_ATTEMPTS, ScoredGuess};
pub use selector::{EmptyPoolError, SelectionMode, select_target};
pub use symbols::SymbolTracker;
