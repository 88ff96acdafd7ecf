//! Game state machine
//!
//! Player actions, the game state they act on, and the engine that applies them.

mod action;
mod engine;
mod state;

pub use action::Action;
pub use engine::Engine;
pub use state::{GameState, GameStatus};
