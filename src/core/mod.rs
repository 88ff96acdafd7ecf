//! Core domain types for the puzzle
//!
//! Letter statuses, words, the letter grid, row scoring and keyboard aggregation.
//! Everything here is pure: no I/O, no randomness, no logging.

mod error;
mod grid;
mod keyboard;
mod scorer;
mod status;
mod word;

/// Letters per guess
pub const ROW_LENGTH: usize = 5;

/// Guesses per game
pub const MAX_ATTEMPTS: usize = 6;

pub use error::EngineError;
pub use grid::{Row, Tile};
pub use keyboard::{KEY_ROWS, Keyboard, KeyboardKey};
pub use scorer::{RowScore, score, try_score};
pub use status::LetterStatus;
pub use word::{Word, WordError};
