//! Engine contract errors
//!
//! These signal a caller handing the scorer or the keyboard something the game rules can
//! never produce. Gameplay conditions (a rejected guess, a key press after the game ended)
//! are not errors and never show up here.

use super::ROW_LENGTH;
use thiserror::Error;

/// Contract violation reported by the scorer or the keyboard aggregator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("guess must be {expected} letters, got {actual}", expected = ROW_LENGTH)]
    GuessLength { actual: usize },
    #[error("no keyboard key for letter {0:?}")]
    UnknownKey(char),
}
