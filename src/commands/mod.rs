//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_guess};
pub use simple::{GuessLineError, LineCommand, check_guess, play_guess, run_simple};
