//! Score a single guess against a chosen secret word

use crate::core::{RowScore, Word, try_score};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: String,
    pub secret: Word,
    pub score: RowScore,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if the secret is not a valid word or the guess has the wrong length.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret word {secret:?}"))?;
    let letters: Vec<char> = guess.chars().collect();
    let score = try_score(&letters, &secret).with_context(|| format!("cannot score {guess:?}"))?;

    Ok(ScoreResult {
        guess: guess.to_string(),
        secret,
        score,
    })
}
