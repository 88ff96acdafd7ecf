//! Row scoring
//!
//! Classifies each guessed letter against the secret word. Each letter of the secret can
//! back at most one Correct or Misplaced mark, and exact matches claim their letters first.

use super::{EngineError, LetterStatus, ROW_LENGTH, Word};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowScore {
    statuses: [LetterStatus; ROW_LENGTH],
    solved: bool,
}

impl RowScore {
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; ROW_LENGTH] {
        &self.statuses
    }

    /// True when every letter was an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Emoji rendering such as "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|status| status.glyph()).collect()
    }
}

/// Score a full guess against the secret word
///
/// Comparison is case-insensitive; letters are lower-cased before matching and counting.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove them from the pool
/// 2. Second pass: mark remaining letters Misplaced while the pool still holds them,
///    Incorrect otherwise
///
/// # Examples
/// ```
/// use wordle_engine::core::{LetterStatus::*, Word, score};
///
/// let secret = Word::new("river").unwrap();
/// let result = score(&['E', 'E', 'R', 'I', 'E'], &secret);
///
/// // Only one E exists in RIVER, so only the first E earns a mark
/// assert_eq!(
///     result.statuses(),
///     &[Misplaced, Incorrect, Misplaced, Misplaced, Incorrect]
/// );
/// assert!(!result.is_solved());
/// ```
#[must_use]
pub fn score(guess: &[char; ROW_LENGTH], secret: &Word) -> RowScore {
    let guess = guess.map(|letter| letter.to_ascii_lowercase());
    let mut statuses = [LetterStatus::Incorrect; ROW_LENGTH];
    let mut resolved = [false; ROW_LENGTH];
    let mut remaining = secret.letter_counts();

    // First pass: exact matches have first claim on shared letters
    for (i, &letter) in guess.iter().enumerate() {
        if letter == secret.char_at(i) {
            statuses[i] = LetterStatus::Correct;
            resolved[i] = true;

            if let Some(count) = remaining.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, drawn from whatever is left
    for (i, &letter) in guess.iter().enumerate() {
        if resolved[i] {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            statuses[i] = LetterStatus::Misplaced;
            *count -= 1;
        }
    }

    RowScore {
        statuses,
        solved: resolved.iter().all(|&exact| exact),
    }
}

/// Score a guess of unchecked length
///
/// # Errors
/// Returns `EngineError::GuessLength` if `guess` is not exactly `ROW_LENGTH` letters.
pub fn try_score(guess: &[char], secret: &Word) -> Result<RowScore, EngineError> {
    let guess: &[char; ROW_LENGTH] = guess.try_into().map_err(|_| EngineError::GuessLength {
        actual: guess.len(),
    })?;
    Ok(score(guess, secret))
}
