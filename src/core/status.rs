//! Per-letter feedback states
//!
//! Every tile and keyboard key carries a `LetterStatus`. The numeric priority only matters
//! when feedback from several rows is merged onto the keyboard: a lower value is stronger
//! and cannot be replaced by a weaker one.

/// Feedback state of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Nothing typed or nothing known yet
    #[default]
    Unused,
    /// Typed into the active row, not yet submitted
    Used,
    /// Right letter, right position
    Correct,
    /// Letter is in the word at another position
    Misplaced,
    /// Letter is not in the word (or all its occurrences are already accounted for)
    Incorrect,
}

impl LetterStatus {
    /// Tie-break rank used by keyboard aggregation (lower wins)
    ///
    /// ```
    /// use wordle_engine::core::LetterStatus;
    ///
    /// assert!(LetterStatus::Correct.priority() < LetterStatus::Misplaced.priority());
    /// assert_eq!(LetterStatus::Used.priority(), LetterStatus::Incorrect.priority());
    /// ```
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 0,
            Self::Misplaced => 1,
            Self::Unused | Self::Used | Self::Incorrect => 2,
        }
    }

    /// Whether this status came out of scoring a submitted row
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced | Self::Incorrect)
    }

    /// Square glyph used in shared transcripts
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Unused | Self::Used | Self::Incorrect => '⬜',
        }
    }
}
