//! Game state
//!
//! A `GameState` is a plain value. The engine never edits one in place: each accepted action
//! produces a new state, and renderers only ever read it.

use crate::core::{Keyboard, MAX_ATTEMPTS, Row, Word};

/// Overall outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Win,
    Lose,
}

impl GameStatus {
    /// Win and Lose accept no further typing or submissions
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) rows: [Row; MAX_ATTEMPTS],
    pub(super) keyboard: Keyboard,
    pub(super) secret: Word,
    pub(super) active_row: usize,
    pub(super) invalid_guess: bool,
    pub(super) copied: bool,
    pub(super) status: GameStatus,
}

impl GameState {
    /// Fresh game: empty grid, untouched keyboard
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            rows: std::array::from_fn(|_| Row::new()),
            keyboard: Keyboard::new(),
            secret,
            active_row: 0,
            invalid_guess: false,
            copied: false,
            status: GameStatus::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Index of the row accepting input; `MAX_ATTEMPTS` once every row is used
    #[inline]
    #[must_use]
    pub const fn active_row_index(&self) -> usize {
        self.active_row
    }

    /// The row accepting input, if any remains
    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.get(self.active_row)
    }

    /// Set when the last submission was not in the accepted-guess list
    #[inline]
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        self.invalid_guess
    }

    /// Set by a share until the next state change
    #[inline]
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        self.copied
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of submitted guesses
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.active_row
    }

    /// Submitted rows, in submission order
    pub fn scored_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take(self.active_row)
    }

    /// Copy of this state with the active row replaced after an edit
    pub(super) fn with_active_row(&self, row: Row) -> Self {
        let mut next = self.clone();
        next.rows[self.active_row] = row;
        next.invalid_guess = false;
        next.copied = false;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty_and_playing() {
        let state = GameState::new(Word::new("query").unwrap());

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.active_row_index(), 0);
        assert_eq!(state.attempts_used(), 0);
        assert!(!state.is_invalid_guess());
        assert!(!state.is_copied());
        assert_eq!(state.secret().text(), "query");
        assert_eq!(state.rows().len(), MAX_ATTEMPTS);
        assert!(state.rows().iter().all(|row| *row == Row::new()));
        assert_eq!(state.keyboard(), &Keyboard::new());
        assert_eq!(state.scored_rows().count(), 0);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Win.is_terminal());
        assert!(GameStatus::Lose.is_terminal());
    }

    #[test]
    fn active_row_absent_after_last_attempt() {
        let mut state = GameState::new(Word::new("hello").unwrap());
        state.active_row = MAX_ATTEMPTS;
        assert!(state.active_row().is_none());
    }
}
