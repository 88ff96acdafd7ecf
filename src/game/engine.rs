//! The game reducer
//!
//! `Engine::dispatch` turns the current state and one player action into the next state.
//! Actions that make no sense right now (typing after the game ended, submitting a partial
//! row) return the input state unchanged.

use super::{Action, GameState, GameStatus};
use crate::core::{MAX_ATTEMPTS, score};
use crate::share::{self, Clipboard};
use crate::wordlists::WordSource;
use tracing::{debug, info, instrument};

/// Game reducer
///
/// Owns the two external capabilities the rules consult: the word source (secret words and
/// the accepted-guess check) and the clipboard (sharing).
pub struct Engine<W: WordSource, C: Clipboard> {
    words: W,
    clipboard: C,
}

impl<W: WordSource, C: Clipboard> Engine<W, C> {
    #[must_use]
    pub const fn new(words: W, clipboard: C) -> Self {
        Self { words, clipboard }
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    #[must_use]
    pub const fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Start a game with a freshly picked secret word
    #[must_use]
    pub fn new_game(&mut self) -> GameState {
        let secret = self.words.pick_secret_word();
        info!("new game");
        debug!(secret = %secret, "secret word picked");
        GameState::new(secret)
    }

    /// Apply one action
    ///
    /// # Panics
    /// Panics if a scored row holds a letter the keyboard has no key for. Key presses outside
    /// `a..=z` are ignored before they reach the grid, so this means the grid was corrupted.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::game::{Action, Engine, GameStatus};
    /// use wordle_engine::share::MemoryClipboard;
    /// use wordle_engine::wordlists::WordList;
    ///
    /// let words = WordList::with_seed(vec![Word::new("query").unwrap()], &[], Some(1)).unwrap();
    /// let mut engine = Engine::new(words, MemoryClipboard::new());
    ///
    /// let mut state = engine.new_game();
    /// for letter in "QUERY".chars() {
    ///     state = engine.dispatch(&state, Action::KeyPressed(letter));
    /// }
    /// state = engine.dispatch(&state, Action::Submit);
    ///
    /// assert_eq!(state.status(), GameStatus::Win);
    /// ```
    #[instrument(
        level = "debug",
        skip(self, state),
        fields(row = state.active_row_index(), status = ?state.status())
    )]
    pub fn dispatch(&mut self, state: &GameState, action: Action) -> GameState {
        let next = match action {
            Action::KeyPressed(letter) => key_pressed(state, letter),
            Action::Delete => delete(state),
            Action::Submit => self.submit(state),
            Action::Retry => Some(self.new_game()),
            Action::Share => Some(self.share(state)),
        };

        next.unwrap_or_else(|| {
            debug!("action ignored");
            state.clone()
        })
    }

    fn submit(&self, state: &GameState) -> Option<GameState> {
        if state.status.is_terminal() {
            return None;
        }
        let row = state.active_row()?;
        let letters = row.letters()?;
        let guess = row.word();

        if !self.words.is_acceptable_guess(&guess) {
            debug!(%guess, "guess not in word list");
            let mut next = state.clone();
            next.invalid_guess = true;
            next.copied = false;
            return Some(next);
        }

        let result = score(&letters, &state.secret);
        let scored = row.scored(&result);
        let keyboard = state
            .keyboard
            .aggregate(&scored.letter_statuses())
            .unwrap_or_else(|err| panic!("scored row does not fit the keyboard: {err}"));

        let mut next = state.clone();
        next.rows[state.active_row] = scored;
        next.keyboard = keyboard;
        next.active_row += 1;
        next.invalid_guess = false;
        next.copied = false;
        next.status = if result.is_solved() {
            GameStatus::Win
        } else if next.active_row == MAX_ATTEMPTS {
            GameStatus::Lose
        } else {
            GameStatus::Playing
        };

        debug!(%guess, pattern = %result.to_emoji(), "guess scored");
        if next.status.is_terminal() {
            info!(status = ?next.status, attempts = next.active_row, "game over");
        }

        Some(next)
    }

    fn share(&mut self, state: &GameState) -> GameState {
        let transcript = share::format(state);
        self.clipboard.copy(&transcript);
        debug!("transcript copied");

        let mut next = state.clone();
        next.copied = true;
        next
    }
}

fn key_pressed(state: &GameState, letter: char) -> Option<GameState> {
    if state.status.is_terminal() || !letter.is_ascii_alphabetic() {
        return None;
    }
    let row = state.active_row()?.push_letter(letter)?;
    Some(state.with_active_row(row))
}

fn delete(state: &GameState) -> Option<GameState> {
    if state.status.is_terminal() {
        return None;
    }
    let row = state.active_row()?.pop_letter()?;
    Some(state.with_active_row(row))
}
