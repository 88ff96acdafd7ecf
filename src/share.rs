//! Sharing a finished game
//!
//! Formats the grid as an emoji transcript and hands it to a clipboard. Rows show only
//! colors, never letters, so a transcript does not give the word away.

use crate::core::MAX_ATTEMPTS;
use crate::game::{GameState, GameStatus};
use tracing::warn;

/// Clipboard capability used by `Share`
pub trait Clipboard {
    fn copy(&mut self, text: &str);
}

/// Emoji transcript of the game
///
/// A header (`Win: 3/6` or `Lose`), a blank line, then one line of squares per submitted
/// row in submission order.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::game::GameState;
/// use wordle_engine::share;
///
/// let state = GameState::new(Word::new("query").unwrap());
/// assert_eq!(share::format(&state), "Lose\n\n");
/// ```
#[must_use]
pub fn format(state: &GameState) -> String {
    let header = match state.status() {
        GameStatus::Win => format!("Win: {}/{MAX_ATTEMPTS}", state.attempts_used()),
        GameStatus::Playing | GameStatus::Lose => "Lose".to_string(),
    };

    let lines: Vec<String> = state
        .scored_rows()
        .map(|row| row.tiles().iter().map(|tile| tile.status.glyph()).collect())
        .collect();

    format!("{header}\n\n{}", lines.join("\n"))
}

/// System clipboard via `arboard`
///
/// The handle is created on first use and kept, since on some platforms clipboard contents
/// only live as long as the handle that set them.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn try_copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let result = clipboard.set_text(text);
        self.inner = Some(clipboard);
        result
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) {
        if let Err(err) = self.try_copy(text) {
            warn!(error = %err, "clipboard copy failed");
        }
    }
}

/// Clipboard that records every copy in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    copies: Vec<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text copied so far, oldest first
    #[must_use]
    pub fn copies(&self) -> &[String] {
        &self.copies
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) {
        self.copies.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Action, Engine};
    use crate::wordlists::WordSource;

    struct Fixed(Word);

    impl WordSource for Fixed {
        fn pick_secret_word(&mut self) -> Word {
            self.0.clone()
        }

        fn is_acceptable_guess(&self, _word: &str) -> bool {
            true
        }
    }

    fn play(secret: &str, guesses: &[&str]) -> (GameState, Engine<Fixed, MemoryClipboard>) {
        let mut engine = Engine::new(Fixed(Word::new(secret).unwrap()), MemoryClipboard::new());
        let mut state = engine.new_game();
        for guess in guesses {
            for letter in guess.chars() {
                state = engine.dispatch(&state, Action::KeyPressed(letter));
            }
            state = engine.dispatch(&state, Action::Submit);
        }
        (state, engine)
    }

    #[test]
    fn win_transcript() {
        let (state, _) = play("query", &["QUEUE", "QUERY"]);
        assert_eq!(format(&state), "Win: 2/6\n\n🟩🟩🟩⬜⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn lose_transcript_has_every_row() {
        let guesses = ["abcde"; MAX_ATTEMPTS];
        let (state, _) = play("hello", &guesses);
        let transcript = format(&state);

        let mut lines = transcript.lines();
        assert_eq!(lines.next(), Some("Lose"));
        assert_eq!(lines.next(), Some(""));
        // abcde vs hello: only E, misplaced
        for _ in 0..MAX_ATTEMPTS {
            assert_eq!(lines.next(), Some("⬜⬜⬜⬜🟨"));
        }
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn unsubmitted_letters_are_not_shared() {
        let (state, _) = play("query", &["QUEUE", "qu"]);
        assert_eq!(format(&state), "Lose\n\n🟩🟩🟩⬜⬜");
    }

    #[test]
    fn share_copies_transcript_once() {
        let (state, mut engine) = play("query", &["QUERY"]);
        let shared = engine.dispatch(&state, Action::Share);

        assert!(shared.is_copied());
        assert_eq!(engine.clipboard().copies().len(), 1);
        assert_eq!(engine.clipboard().last(), Some("Win: 1/6\n\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn memory_clipboard_records_in_order() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.last(), None);
        clipboard.copy("one");
        clipboard.copy("two");
        assert_eq!(clipboard.copies(), ["one", "two"]);
        assert_eq!(clipboard.last(), Some("two"));
    }
}
