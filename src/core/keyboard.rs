//! On-screen keyboard feedback
//!
//! Merges the statuses of each submitted row onto one key per letter. A key only moves to
//! an equal or stronger status (lower priority value), so once a letter is known to be
//! Correct later guesses cannot hide it again.

use super::{EngineError, LetterStatus};
use rustc_hash::FxHashMap;

/// QWERTY display rows. Grouping is presentation only.
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardKey {
    pub letter: char,
    pub status: LetterStatus,
}

/// Keyboard feedback for every letter `a..=z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: FxHashMap<char, KeyboardKey>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    /// Keyboard with every letter Unused
    #[must_use]
    pub fn new() -> Self {
        let keys = ('a'..='z')
            .map(|letter| {
                (
                    letter,
                    KeyboardKey {
                        letter,
                        status: LetterStatus::Unused,
                    },
                )
            })
            .collect();
        Self { keys }
    }

    /// Key for `letter` (case-insensitive)
    #[must_use]
    pub fn key(&self, letter: char) -> Option<&KeyboardKey> {
        self.keys.get(&letter.to_ascii_lowercase())
    }

    /// Current status of `letter` (case-insensitive)
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.key(letter).map(|key| key.status)
    }

    /// Keys grouped into the QWERTY display rows
    pub fn rows(&self) -> impl Iterator<Item = Vec<KeyboardKey>> + '_ {
        KEY_ROWS.iter().map(move |row| {
            row.chars()
                .filter_map(|letter| self.keys.get(&letter).copied())
                .collect()
        })
    }

    /// Merge one scored row into the keyboard
    ///
    /// For each `(letter, status)` pair the key takes the new status only if its priority is
    /// less than or equal to the current one. Letters absent from `row` keep their status.
    ///
    /// # Errors
    /// Returns `EngineError::UnknownKey` if a letter has no key on the keyboard.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Keyboard, LetterStatus};
    ///
    /// let keyboard = Keyboard::new()
    ///     .aggregate(&[('E', LetterStatus::Correct)])
    ///     .unwrap()
    ///     .aggregate(&[('e', LetterStatus::Incorrect)])
    ///     .unwrap();
    ///
    /// assert_eq!(keyboard.status('e'), Some(LetterStatus::Correct));
    /// ```
    pub fn aggregate(&self, row: &[(char, LetterStatus)]) -> Result<Self, EngineError> {
        let mut keys = self.keys.clone();

        for &(letter, status) in row {
            let key = keys
                .get_mut(&letter.to_ascii_lowercase())
                .ok_or(EngineError::UnknownKey(letter))?;

            if status.priority() <= key.status.priority() {
                key.status = status;
            }
        }

        Ok(Self { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Correct, Incorrect, Misplaced, Unused, Used};
    use super::*;

    #[test]
    fn new_keyboard_has_every_letter_unused() {
        let keyboard = Keyboard::new();
        for letter in 'a'..='z' {
            assert_eq!(keyboard.status(letter), Some(Unused));
        }
        assert_eq!(keyboard.status('A'), Some(Unused));
        assert_eq!(keyboard.status('1'), None);
    }

    #[test]
    fn rows_follow_qwerty_layout() {
        let rows: Vec<Vec<KeyboardKey>> = Keyboard::new().rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
        assert_eq!(rows[0][0].letter, 'q');
        assert_eq!(rows[2][6].letter, 'm');
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = Keyboard::new().aggregate(&[('r', Correct)]).unwrap();

        for status in [Misplaced, Incorrect, Used, Unused] {
            keyboard = keyboard.aggregate(&[('r', status)]).unwrap();
            assert_eq!(keyboard.status('r'), Some(Correct));
        }
    }

    #[test]
    fn misplaced_upgrades_but_does_not_downgrade() {
        let keyboard = Keyboard::new().aggregate(&[('e', Misplaced)]).unwrap();

        let downgraded = keyboard.aggregate(&[('e', Incorrect)]).unwrap();
        assert_eq!(downgraded.status('e'), Some(Misplaced));

        let upgraded = keyboard.aggregate(&[('e', Correct)]).unwrap();
        assert_eq!(upgraded.status('e'), Some(Correct));
    }

    #[test]
    fn equal_priority_overwrites() {
        let keyboard = Keyboard::new().aggregate(&[('a', Used)]).unwrap();
        assert_eq!(keyboard.status('a'), Some(Used));

        let keyboard = keyboard.aggregate(&[('a', Incorrect)]).unwrap();
        assert_eq!(keyboard.status('a'), Some(Incorrect));
    }

    #[test]
    fn repeated_letter_within_row_keeps_best_status() {
        // EERIE against RIVER scores the Es as Misplaced, Incorrect, Incorrect
        let row = [
            ('E', Misplaced),
            ('E', Incorrect),
            ('R', Misplaced),
            ('I', Misplaced),
            ('E', Incorrect),
        ];
        let keyboard = Keyboard::new().aggregate(&row).unwrap();
        assert_eq!(keyboard.status('e'), Some(Misplaced));
        assert_eq!(keyboard.status('r'), Some(Misplaced));
        assert_eq!(keyboard.status('i'), Some(Misplaced));
    }

    #[test]
    fn letters_outside_row_are_untouched() {
        let before = Keyboard::new().aggregate(&[('z', Incorrect)]).unwrap();
        let after = before.aggregate(&[('q', Correct)]).unwrap();
        assert_eq!(after.status('z'), Some(Incorrect));
        assert_eq!(after.status('x'), Some(Unused));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let keyboard = Keyboard::new();
        assert_eq!(
            keyboard.aggregate(&[('a', Correct), ('7', Incorrect)]),
            Err(EngineError::UnknownKey('7'))
        );
    }

    #[test]
    fn aggregate_leaves_original_untouched() {
        let before = Keyboard::new();
        let _after = before.aggregate(&[('a', Correct)]).unwrap();
        assert_eq!(before.status('a'), Some(Unused));
    }
}
