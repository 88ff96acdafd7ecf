//! Tiles and rows of the letter grid
//!
//! Rows are small value types. Every edit returns a new `Row` instead of mutating the old
//! one, so a `GameState` handed to a renderer never changes underneath it.

use super::scorer::RowScore;
use super::{LetterStatus, ROW_LENGTH};

/// One letter slot within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub position: usize,
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl Tile {
    #[must_use]
    pub const fn empty(position: usize) -> Self {
        Self {
            position,
            letter: None,
            status: LetterStatus::Unused,
        }
    }
}

/// One guess attempt: `ROW_LENGTH` tiles plus the next writable position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    tiles: [Tile; ROW_LENGTH],
    cursor: usize,
    solved: bool,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: std::array::from_fn(Tile::empty),
            cursor: 0,
            solved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; ROW_LENGTH] {
        &self.tiles
    }

    /// Index of the next writable tile (`ROW_LENGTH` when full)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.cursor == ROW_LENGTH
    }

    /// Set once by scoring, when every letter landed in the right position
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the row has been submitted and scored
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.tiles.iter().all(|tile| tile.status.is_scored())
    }

    /// The typed letters in original case, or `None` while the row is not full
    #[must_use]
    pub fn letters(&self) -> Option<[char; ROW_LENGTH]> {
        if !self.is_full() {
            return None;
        }
        let mut letters = ['\0'; ROW_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(&self.tiles) {
            *slot = tile.letter?;
        }
        Some(letters)
    }

    /// Typed letters lower-cased and concatenated, as looked up in the word list
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles
            .iter()
            .filter_map(|tile| tile.letter)
            .map(|letter| letter.to_ascii_lowercase())
            .collect()
    }

    /// Row with `letter` written at the cursor, or `None` if the row is full
    #[must_use]
    pub(crate) fn push_letter(&self, letter: char) -> Option<Self> {
        if self.is_full() {
            return None;
        }
        let mut row = self.clone();
        row.tiles[self.cursor] = Tile {
            position: self.cursor,
            letter: Some(letter),
            status: LetterStatus::Used,
        };
        row.cursor += 1;
        Some(row)
    }

    /// Row with the last typed tile cleared, or `None` if nothing is typed
    #[must_use]
    pub(crate) fn pop_letter(&self) -> Option<Self> {
        let last = self.cursor.checked_sub(1)?;
        let mut row = self.clone();
        row.tiles[last] = Tile::empty(last);
        row.cursor = last;
        Some(row)
    }

    /// Row with the scorer's classification applied to each tile
    #[must_use]
    pub(crate) fn scored(&self, score: &RowScore) -> Self {
        let mut row = self.clone();
        for (tile, &status) in row.tiles.iter_mut().zip(score.statuses()) {
            tile.status = status;
        }
        row.solved = score.is_solved();
        row
    }

    /// `(letter, status)` pairs for keyboard aggregation; empty tiles are skipped
    #[must_use]
    pub fn letter_statuses(&self) -> Vec<(char, LetterStatus)> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.letter.map(|letter| (letter, tile.status)))
            .collect()
    }
}
