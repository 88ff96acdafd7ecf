//! Formatting utilities for terminal output

use crate::core::{Keyboard, KeyboardKey, LetterStatus, Row, Tile};
use crate::game::{GameState, GameStatus};
use colored::{ColoredString, Colorize};

/// Color a label by letter status
#[must_use]
pub fn paint(label: &str, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => label.black().on_green().bold(),
        LetterStatus::Misplaced => label.black().on_yellow().bold(),
        LetterStatus::Incorrect => label.white().on_bright_black(),
        LetterStatus::Used => label.bright_white().bold(),
        LetterStatus::Unused => label.normal(),
    }
}

/// A single tile as " Q " (or " _ " when empty)
#[must_use]
pub fn tile_cell(tile: &Tile) -> ColoredString {
    let letter = tile.letter.map_or('_', |c| c.to_ascii_uppercase());
    paint(&format!(" {letter} "), tile.status)
}

/// One grid row as a line of tiles
#[must_use]
pub fn row_line(row: &Row) -> String {
    row.tiles()
        .iter()
        .map(|tile| tile_cell(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_cell(key: &KeyboardKey) -> ColoredString {
    paint(&key.letter.to_ascii_uppercase().to_string(), key.status)
}

/// Keyboard rows, staggered like a physical keyboard
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows()
        .enumerate()
        .map(|(i, keys)| {
            let cells: Vec<String> = keys.iter().map(|key| key_cell(key).to_string()).collect();
            format!("{}{}", " ".repeat(i), cells.join(" "))
        })
        .collect()
}

/// Word with its first letter upper-cased
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// "✅ Query" / "⛔️ Query" once the game is over
#[must_use]
pub fn outcome_line(state: &GameState) -> Option<String> {
    let mark = match state.status() {
        GameStatus::Playing => return None,
        GameStatus::Win => "✅",
        GameStatus::Lose => "⛔️",
    };
    Some(format!("{mark} {}", capitalize(state.secret().text())))
}
