//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess or a `:command`.

use crate::core::ROW_LENGTH;
use crate::game::{Action, Engine, GameState};
use crate::output::formatters::capitalize;
use crate::output::{print_board, print_transcript};
use crate::share::{self, Clipboard};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Letters to type into the active row and submit
    Guess(String),
    /// Copy the transcript of a finished game
    Share,
    /// Abandon the current game and start another
    New,
    /// Leave line mode
    Quit,
    /// Blank line
    Empty,
}

impl LineCommand {
    /// Parse a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" => Self::Empty,
            ":share" | ":s" => Self::Share,
            ":new" | ":n" => Self::New,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Actions that replace the active row's letters with `guess` and submit it
#[must_use]
pub fn guess_actions(state: &GameState, guess: &str) -> Vec<Action> {
    let typed = state.active_row().map_or(0, crate::core::Row::cursor);

    std::iter::repeat_n(Action::Delete, typed)
        .chain(guess.chars().map(Action::KeyPressed))
        .chain(std::iter::once(Action::Submit))
        .collect()
}

/// Why a typed line cannot be played as a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessLineError {
    #[error("guesses are {expected} letters long, got {0}", expected = ROW_LENGTH)]
    Length(usize),
    #[error("{0:?} is not a letter")]
    NotALetter(char),
}

/// Check that a line is exactly one row of ASCII letters
///
/// # Errors
///
/// Returns the first problem found: wrong length, then the first non-letter.
pub fn check_guess(guess: &str) -> Result<(), GuessLineError> {
    let length = guess.chars().count();
    if length != ROW_LENGTH {
        return Err(GuessLineError::Length(length));
    }
    match guess.chars().find(|c| !c.is_ascii_alphabetic()) {
        Some(c) => Err(GuessLineError::NotALetter(c)),
        None => Ok(()),
    }
}

/// Feed a whole guess through the reducer
///
/// # Errors
///
/// Returns an error without dispatching anything if the line fails [`check_guess`].
pub fn play_guess<W: WordSource, C: Clipboard>(
    engine: &mut Engine<W, C>,
    state: &GameState,
    guess: &str,
) -> Result<GameState, GuessLineError> {
    check_guess(guess)?;

    Ok(guess_actions(state, guess)
        .into_iter()
        .fold(state.clone(), |current, action| {
            engine.dispatch(&current, action)
        }))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource, C: Clipboard>(engine: &mut Engine<W, C>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {ROW_LENGTH}-letter word. Type a guess and press Enter.\n");
    println!("  - 🟩 right letter, right spot");
    println!("  - 🟨 in the word, wrong spot");
    println!("  - ⬜ not in the word\n");
    println!("Commands: ':share' after a game, ':new' for a new game, ':quit' to exit\n");

    let mut state = engine.new_game();
    print_board(&state);

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match LineCommand::parse(&input) {
            LineCommand::Empty => continue,
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::New => {
                state = engine.dispatch(&state, Action::Retry);
                println!("\n🔄 New game started!");
            }
            LineCommand::Share => {
                if !state.status().is_terminal() {
                    println!("Finish the game before sharing.");
                    continue;
                }
                state = engine.dispatch(&state, Action::Share);
                print_transcript(&share::format(&state));
            }
            LineCommand::Guess(guess) => {
                if state.status().is_terminal() {
                    println!("Game over. Type ':new' to play again or ':share' to share.");
                    continue;
                }
                match play_guess(engine, &state, &guess) {
                    Ok(next) => state = next,
                    Err(err) => {
                        debug!(%err, "guess rejected before dispatch");
                        println!("❌ {}", capitalize(&err.to_string()));
                        continue;
                    }
                }
            }
        }

        print_board(&state);
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
