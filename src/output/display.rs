//! Display functions for the line-mode game and CLI commands

use super::formatters::{keyboard_lines, outcome_line, paint, row_line};
use crate::core::{MAX_ATTEMPTS, RowScore, Word};
use crate::game::{GameState, GameStatus};
use colored::Colorize;

/// Print the grid, the keyboard and any transient messages
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    for row in state.rows() {
        println!("  {}", row_line(row));
    }
    println!("{}", "─".repeat(40).cyan());

    for line in keyboard_lines(state.keyboard()) {
        println!("  {line}");
    }

    if state.is_invalid_guess() {
        println!("\n{}", "❌ Not in word list".red().bold());
    }
    if state.is_copied() {
        println!("\n{}", "📋 Copied result to clipboard".green());
    }

    match state.status() {
        GameStatus::Playing => println!(
            "\nAttempt {} of {MAX_ATTEMPTS}",
            (state.attempts_used() + 1).to_string().bright_cyan().bold()
        ),
        GameStatus::Win => println!(
            "\n{}",
            format!(
                "🎉 Solved in {}/{MAX_ATTEMPTS}!",
                state.attempts_used()
            )
            .green()
            .bold()
        ),
        GameStatus::Lose => println!("\n{}", "Out of attempts.".red().bold()),
    }

    if let Some(outcome) = outcome_line(state) {
        println!("{}", outcome.bright_yellow().bold());
    }
}

/// Print the result of scoring a single guess
pub fn print_score(guess: &str, secret: &Word, result: &RowScore) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.to_uppercase().bright_yellow().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let cells: Vec<String> = guess
        .chars()
        .zip(result.statuses())
        .map(|(letter, &status)| {
            paint(&format!(" {} ", letter.to_ascii_uppercase()), status).to_string()
        })
        .collect();
    println!("\n  {}", cells.join(" "));
    println!("  {}", result.to_emoji());

    if result.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print a share transcript
pub fn print_transcript(transcript: &str) {
    println!("\n{transcript}");
}
