//! Terminal output formatting
//!
//! Colored rendering of the grid and keyboard for the line-mode game and CLI commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_score, print_transcript};
