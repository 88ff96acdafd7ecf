//! Wordle Engine
//!
//! A Wordle-style puzzle: guess a five-letter word in six tries, with per-letter feedback
//! and a keyboard that remembers the best feedback seen for each letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{LetterStatus, Word, score};
//!
//! let secret = Word::new("query").unwrap();
//! let result = score(&['Q', 'U', 'E', 'U', 'E'], &secret);
//!
//! assert_eq!(result.statuses()[0], LetterStatus::Correct);
//! assert_eq!(result.to_emoji(), "🟩🟩🟩⬜⬜");
//! ```

// Core domain types and the scoring rules
pub mod core;

// Game state machine
pub mod game;

// Emoji transcript and clipboard adapters
pub mod share;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
