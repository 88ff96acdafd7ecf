//! Word lists for the game
//!
//! Embedded answer and accepted-guess lists compiled into the binary, a file loader for
//! custom lists, and the `WordSource` seam the engine draws secrets and checks guesses from.

pub mod loader;
mod source;

pub use source::{WordList, WordListError, WordSource};

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
