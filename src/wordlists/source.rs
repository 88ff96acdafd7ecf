//! Secret-word selection and guess acceptance
//!
//! The engine only talks to a `WordSource`. `WordList` is the production source: a pool of
//! possible answers, an accepted-guess dictionary and a random number generator.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Dictionary capability consulted by the engine
pub trait WordSource {
    /// Choose the secret word for a new game
    fn pick_secret_word(&mut self) -> Word;

    /// Whether `word` (lower-case) may be submitted as a guess
    fn is_acceptable_guess(&self, word: &str) -> bool;
}

/// Errors building a word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("answer list is empty")]
    EmptyAnswers,
}

/// Word source backed by in-memory lists
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
    rng: StdRng,
}

impl WordList {
    /// Build a word list from answers and accepted guesses
    ///
    /// Answers are always accepted as guesses, whatever `accepted` contains.
    ///
    /// # Errors
    /// Returns `WordListError::EmptyAnswers` if there is nothing to pick a secret from.
    pub fn new(answers: Vec<Word>, accepted: &[Word], rng: StdRng) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::EmptyAnswers);
        }

        let accepted = accepted
            .iter()
            .chain(&answers)
            .map(|word| word.text().to_string())
            .collect();

        Ok(Self {
            answers,
            accepted,
            rng,
        })
    }

    /// Like [`WordList::new`], seeding the generator from `seed` when given and from the OS
    /// otherwise
    ///
    /// # Errors
    /// Returns `WordListError::EmptyAnswers` if there is nothing to pick a secret from.
    pub fn with_seed(
        answers: Vec<Word>,
        accepted: &[Word],
        seed: Option<u64>,
    ) -> Result<Self, WordListError> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(answers, accepted, rng)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of distinct accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

impl WordSource for WordList {
    fn pick_secret_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn is_acceptable_guess(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn list(answers: &[&str], accepted: &[&str], seed: u64) -> WordList {
        WordList::with_seed(
            words_from_slice(answers),
            &words_from_slice(accepted),
            Some(seed),
        )
        .unwrap()
    }

    #[test]
    fn empty_answers_rejected() {
        let result = WordList::with_seed(Vec::new(), &[], Some(1));
        assert!(matches!(result, Err(WordListError::EmptyAnswers)));
    }

    #[test]
    fn answers_are_always_acceptable() {
        let words = list(&["query", "hello"], &["queue"], 7);
        assert!(words.is_acceptable_guess("query"));
        assert!(words.is_acceptable_guess("hello"));
        assert!(words.is_acceptable_guess("queue"));
        assert!(!words.is_acceptable_guess("xxxxx"));
        assert_eq!(words.accepted_count(), 3);
    }

    #[test]
    fn picks_come_from_answers() {
        let mut words = list(&["query", "hello", "river"], &[], 42);
        for _ in 0..20 {
            let secret = words.pick_secret_word();
            assert!(words.answers().contains(&secret));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut first = list(&["query", "hello", "river", "error"], &[], 99);
        let mut second = list(&["query", "hello", "river", "error"], &[], 99);
        for _ in 0..10 {
            assert_eq!(first.pick_secret_word(), second.pick_secret_word());
        }
    }
}
