//! Wordle - CLI
//!
//! Wordle-style puzzle with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_engine::{
    commands::{run_simple, score_guess},
    core::Word,
    game::Engine,
    logging::{self, LogTarget},
    output::print_score,
    share::SystemClipboard,
    wordlists::{ALLOWED, ANSWERS, WordList, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted guesses: 'all' (default), 'answers' (answer words only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for picking secret words (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file (filter with WORDLE_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type whole guesses at a prompt
    Simple,

    /// Score one guess against a secret word
    Score {
        /// The guess
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`accepted_guesses`, `answers`)
/// - "all": every embedded allowed word is accepted
/// - "answers": only answer words are accepted
/// - "<path>": accepted guesses loaded from file (answers are always accepted too)
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_engine::wordlists::loader::load_from_file;

    let answer_words = words_from_slice(ANSWERS);
    match wordlist_mode {
        "all" => Ok((words_from_slice(ALLOWED), answer_words)),
        "answers" => Ok((answer_words.clone(), answer_words)),
        path => {
            let custom_words = load_from_file(path)?;
            Ok((custom_words, answer_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    let _guard = logging::init(target)?;

    match command {
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Play => {
            let engine = build_engine(&cli.wordlist, cli.seed)?;
            run_play_command(engine)
        }
        Commands::Simple => {
            let mut engine = build_engine(&cli.wordlist, cli.seed)?;
            run_simple(&mut engine)
        }
    }
}

fn build_engine(wordlist_mode: &str, seed: Option<u64>) -> Result<Engine<WordList, SystemClipboard>> {
    let (accepted, answers) = load_wordlists(wordlist_mode)?;
    let engine = Engine::new(
        WordList::with_seed(answers, &accepted, seed)?,
        SystemClipboard::new(),
    );
    info!(
        answers = engine.words().answers().len(),
        accepted = engine.words().accepted_count(),
        "word lists loaded"
    );

    Ok(engine)
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret)?;
    print_score(&result.guess, &result.secret, &result.score);
    Ok(())
}

fn run_play_command(engine: Engine<WordList, SystemClipboard>) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
