//! TUI application state and logic

use super::rendering::ui;
use crate::game::{Action, Engine, GameState, GameStatus};
use crate::output::formatters::outcome_line;
use crate::share::Clipboard;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Application state
pub struct App<W: WordSource, C: Clipboard> {
    pub engine: Engine<W, C>,
    pub state: GameState,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games played this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<W: WordSource, C: Clipboard> App<W, C> {
    #[must_use]
    pub fn new(mut engine: Engine<W, C>) -> Self {
        let state = engine.new_game();

        Self {
            engine,
            state,
            messages: vec![Message {
                text: "Guess the word in six tries. Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Run one action through the engine and report what changed
    pub fn apply(&mut self, action: Action) {
        let before = self.state.status();
        let next = self.engine.dispatch(&self.state, action);

        if action == Action::Submit && next.is_invalid_guess() {
            self.add_message("Not in word list", MessageStyle::Error);
        }
        if next.is_copied() && !self.state.is_copied() {
            self.add_message("Copied result to clipboard", MessageStyle::Success);
        }

        self.state = next;

        if !before.is_terminal() && self.state.status().is_terminal() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.state.status() == GameStatus::Win {
            self.stats.games_won += 1;
            self.stats.guess_distribution[self.state.attempts_used()] += 1;
        }

        if let Some(outcome) = outcome_line(&self.state) {
            let style = if self.state.status() == GameStatus::Win {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&outcome, style);
        }
        self.add_message(
            "Press 's' to share, 'n' for a new game or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        self.apply(Action::Retry);
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Map a key press to an action
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            _ if self.state.status().is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') => self.apply(Action::Share),
                KeyCode::Char('n' | 'r') => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => self.apply(Action::KeyPressed(c)),
            KeyCode::Backspace => self.apply(Action::Delete),
            KeyCode::Enter => self.apply(Action::Submit),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, C: Clipboard>(app: App<W, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, C>(terminal: &mut Terminal<B>, mut app: App<W, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    C: Clipboard,
{
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::share::MemoryClipboard;

    struct Fixed(Word);

    impl WordSource for Fixed {
        fn pick_secret_word(&mut self) -> Word {
            self.0.clone()
        }

        fn is_acceptable_guess(&self, word: &str) -> bool {
            ["query", "queue", "hello"].contains(&word)
        }
    }

    fn app() -> App<Fixed, MemoryClipboard> {
        App::new(Engine::new(
            Fixed(Word::new("query").unwrap()),
            MemoryClipboard::new(),
        ))
    }

    fn press(app: &mut App<Fixed, MemoryClipboard>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<Fixed, MemoryClipboard>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_active_row() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.state.active_row().unwrap().cursor(), 1);
    }

    #[test]
    fn unknown_word_reports_message() {
        let mut app = app();
        type_word(&mut app, "zzzzz");

        assert!(app.state.is_invalid_guess());
        assert_eq!(app.messages.last().unwrap().text, "Not in word list");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn every_rejected_submit_reports_message() {
        let mut app = app();
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        let rejected = app
            .messages
            .iter()
            .filter(|m| m.text == "Not in word list")
            .count();
        assert_eq!(rejected, 2);

        // editing the row does not repeat it
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.messages.len(), 3);
    }

    #[test]
    fn win_then_share_and_restart() {
        let mut app = app();
        type_word(&mut app, "queue");
        type_word(&mut app, "query");

        assert_eq!(app.state.status(), GameStatus::Win);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.messages.iter().any(|m| m.text == "✅ Query"));

        press(&mut app, KeyCode::Char('s'));
        assert!(app.state.is_copied());
        assert_eq!(
            app.engine.clipboard().last(),
            Some("Win: 2/6\n\n🟩🟩🟩⬜⬜\n🟩🟩🟩🟩🟩")
        );

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.status(), GameStatus::Playing);
        assert_eq!(app.state.active_row_index(), 0);
    }

    #[test]
    fn lose_after_six_rows() {
        let mut app = app();
        for _ in 0..6 {
            type_word(&mut app, "hello");
        }

        assert_eq!(app.state.status(), GameStatus::Lose);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text == "⛔️ Query"));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while playing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.state.rows()[0].cursor(), 0);
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let mut app = app();
        type_word(&mut app, "queue");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.state.active_row_index(), 0);
        assert_eq!(app.state.rows()[0].cursor(), 0);
    }
}
