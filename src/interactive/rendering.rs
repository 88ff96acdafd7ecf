//! TUI rendering with ratatui
//!
//! Grid, keyboard and messages for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardKey, LetterStatus, MAX_ATTEMPTS, Row, Tile};
use crate::game::GameStatus;
use crate::share::Clipboard;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Background color for a letter status
#[must_use]
pub const fn status_color(status: LetterStatus) -> Option<Color> {
    match status {
        LetterStatus::Correct => Some(Color::Green),
        LetterStatus::Misplaced => Some(Color::Yellow),
        LetterStatus::Incorrect => Some(Color::DarkGray),
        LetterStatus::Used | LetterStatus::Unused => None,
    }
}

fn status_style(status: LetterStatus) -> Style {
    match status_color(status) {
        Some(bg) => Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        None if status == LetterStatus::Used => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_span(tile: &Tile) -> Span<'static> {
    let letter = tile.letter.map_or('·', |c| c.to_ascii_uppercase());
    Span::styled(format!(" {letter} "), status_style(tile.status))
}

fn row_line(row: &Row, active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.tiles().len() * 2 + 1);
    spans.push(Span::raw(if active { "▶ " } else { "  " }));
    for tile in row.tiles() {
        spans.push(tile_span(tile));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_grid<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>, area: Rect) {
    let state = &app.state;
    let playing = state.status() == GameStatus::Playing;

    let mut lines: Vec<Line> = state
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            let active = playing && i == state.active_row_index();
            [row_line(row, active), Line::from("")]
        })
        .collect();
    lines.pop();

    let border = if state.is_invalid_guess() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );

    f.render_widget(grid, area);
}

fn render_side_panel<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn key_span(key: &KeyboardKey) -> Span<'static> {
    Span::styled(
        format!(" {} ", key.letter.to_ascii_uppercase()),
        status_style(key.status),
    )
}

fn render_keyboard<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>, area: Rect) {
    let lines: Vec<Line> = app
        .state
        .keyboard()
        .rows()
        .enumerate()
        .flat_map(|(i, keys)| {
            let mut spans = vec![Span::raw(" ".repeat(i * 2))];
            for key in &keys {
                spans.push(key_span(key));
                spans.push(Span::raw(" "));
            }
            [Line::from(spans), Line::from("")]
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<W: WordSource, C: Clipboard>(f: &mut Frame, app: &App<W, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let status_text = match app.state.status() {
        GameStatus::Playing => format!("Attempt {}/{MAX_ATTEMPTS}", app.state.attempts_used() + 1),
        GameStatus::Win => format!("Won in {}/{MAX_ATTEMPTS}", app.state.attempts_used()),
        GameStatus::Lose => "Lost".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let stats = &app.stats;
    let stats_text = format!("Games: {} | Won: {}", stats.total_games, stats.games_won);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.state.status().is_terminal() {
        "s: Share | n: New Game | q: Quit"
    } else {
        "Enter: Submit | Bksp: Delete | Ctrl-N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Action, Engine};
    use crate::share::MemoryClipboard;
    use ratatui::{Terminal, backend::TestBackend};

    struct Fixed;

    impl WordSource for Fixed {
        fn pick_secret_word(&mut self) -> Word {
            Word::new("query").unwrap()
        }

        fn is_acceptable_guess(&self, _word: &str) -> bool {
            true
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color(LetterStatus::Correct), Some(Color::Green));
        assert_eq!(status_color(LetterStatus::Misplaced), Some(Color::Yellow));
        assert_eq!(status_color(LetterStatus::Incorrect), Some(Color::DarkGray));
        assert_eq!(status_color(LetterStatus::Used), None);
        assert_eq!(status_color(LetterStatus::Unused), None);
    }

    #[test]
    fn draws_typed_letters_and_help() {
        let mut app = App::new(Engine::new(Fixed, MemoryClipboard::new()));
        for c in "quy".chars() {
            app.apply(Action::KeyPressed(c));
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains(" Q   U   Y   · "));
        assert!(text.contains("Attempt 1/6"));
        assert!(text.contains("Esc: Quit"));
    }
}
