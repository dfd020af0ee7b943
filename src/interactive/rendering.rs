//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterClass, WORD_LENGTH};
use crate::game::{Dictionary, GameStatus, KeyboardHints, MAX_ATTEMPTS, PersistencePort};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<D: Dictionary + ?Sized, P: PersistencePort>(f: &mut Frame, app: &App<'_, D, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board and side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TERMO CLONE 🟨")
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

/// Background and foreground for a classified tile
const fn class_colors(class: Option<LetterClass>) -> (Color, Color) {
    match class {
        Some(LetterClass::Correct) => (Color::Green, Color::Black),
        Some(LetterClass::Present) => (Color::Yellow, Color::Black),
        Some(LetterClass::Absent) => (Color::DarkGray, Color::White),
        None => (Color::Reset, Color::White),
    }
}

fn tile(letter: char, class: Option<LetterClass>) -> Span<'static> {
    let (bg, fg) = class_colors(class);
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    )
}

/// One line per attempt: submitted guesses, then the typed buffer, then blanks
fn board_lines<D: Dictionary + ?Sized, P: PersistencePort>(
    app: &App<'_, D, P>,
) -> Vec<Line<'static>> {
    let state = app.game.state();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for record in state.history() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, &b) in record.word().chars().iter().enumerate() {
            spans.push(tile(char::from(b), Some(record.classification().at(i))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if state.status() == GameStatus::InProgress {
        let typed: Vec<char> = state.buffer().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let span = typed.get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&c| tile(c, None),
                );
                [span, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans).style(Style::default().add_modifier(Modifier::UNDERLINED)));
        lines.push(Line::from(""));
    }

    while lines.len() < MAX_ATTEMPTS * 2 {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
    let state = app.game.state();
    let title = format!(
        " Tentativa {}/{MAX_ATTEMPTS} ",
        (state.attempts() + 1).min(MAX_ATTEMPTS)
    );

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Statistics
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn render_statistics<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
    let stats = app.game.stats();
    let block = Block::default()
        .title(" Estatísticas ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let summary = Paragraph::new(vec![
        Line::from(format!(
            "Jogos: {}  Vitórias: {}%",
            stats.games_played,
            stats.win_percentage()
        )),
        Line::from(format!(
            "Sequência: {}  Melhor: {}",
            stats.current_streak, stats.longest_streak
        )),
    ]);
    f.render_widget(summary, rows[0]);

    let max = stats.max_bucket().max(1);
    let last_win = (app.game.state().status() == GameStatus::Won)
        .then(|| app.game.state().attempts());

    let bar_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); MAX_ATTEMPTS])
        .split(rows[1]);

    for (i, row) in bar_rows.iter().enumerate() {
        let attempt = i + 1;
        let wins = stats.wins_on(attempt);
        let color = if last_win == Some(attempt) {
            Color::Green
        } else {
            Color::DarkGray
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent((u64::from(wins) * 100 / u64::from(max)) as u16)
            .label(format!("{attempt}: {wins}"));
        f.render_widget(gauge, *row);
    }
}

fn render_messages<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
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
        List::new(messages).block(Block::default().title(" Mensagens ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn keyboard_lines(hints: &KeyboardHints) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| [tile(c, hints.get(c)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
    let hints = app.game.session().keyboard_hints();
    let keyboard = Paragraph::new(keyboard_lines(&hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double));
    f.render_widget(keyboard, area);
}

fn render_status<D: Dictionary + ?Sized, P: PersistencePort>(
    f: &mut Frame,
    app: &App<'_, D, P>,
    area: Rect,
) {
    let (help_text, color) = match app.input_mode {
        InputMode::Playing => (
            "Enter: Enviar | Backspace: Apagar | Ctrl-N: Novo jogo | Esc: Sair",
            Color::DarkGray,
        ),
        InputMode::ConfirmRestart => ("s: Abandonar o jogo | qualquer tecla: Continuar", Color::Yellow),
        InputMode::Finished => ("n: Novo jogo | q: Sair", Color::Green),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
