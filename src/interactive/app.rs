//! TUI application state and logic

use crate::game::{
    Dictionary, Game, GameStatus, PersistencePort, PlayError, SubmitOutcome, win_message,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized, P: PersistencePort> {
    pub game: Game<'a, D, P>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Waiting for s/n before abandoning a game with guesses
    ConfirmRestart,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

const MAX_MESSAGES: usize = 5;

impl<'a, D: Dictionary + ?Sized, P: PersistencePort> App<'a, D, P> {
    #[must_use]
    pub fn new(game: Game<'a, D, P>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            should_quit: false,
        };

        match app.game.state().status() {
            GameStatus::InProgress if app.game.state().attempts() > 0 => {
                app.add_message("Jogo anterior restaurado.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                app.add_message("Descubra a palavra de 6 letras!", MessageStyle::Info);
            }
            GameStatus::Won | GameStatus::Lost => {
                app.input_mode = InputMode::Finished;
                app.announce_finished();
            }
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) if self.input_mode != InputMode::ConfirmRestart => {
                self.should_quit = true;
            }

            (InputMode::ConfirmRestart, KeyCode::Char('s' | 'S' | 'y' | 'Y')) => {
                self.start_new_game();
            }
            (InputMode::ConfirmRestart, _) => {
                self.input_mode = InputMode::Playing;
                self.add_message("Continuando o jogo atual.", MessageStyle::Info);
            }

            (InputMode::Finished, KeyCode::Char('n' | 'N')) => self.start_new_game(),
            (InputMode::Finished, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Finished, _) => {}

            (InputMode::Playing, KeyCode::Char('n')) if ctrl => self.request_new_game(),
            (InputMode::Playing, KeyCode::Char(c)) => self.type_letter(c),
            (InputMode::Playing, KeyCode::Backspace) => self.erase_letter(),
            (InputMode::Playing, KeyCode::Enter) => self.submit(),
            (InputMode::Playing, _) => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn type_letter(&mut self, letter: char) {
        match self.game.type_letter(letter) {
            Ok(()) | Err(PlayError::BufferFull) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn erase_letter(&mut self) {
        match self.game.erase_letter() {
            Ok(_) | Err(PlayError::BufferEmpty) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        match self.game.submit() {
            Ok(outcome) => self.report(&outcome),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn report(&mut self, outcome: &SubmitOutcome) {
        if outcome.status.is_over() {
            self.input_mode = InputMode::Finished;
            self.announce_finished();
        }
    }

    fn announce_finished(&mut self) {
        let state = self.game.state();
        match state.status() {
            GameStatus::Won => {
                let text = win_message(state.attempts());
                self.add_message(&format!("🎉 {text}"), MessageStyle::Success);
            }
            GameStatus::Lost => {
                let text = format!(
                    "A palavra era {}",
                    state.secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            GameStatus::InProgress => return,
        }
        self.add_message("Pressione 'n' para um novo jogo ou 'q' para sair.", MessageStyle::Info);
    }

    fn request_new_game(&mut self) {
        if self.game.state().attempts() > 0 {
            self.input_mode = InputMode::ConfirmRestart;
            self.add_message(
                "Abandonar o jogo atual? O progresso será perdido. (s/n)",
                MessageStyle::Info,
            );
        } else {
            self.start_new_game();
        }
    }

    fn start_new_game(&mut self) {
        self.game.new_game();
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("Novo jogo! Boa sorte.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized, P: PersistencePort>(app: App<'_, D, P>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized, P: PersistencePort>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
