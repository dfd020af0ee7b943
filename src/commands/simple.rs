//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word and press Enter.

use crate::core::WORD_LENGTH;
use crate::game::{Dictionary, Game, GameStatus, PersistencePort, PlayError, SubmitOutcome};
use crate::output::{print_board, print_statistics, share_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Stats,
    Share,
    Help,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            ":q" | ":quit" | ":sair" => Self::Quit,
            ":n" | ":new" | ":novo" => Self::NewGame,
            ":s" | ":stats" => Self::Stats,
            ":share" | ":compartilhar" => Self::Share,
            ":h" | ":help" | ":ajuda" => Self::Help,
            word => Self::Guess(word.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary + ?Sized, P: PersistencePort>(
    game: &mut Game<'_, D, P>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Termo Clone - Modo Simples                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(game.state());

        let prompt = if game.state().status().is_over() {
            "Comando (:novo, :stats, :share, :sair)"
        } else {
            "Palpite"
        };
        print!("{prompt}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!("\n👋 Até a próxima!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Até a próxima!\n");
                return Ok(());
            }
            Command::NewGame => {
                if confirm_restart(game, &mut lines)? {
                    game.new_game();
                    println!("\n🔄 Novo jogo!\n");
                }
            }
            Command::Stats => print_statistics(game.stats()),
            Command::Share => println!("\n{}\n", share_text(game.state())),
            Command::Help => print_help(),
            Command::Guess(word) => {
                if game.state().status().is_over() {
                    println!("{}", "O jogo terminou. Use :novo para jogar de novo.".yellow());
                    continue;
                }
                match submit_word(game, &word) {
                    Ok(outcome) => report_outcome(game, &outcome),
                    Err(e) => println!("{}", format!("❌ {e}").red()),
                }
            }
        }
    }
}

/// Replace the buffer with `word` and submit it
///
/// A rejected word leaves the buffer empty.
fn submit_word<D: Dictionary + ?Sized, P: PersistencePort>(
    game: &mut Game<'_, D, P>,
    word: &str,
) -> Result<SubmitOutcome, PlayError> {
    clear_buffer(game);
    let result = word
        .chars()
        .try_for_each(|letter| game.type_letter(letter))
        .and_then(|()| game.submit());
    if result.is_err() {
        clear_buffer(game);
    }
    result
}

fn clear_buffer<D: Dictionary + ?Sized, P: PersistencePort>(game: &mut Game<'_, D, P>) {
    while game.erase_letter().is_ok() {}
}

fn report_outcome<D: Dictionary + ?Sized, P: PersistencePort>(
    game: &Game<'_, D, P>,
    outcome: &SubmitOutcome,
) {
    match outcome.status {
        GameStatus::Won => {
            print_board(game.state());
            println!("{}", "═".repeat(50).bright_cyan());
            println!(
                "  {}",
                outcome.win_message().unwrap_or_default().bright_green().bold()
            );
            println!(
                "  Acertou em {} {}",
                outcome.attempt.to_string().bright_cyan().bold(),
                if outcome.attempt == 1 { "tentativa" } else { "tentativas" }
            );
            println!("{}", "═".repeat(50).bright_cyan());
            print_statistics(game.stats());
        }
        GameStatus::Lost => {
            print_board(game.state());
            println!(
                "  A palavra era {}",
                game.state().secret().text().to_uppercase().bright_yellow().bold()
            );
            print_statistics(game.stats());
        }
        GameStatus::InProgress => {
            println!(
                "  {} tentativas restantes",
                game.state().remaining_attempts()
            );
        }
    }
}

/// Ask before abandoning a game that already has guesses
fn confirm_restart<D: Dictionary + ?Sized, P: PersistencePort>(
    game: &Game<'_, D, P>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    let state = game.state();
    if state.status() != GameStatus::InProgress || state.attempts() == 0 {
        return Ok(true);
    }

    print!("Você quer mesmo começar um novo jogo? O progresso atual será perdido. (s/n): ");
    io::stdout().flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes"))
}

fn print_help() {
    println!("Descubra a palavra de {WORD_LENGTH} letras em até 6 tentativas.\n");
    println!("  - {} letra na posição certa", " A ".black().on_green());
    println!("  - {} letra na palavra, em outra posição", " A ".black().on_yellow());
    println!("  - {} letra não está na palavra\n", " A ".white().on_bright_black());
    println!("Comandos: :novo, :stats, :share, :ajuda, :sair\n");
}
