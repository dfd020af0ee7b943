//! Termo Clone - CLI
//!
//! Six-letter word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use termo::{
    commands::{SimulationConfig, run_simple, run_simulation, score_guess},
    config::{Settings, load_settings},
    game::{Game, JsonFileStore, PersistencePort, WordList},
    output::{print_board, print_score_result, print_simulation_result, print_statistics, share_text},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Termo clone: guess the six-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: ./termo.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the saved game, statistics and log
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word list file, one six-letter word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Classify a guess against a secret word
    Score {
        /// The secret word
        secret: String,
        /// The guessed word
        guess: String,
    },

    /// Show saved statistics
    Stats,

    /// Print the share text of the current game
    Share,

    /// Play many games with an automatic player
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    /// Whether the command reads or writes the data directory
    ///
    /// Only these get a log file.
    const fn uses_data_dir(&self) -> bool {
        matches!(self, Self::Play | Self::Simple | Self::Stats | Self::Share)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(path) = cli.wordlist {
        settings.wordlist = Some(path);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if command.uses_data_dir() {
        init_logging(&settings)?;
    }

    match command {
        Commands::Play => run_play_command(&load_words(&settings)?, &settings),
        Commands::Simple => {
            let words = load_words(&settings)?;
            let mut game = Game::load(&words, open_store(&settings)?);
            run_simple(&mut game)
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let store = open_store(&settings)?;
            let stats = store.load_statistics().unwrap_or_else(|e| {
                warn!(error = %e, "Discarding unreadable statistics");
                None
            });
            let stats = stats.unwrap_or_default();
            print_statistics(&stats);
            Ok(())
        }
        Commands::Share => {
            let words = load_words(&settings)?;
            let game = Game::load(&words, open_store(&settings)?);
            print_board(game.state());
            println!("{}", share_text(game.state()));
            Ok(())
        }
        Commands::Simulate { count, seed } => {
            run_simulate_command(&load_words(&settings)?, count, seed);
            Ok(())
        }
    }
}

/// Send `tracing` output to the log file in the data directory
///
/// The TUI owns the terminal, so nothing is written to stderr.
fn init_logging(settings: &Settings) -> Result<()> {
    fs::create_dir_all(&settings.data_dir).with_context(|| {
        format!("failed to create data directory '{}'", settings.data_dir.display())
    })?;
    let log_path = settings.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load the configured word list, or the embedded one
fn load_words(settings: &Settings) -> Result<WordList> {
    let words = match &settings.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list '{}'", path.display()))?,
        None => words_from_slice(WORDS),
    };
    let list = WordList::new(words).context("word list has no usable six-letter words")?;
    info!(words = list.len(), "Loaded word list");
    Ok(list)
}

fn open_store(settings: &Settings) -> Result<JsonFileStore> {
    JsonFileStore::open(&settings.data_dir).with_context(|| {
        format!("failed to open data directory '{}'", settings.data_dir.display())
    })
}

fn run_play_command(words: &WordList, settings: &Settings) -> Result<()> {
    use termo::interactive::{App, run_tui};

    let game = Game::load(words, open_store(settings)?);
    run_tui(App::new(game))
}

fn run_simulate_command(words: &WordList, count: usize, seed: Option<u64>) {
    println!("Simulating {count} games over {} words...", words.len());

    let config = SimulationConfig {
        seed,
        ..SimulationConfig::new(count)
    };
    let result = run_simulation(words, &config);
    print_simulation_result(&result);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        let cli = Cli::try_parse_from(std::iter::once("termo").chain(args.iter().copied())).unwrap();
        cli.command.unwrap_or(Commands::Play)
    }

    #[test]
    fn offline_commands_skip_the_data_dir() {
        assert!(!command(&["score", "garden", "planet"]).uses_data_dir());
        assert!(!command(&["simulate", "-n", "5"]).uses_data_dir());
    }

    #[test]
    fn game_commands_use_the_data_dir() {
        assert!(command(&[]).uses_data_dir());
        assert!(command(&["simple"]).uses_data_dir());
        assert!(command(&["stats"]).uses_data_dir());
        assert!(command(&["share", "--data-dir", "/tmp/x"]).uses_data_dir());
    }
}
