//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, letter_tile};
use crate::commands::{ScoreResult, SimulationResult};
use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, MAX_ATTEMPTS, SessionState, Statistics};
use colored::Colorize;

/// Print the guess grid, with an empty row for each remaining attempt
pub fn print_board(state: &SessionState) {
    println!();
    for record in state.history() {
        println!("   {}", colored_guess(record.word(), record.classification()));
    }

    let mut empty_rows = state.remaining_attempts();
    if state.status() == GameStatus::InProgress && empty_rows > 0 {
        let typed: String = state
            .buffer()
            .bytes()
            .map(|b| letter_tile(b, None).to_string())
            .chain((state.buffer().len()..WORD_LENGTH).map(|_| " _ ".bright_black().to_string()))
            .collect();
        println!("   {typed}");
        empty_rows -= 1;
    }

    for _ in 0..empty_rows {
        println!("   {}", " · ".repeat(WORD_LENGTH).bright_black());
    }
    println!();
}

/// Print the classification of a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n   {}", colored_guess(&result.guess, &result.classification));
    println!("   {}\n", result.classification.to_emoji());
    println!(
        "   Correct: {}  Present: {}",
        result.classification.count_correct().to_string().green(),
        result.classification.count_present().to_string().yellow()
    );
}

/// Print the statistics panel
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "ESTATÍSTICAS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Jogos:            {}", stats.games_played);
    println!(
        "   Vitórias:         {}",
        format!("{}%", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Sequência atual:  {}", stats.current_streak);
    println!("   Melhor sequência: {}", stats.longest_streak);

    print_distribution(stats);
}

fn print_distribution(stats: &Statistics) {
    println!("\n📈 {}", "Distribuição:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket());
    for attempt in 1..=MAX_ATTEMPTS {
        let count = stats.wins_on(attempt);
        let bar = create_progress_bar(f64::from(count), max, 30);
        println!("   {attempt}: {} {count:4}", bar.green());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &result.stats;
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Win rate:         {}",
        format!("{}%", stats.win_percentage()).bright_yellow().bold()
    );
    if let Some(avg) = result.average_attempts {
        println!("   Average attempts: {avg:.2} (wins only)");
    }
    println!("   Longest streak:   {}", stats.longest_streak);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    print_distribution(stats);
}
