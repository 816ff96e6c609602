//! Display functions for command results

use super::formatters::{colored_keyboard, colored_tiles, create_progress_bar};
use crate::commands::CheckResult;
use crate::core::{GuessResult, KeyboardStatus, Word};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking one guess against one target
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_tiles(&result.guess, &result.result));
    println!("  {}\n", result.result.to_emoji());

    for (letter, verdict) in result.guess.text().chars().zip(result.result.verdicts()) {
        println!("  {}  {verdict}", letter.to_ascii_uppercase());
    }

    if result.result.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Write one board row: attempt counter, tiles and emoji summary
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_guess_row<W: Write>(
    out: &mut W,
    attempt: usize,
    max_attempts: usize,
    guess: &Word,
    result: &GuessResult,
) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}  {}",
        format!("{attempt}/{max_attempts}").bright_black(),
        colored_tiles(guess, result),
        result.to_emoji()
    )
}

/// Write the coloured keyboard
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(out: &mut W, status: &KeyboardStatus) -> io::Result<()> {
    writeln!(out)?;
    for row in colored_keyboard(status) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the statistics of this run
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.games_played)?;
    writeln!(out, "   Win rate:     {:.0}%", stats.win_rate())?;
    writeln!(out, "   Streak:       {}", stats.current_streak)?;
    writeln!(out, "   Best streak:  {}", stats.max_streak)?;

    if stats.games_won == 0 {
        return Ok(());
    }

    writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}
