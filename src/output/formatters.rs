//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardStatus, LetterVerdict, Word};
use colored::{ColoredString, Colorize};

/// QWERTY layout used by both the line mode and the TUI
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Colour one uppercase letter by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render an evaluated guess as a row of coloured tiles
#[must_use]
pub fn colored_tiles(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.verdicts())
        .map(|(&letter, &verdict)| colored_tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Render the keyboard, one string per row, letters coloured by best verdict
#[must_use]
pub fn colored_keyboard(status: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|letter| colored_tile(letter, status.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
