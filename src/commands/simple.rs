//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::game::{GameStatus, LetterRejected, Outcome, RejectReason, Session, Statistics};
use crate::output::{write_guess_row, write_keyboard, write_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Each line is fed to the session letter by letter and then submitted.
/// `new` starts another game with a target drawn from `rng`; `quit` exits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// game cannot be started.
pub fn run_simple<R, W, G>(
    session: &mut Session,
    rng: &mut G,
    mut input: R,
    mut out: W,
) -> io::Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let config = *session.config();
    let mut stats = Statistics::new(config.max_attempts());

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle - Interactive Mode         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length(),
        config.max_attempts()
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut line = String::new();
    loop {
        if !session.is_over() {
            write!(
                out,
                "Guess {}/{}: ",
                session.attempts_used() + 1,
                config.max_attempts()
            )?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                let abandoned = !session.is_over();
                session.new_game_with_rng(rng).map_err(io::Error::other)?;
                // An unfinished game counts as lost
                if abandoned {
                    stats.record(GameStatus::Lost, 0);
                }
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        if session.is_over() {
            writeln!(out, "{}", RejectReason::GameAlreadyOver.to_string().red())?;
            continue;
        }

        if let Err(err) = type_guess(session, &entry) {
            let message = match err {
                LetterRejected::RowFull => RejectReason::WrongLength {
                    expected: config.word_length(),
                }
                .to_string(),
                other => other.to_string(),
            };
            writeln!(out, "{}", message.red())?;
            continue;
        }

        let outcome = session.submit_guess();
        if let Outcome::Rejected(reason) = outcome {
            clear_guess(session);
            writeln!(out, "{}", reason.to_string().red())?;
            continue;
        }

        if let Some(record) = session.history().last() {
            write_guess_row(
                &mut out,
                session.attempts_used(),
                config.max_attempts(),
                &record.guess,
                &record.result,
            )?;
        }

        match outcome {
            Outcome::Continue(_) | Outcome::Rejected(_) => {
                write_keyboard(&mut out, &session.keyboard_status())?;
            }
            Outcome::Won(_) => {
                stats.record(session.status(), session.attempts_used());
                writeln!(
                    out,
                    "\n{}",
                    "🎉 Congratulations! You guessed the word!".bright_green().bold()
                )?;
                write_statistics(&mut out, &stats)?;
                writeln!(out, "\nType 'new' to play again or 'quit' to exit.")?;
            }
            Outcome::Lost { target, .. } => {
                stats.record(session.status(), session.attempts_used());
                writeln!(
                    out,
                    "\n{}",
                    format!("Game Over! Word was {}", target.text().to_uppercase())
                        .red()
                        .bold()
                )?;
                write_statistics(&mut out, &stats)?;
                writeln!(out, "\nType 'new' to play again or 'quit' to exit.")?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Replace the current guess with `entry`, letter by letter
///
/// On error the current guess is left empty.
fn type_guess(session: &mut Session, entry: &str) -> Result<(), LetterRejected> {
    clear_guess(session);
    for letter in entry.chars() {
        if let Err(err) = session.append_letter(letter) {
            clear_guess(session);
            return Err(err);
        }
    }
    Ok(())
}

fn clear_guess(session: &mut Session) {
    while session.remove_letter().is_some() {}
}
