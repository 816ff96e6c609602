//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or on plain stdin/stdout, or check a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{check_guess, run_simple},
    dictionary::{Dictionary, loader::load_from_file},
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, Session},
    interactive::{App, run_tui},
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word, one row at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for target selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play the first game against this wordlist word instead of a random one
    #[arg(long, global = true)]
    target: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Evaluate one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word to score against
        answer: String,
    },
}

fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<()> {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialise logging")
}

/// Load the dictionary selected by the -w flag
///
/// - "embedded": built-in word list
/// - "<path>": newline-delimited file
fn load_dictionary(wordlist_mode: &str, word_length: usize) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "embedded" => Dictionary::embedded(word_length),
        path => load_from_file(path, word_length)
            .with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    if dictionary.is_empty() {
        log::warn!("Wordlist '{wordlist_mode}' has no {word_length}-letter words");
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
            let (session, rng) = start_session(&cli, &dictionary)?;
            run_tui(App::new(session, rng))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
            let (session, rng) = start_session(&cli, &dictionary)?;
            run_simple_command(session, rng)
        }
        Commands::Check { guess, answer } => {
            let result = check_guess(&guess, &answer).context("Cannot check guess")?;
            print_check_result(&result);
            Ok(())
        }
    }
}

/// Create the first game from the CLI settings
///
/// The returned rng is seeded from `--seed` when given and is reused for
/// every later game so a seeded run stays reproducible.
fn start_session<'a>(cli: &Cli, dictionary: &'a Dictionary) -> Result<(Session<'a>, StdRng)> {
    let config = GameConfig::new(cli.length, cli.attempts).context("Invalid game settings")?;

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let session = match cli.target.as_deref() {
        Some(target) => Session::with_target(dictionary, config, target),
        None => Session::with_rng(dictionary, config, &mut rng),
    }
    .context("Cannot start game")?;

    Ok((session, rng))
}

fn run_simple_command(mut session: Session, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run_simple(&mut session, &mut rng, stdin.lock(), stdout.lock())?;
    log::debug!(
        "Line mode finished: {} played, {} won",
        stats.games_played,
        stats.games_won
    );
    Ok(())
}
