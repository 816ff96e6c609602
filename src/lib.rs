//! Wordle Game
//!
//! Guess evaluation, keyboard tracking and a turn-based game session, with a
//! ratatui front end and a line-based mode built on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameConfig, Outcome, Session};
//!
//! // Score a single guess
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//! assert_eq!(evaluate(&guess, &target).unwrap().to_string(), "-GGYG");
//!
//! // Play a game against a fixed target
//! let dictionary = Dictionary::from_words(["crane", "trace"], 5);
//! let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();
//! for letter in "crane".chars() {
//!     session.append_letter(letter).unwrap();
//! }
//! assert!(matches!(session.submit_guess(), Outcome::Won(_)));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
