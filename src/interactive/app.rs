//! TUI application state and logic

use crate::game::{GameStatus, Outcome, Session, Statistics};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);

/// How often the event loop wakes up to expire messages
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, rng: StdRng) -> Self {
        let stats = Statistics::new(session.config().max_attempts());
        let mut app = Self {
            session,
            rng,
            messages: Vec::new(),
            stats,
            should_quit: false,
        };
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        app
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) => {
                if let Err(err) = self.session.append_letter(c) {
                    log::trace!("Ignored key '{c}': {err}");
                }
            }
            KeyCode::Backspace => {
                self.session.remove_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Outcome::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            Outcome::Continue(_) => {}
            Outcome::Won(_) => {
                self.stats
                    .record(GameStatus::Won, self.session.attempts_used());
                self.add_message(
                    "🎉 Congratulations! You guessed the word!",
                    MessageStyle::Success,
                );
            }
            Outcome::Lost { target, .. } => {
                self.stats
                    .record(GameStatus::Lost, self.session.attempts_used());
                self.add_message(
                    &format!("Game Over! Word was {}", target.text().to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Start another game; an unfinished game counts as lost
    pub fn new_game(&mut self) {
        let abandoned = !self.session.is_over();
        match self.session.new_game_with_rng(&mut self.rng) {
            Ok(()) => {
                if abandoned {
                    self.stats.record(GameStatus::Lost, 0);
                }
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            shown_at: Instant::now(),
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop messages older than [`MESSAGE_TTL`] at `now`
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|msg| now.saturating_duration_since(msg.shown_at) < MESSAGE_TTL);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.expire_messages(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up periodically so expired messages disappear without input
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::GameConfig;
    use rand::SeedableRng;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(dictionary: &Dictionary, max_attempts: usize) -> App<'_> {
        let config = GameConfig::new(5, max_attempts).unwrap();
        let session = Session::with_target(dictionary, config, "crane").unwrap();
        App::new(session, StdRng::seed_from_u64(9))
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "trace", "slate", "stone"], 5)
    }

    #[test]
    fn typing_and_backspace() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.current_guess(), "cr");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.current_guess(), "c");
    }

    #[test]
    fn rejected_guess_shows_message() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);

        type_word(&mut app, "cra");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Enter 5 letters");
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.session.current_guess(), "cra");
    }

    #[test]
    fn win_records_statistics() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);

        type_word(&mut app, "slate");
        type_word(&mut app, "crane");
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn loss_reveals_target() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 1);

        type_word(&mut app, "slate");
        assert_eq!(app.session.status(), GameStatus::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.messages.last().unwrap().text, "Game Over! Word was CRANE");
    }

    #[test]
    fn keys_after_game_over() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.current_guess(), "");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert!(app.session.history().is_empty());

        let target = app.session.reveal_target().text().to_string();
        type_word(&mut app, &target);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn abandoned_game_counts_as_loss() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);

        type_word(&mut app, "crane");
        assert_eq!(app.stats.current_streak, 1);

        app.new_game();
        app.new_game();
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.current_streak, 0);
        assert_eq!(app.stats.max_streak, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&dictionary, 6);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.session.current_guess(), "");
    }

    #[test]
    fn messages_expire() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);
        assert_eq!(app.messages.len(), 1);

        let shown_at = app.messages[0].shown_at;
        app.expire_messages(shown_at + Duration::from_millis(500));
        assert_eq!(app.messages.len(), 1);

        app.expire_messages(shown_at + MESSAGE_TTL);
        assert!(app.messages.is_empty());
    }

    #[test]
    fn message_list_is_bounded() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, 6);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
