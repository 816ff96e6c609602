//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MESSAGE_TTL, Message, MessageStyle, run_tui};
