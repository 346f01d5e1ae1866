//! Key handling for the animation screen
//!
//! Maps key presses to commands:
//! - `q`, `Esc` or `Ctrl-C` → Quit
//! - `r` → Restart the current cycle
//!
//! Everything else is ignored; the animation runs on its own.

use crate::app::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commands that can be triggered from the keyboard
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Restart,
    Ignore,
}

/// Parse a key event into a Command
pub fn parse_key(key: KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        _ => Command::Ignore,
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Restart => AppEvent::Restart,
        Command::Ignore => AppEvent::None,
    }
}
