//! Input dispatching.
//!
//! A dedicated thread blocks on the next terminal event and translates
//! recognized keys into [`Command`]s for the owner loop. It never
//! touches session state itself.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use super::app::Command;

/// Spawn the input dispatcher thread.
///
/// The thread runs for the life of the session: it exits after sending
/// [`Command::Quit`] or when the command channel closes. It is left
/// blocked in the key read at process exit rather than joined.
pub fn spawn_input(tx: Sender<Command>) -> JoinHandle<()> {
    thread::spawn(move || input_loop(tx))
}

fn input_loop(tx: Sender<Command>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                // Transient read failure: log it and keep listening.
                warn!("key read failed: {e}");
                continue;
            }
        };
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        info!(code = ?key.code, modifiers = ?key.modifiers, "key event");

        let Some(cmd) = map_key(key) else {
            continue;
        };
        let quit = cmd == Command::Quit;
        if tx.send(cmd).is_err() || quit {
            break;
        }
    }
}

/// Translate a key press into a command. Recognized characters are
/// case-insensitive; anything else is ignored.
pub(crate) fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'n' => Some(Command::NextPage),
            'b' => Some(Command::PrevPage),
            's' => Some(Command::ToggleSorted),
            'a' => Some(Command::StartAnimation),
            'p' => Some(Command::NextAlgorithm),
            _ => None,
        },
        _ => None,
    }
}
