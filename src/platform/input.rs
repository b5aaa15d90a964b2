//! Keyboard mapping
//!
//! One key serves two purposes: Space flaps during a run and restarts after
//! a crash, the way the arcade cabinet's single button does.

use crate::sim::{GamePhase, InputEvent};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "space" | " " => Key::Space,
            "escape" | "esc" | "q" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Translate a key press for the current phase; unbound keys yield nothing
pub fn map_key(key: Key, phase: GamePhase) -> Option<InputEvent> {
    match (key, phase) {
        (Key::Escape, _) => Some(InputEvent::Quit),
        (Key::Space, GamePhase::GameOver) => Some(InputEvent::Restart),
        (Key::Space, _) => Some(InputEvent::Jump),
        (Key::Other, _) => None,
    }
}
