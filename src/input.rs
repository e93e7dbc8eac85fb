//! Keyboard bindings.

use macroquad::input::{KeyCode, is_key_pressed};

use crate::engine::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Steer(Direction),
    TogglePause,
    Start,
    Restart,
    /// Handled by the host; the engine ignores it.
    Quit,
}

pub const KEY_BINDINGS: &[(KeyCode, InputEvent)] = &[
    (KeyCode::Up, InputEvent::Steer(Direction::Up)),
    (KeyCode::W, InputEvent::Steer(Direction::Up)),
    (KeyCode::Down, InputEvent::Steer(Direction::Down)),
    (KeyCode::S, InputEvent::Steer(Direction::Down)),
    (KeyCode::Left, InputEvent::Steer(Direction::Left)),
    (KeyCode::A, InputEvent::Steer(Direction::Left)),
    (KeyCode::Right, InputEvent::Steer(Direction::Right)),
    (KeyCode::D, InputEvent::Steer(Direction::Right)),
    (KeyCode::Space, InputEvent::TogglePause),
    (KeyCode::Enter, InputEvent::Start),
    (KeyCode::R, InputEvent::Restart),
    (KeyCode::Escape, InputEvent::Quit),
    (KeyCode::Q, InputEvent::Quit),
];

pub fn key_event(key: KeyCode) -> Option<InputEvent> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, event)| *event)
}

/// Events for every bound key pressed this frame, in binding order.
pub fn poll_keyboard() -> Vec<InputEvent> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, event)| *event)
        .collect()
}
