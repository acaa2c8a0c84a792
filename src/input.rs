use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Starts an idle game or restarts a finished one.
    Confirm,
    /// Asks the host to close the game view.
    Exit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Resolves the pending direction after a directional key press.
///
/// Reversals are judged against `travelled`, the direction of the last
/// committed move, so several presses between two ticks cannot add up to a
/// turn into the neck. Before the first move the pending direction stands in.
/// A rejected press leaves `pending` untouched.
#[must_use]
pub fn resolve_direction(
    travelled: Option<Direction>,
    pending: Direction,
    proposed: Direction,
) -> Direction {
    let reference = travelled.unwrap_or(pending);
    if direction_change_is_valid(reference, proposed) {
        proposed
    } else {
        pending
    }
}

/// Maps a terminal key event to a game input.
///
/// Only presses count; repeats and releases are dropped so holding a key
/// does not flood the router.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Exit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Exit),
        _ => None,
    }
}

/// Waits up to `timeout` for one terminal event and maps it.
///
/// Returns `Ok(None)` on timeout or for events that carry no game input.
/// Keys only arrive as discrete events while raw mode is on, so callers poll
/// from inside a [`crate::terminal_runtime::TerminalSession`].
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}
