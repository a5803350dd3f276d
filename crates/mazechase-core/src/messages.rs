//! Input events: [`Msg`] and [`Key`].

use std::time::Instant;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    /// A printable character.
    Char(char),
}

/// A message delivered to the application model.
#[derive(Clone, Debug)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key, time: Instant },
    /// The terminal was resized.
    Screen { rows: i32, cols: i32 },
    /// The simulation clock ticked.
    Tick,
    /// Sent once when the application starts.
    Init,
    /// Request to quit (e.g. Ctrl+C).
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown` stamped with the current time.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            time: Instant::now(),
        }
    }
}
