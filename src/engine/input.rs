use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Without release events a key counts as held until this long after the
/// first press, which has to outlast the terminal's autorepeat delay.
const FIRST_HOLD: Duration = Duration::from_millis(600);
/// Hold window once autorepeat is running.
const REPEAT_HOLD: Duration = Duration::from_millis(120);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Quit,
    Left,
    Right,
    Thrust,
    Fire,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Quit, Key::Left, Key::Right, Key::Thrust, Key::Fire];

    fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Esc => Some(Key::Quit),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Up => Some(Key::Thrust),
            KeyCode::Char(' ') => Some(Key::Fire),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Went down since the previous frame
    pub pressed: bool,
    /// Currently down
    pub held: bool,
    /// Went up since the previous frame
    pub released: bool,
}

/// Key states for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    keys: [KeyState; Key::ALL.len()],
}

impl Input {
    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    pub fn held(&self, key: Key) -> bool {
        self.key(key).held
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.key(key).pressed
    }

    pub fn released(&self, key: Key) -> bool {
        self.key(key).released
    }

    #[cfg(test)]
    pub fn with(mut self, key: Key, state: KeyState) -> Self {
        self.keys[key.index()] = state;
        self
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    down: bool,
    pressed: bool,
    released: bool,
    expires: Option<Instant>,
}

/// Turns the terminal's key event stream into per-frame key states.
///
/// Terminals that speak the keyboard enhancement protocol report releases,
/// which are used as-is. Everything else only reports presses and autorepeat,
/// so releases are synthesised once the repeats stop arriving.
pub struct Keyboard {
    slots: [Slot; Key::ALL.len()],
    reports_release: bool,
}

impl Keyboard {
    pub fn new(reports_release: bool) -> Self {
        Self {
            slots: [Slot::default(); Key::ALL.len()],
            reports_release,
        }
    }

    pub fn handle(&mut self, event: KeyEvent, now: Instant) {
        let Some(key) = Key::from_code(event.code) else {
            return;
        };
        let slot = &mut self.slots[key.index()];
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let repeat = slot.down || event.kind == KeyEventKind::Repeat;
                if !slot.down {
                    slot.down = true;
                    slot.pressed = true;
                }
                if !self.reports_release {
                    let hold = if repeat { REPEAT_HOLD } else { FIRST_HOLD };
                    slot.expires = Some(now + hold);
                }
            }
            KeyEventKind::Release => {
                if slot.down {
                    slot.down = false;
                    slot.released = true;
                }
                slot.expires = None;
            }
        }
    }

    /// Snapshot the key states for this frame and reset the edge latches.
    pub fn poll(&mut self, now: Instant) -> Input {
        let mut input = Input::default();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.expires.is_some_and(|at| now >= at) {
                slot.down = false;
                slot.released = true;
                slot.expires = None;
            }
            input.keys[i] = KeyState {
                pressed: slot.pressed,
                held: slot.down,
                released: slot.released,
            };
            slot.pressed = false;
            slot.released = false;
        }
        input
    }
}
