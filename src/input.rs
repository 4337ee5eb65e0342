//! Device-independent input state.
//!
//! The host translates whatever physical keys it reads into [`Key`]s and
//! records presses/releases here between frames.  Each frame it hands a
//! [`snapshot`](InputState::snapshot) to the simulation, which only ever sees
//! booleans.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::MoveUp,
        Key::MoveDown,
        Key::MoveLeft,
        Key::MoveRight,
        Key::Fire,
    ];

    fn index(self) -> usize {
        match self {
            Key::MoveUp => 0,
            Key::MoveDown => 1,
            Key::MoveLeft => 2,
            Key::MoveRight => 3,
            Key::Fire => 4,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 5],
    /// A press event arrived since the last snapshot.
    pressed: [bool; 5],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
        self.pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Copy of the current state for one step.  Press latches are cleared so
    /// each press is seen by exactly one step.
    pub fn snapshot(&mut self) -> InputState {
        let snap = self.clone();
        self.pressed = [false; 5];
        snap
    }
}
