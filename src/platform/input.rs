//! Keyboard input mapping
//!
//! Keys arrive as press/release events at any time between steps. They
//! update a set of held actions, which the host copies into a
//! `ControlInput` once per step.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::ControlInput;

/// Keys the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Q,
    A,
    ArrowUp,
    ArrowDown,
    Escape,
}

impl Key {
    /// Map a DOM `keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            81 => Some(Key::Q),
            65 => Some(Key::A),
            38 => Some(Key::ArrowUp),
            40 => Some(Key::ArrowDown),
            27 => Some(Key::Escape),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "q" | "Q" => Some(Key::Q),
            "a" | "A" => Some(Key::A),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUpA,
    MoveDownA,
    MoveUpB,
    MoveDownB,
    TogglePause,
}

/// Key to action table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Key, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (Key::Q, Action::MoveUpA),
                (Key::A, Action::MoveDownA),
                (Key::ArrowUp, Action::MoveUpB),
                (Key::ArrowDown, Action::MoveDownB),
                (Key::Escape, Action::TogglePause),
            ]),
        }
    }
}

impl KeyBindings {
    pub fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Rebind a key, replacing whatever it did before
    pub fn bind(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }
}

/// Held state of every movement action
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held: ControlInput,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: ControlInput::default(),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if let Some(action) = self.bindings.action(key) {
            self.set_held(action, true);
        }
    }

    /// Release a key. Returns `Action::TogglePause` when the pause key
    /// goes up; pause is edge-triggered on release only.
    pub fn key_up(&mut self, key: Key) -> Option<Action> {
        let action = self.bindings.action(key)?;
        if action == Action::TogglePause {
            log::debug!("pause toggled by {key:?}");
            return Some(action);
        }
        self.set_held(action, false);
        None
    }

    /// Snapshot of held actions for the next step
    pub fn controls(&self) -> ControlInput {
        self.held
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held = ControlInput::default();
    }

    fn set_held(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveUpA => self.held.move_up_a = held,
            Action::MoveDownA => self.held.move_down_a = held,
            Action::MoveUpB => self.held.move_up_b = held,
            Action::MoveDownB => self.held.move_down_b = held,
            Action::TogglePause => {}
        }
    }
}
