// Keyboard tracking and snapshot production

use std::collections::{HashMap, HashSet};

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::{default_bindings, Action};
use super::snapshot::InputSnapshot;

/// Tracks held keys and produces one [`InputSnapshot`] per tick.
///
/// A logical action counts as held while any of its bound keys is down, so
/// releasing A while still holding ArrowLeft keeps MoveLeft held. Direction
/// press edges are derived by comparing the logical held-state against the
/// previous snapshot, which is exactly the contract the controller expects.
#[derive(Debug)]
pub struct InputManager {
    /// Key to action mapping
    bindings: HashMap<KeyCode, Action>,

    /// Physical keys currently held down
    held_keys: HashSet<KeyCode>,

    /// Logical direction state at the previous snapshot (for edges)
    prev_left: bool,
    prev_right: bool,
}

impl InputManager {
    pub fn new(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held_keys: HashSet::new(),
            prev_left: false,
            prev_right: false,
        }
    }

    pub fn with_default_bindings() -> Self {
        Self::new(default_bindings())
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                // Key repeats would re-insert anyway; skip them to match
                // press semantics
                if !event.repeat {
                    self.press_key(key_code);
                }
            }
            ElementState::Released => {
                self.release_key(key_code);
            }
        }
    }

    /// Register a key press
    pub fn press_key(&mut self, key_code: KeyCode) {
        if self.bindings.contains_key(&key_code) {
            self.held_keys.insert(key_code);
        }
    }

    /// Register a key release
    pub fn release_key(&mut self, key_code: KeyCode) {
        self.held_keys.remove(&key_code);
    }

    /// Check if an action is held via any of its bound keys
    pub fn is_held(&self, action: Action) -> bool {
        self.bindings
            .iter()
            .any(|(key, bound)| *bound == action && self.held_keys.contains(key))
    }

    /// Sample the input state for one tick.
    ///
    /// Call exactly once per tick: the direction press edges compare
    /// against the previous call's held-state and are consumed by sampling.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let left = self.is_held(Action::MoveLeft);
        let right = self.is_held(Action::MoveRight);

        let snapshot = InputSnapshot {
            left,
            right,
            jump: self.is_held(Action::Jump),
            sprint: self.is_held(Action::Sprint),
            attack: self.is_held(Action::Attack),
            defend: self.is_held(Action::Defend),
            left_pressed: left && !self.prev_left,
            right_pressed: right && !self.prev_right,
        };

        self.prev_left = left;
        self.prev_right = right;

        snapshot
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.held_keys.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}
