//! Keyboard input tracking.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Tracks which keys are held and which changed this frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame, in press order
    just_pressed_keys: Vec<KeyCode>,
    /// Keys that were just released this frame
    just_released_keys: HashSet<KeyCode>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the beginning of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
    }

    /// Handle a key press event. Auto-repeat counts as a fresh press.
    pub fn on_key_pressed(&mut self, key: KeyCode, repeat: bool) {
        if self.pressed_keys.insert(key) || repeat {
            self.just_pressed_keys.push(key);
        }
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        if self.pressed_keys.remove(&key) {
            self.just_released_keys.insert(key);
        }
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a key was just released this frame.
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.just_released_keys.contains(&key)
    }

    /// Keys pressed since the last `begin_frame`, oldest first.
    pub fn just_pressed(&self) -> &[KeyCode] {
        &self.just_pressed_keys
    }

    /// Either shift key is held.
    pub fn shift(&self) -> bool {
        self.is_key_pressed(KeyCode::ShiftLeft) || self.is_key_pressed(KeyCode::ShiftRight)
    }
}
