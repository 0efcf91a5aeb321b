//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! the [`InputState`] resource. The platform layer refreshes it once per
//! frame, before the simulation runs. Defaults use A/D for movement with the
//! arrow keys as alternates, and F11 for the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
    /// Second key for the same action, `KEY_NULL` when unused.
    pub alt_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL, KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Released state bound to `key` and `alt`.
    pub fn bound(key: KeyboardKey, alt: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
            alt_binding: alt,
        }
    }

    /// Hold or release the key, updating the edge flags.
    pub fn set_active(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub toggle_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
            toggle_debug: BoolState::bound(KeyboardKey::KEY_F11, KeyboardKey::KEY_NULL),
        }
    }
}

impl InputState {
    /// Signed horizontal intent: `+1` for right, `-1` for left, `0` when
    /// neither or both are held.
    pub fn intent(&self) -> f32 {
        let mut intent = 0.0;
        if self.move_left.active {
            intent -= 1.0;
        }
        if self.move_right.active {
            intent += 1.0;
        }
        intent
    }
}
