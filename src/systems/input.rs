//! Input systems.
//!
//! - [`update_input_state`] polls raylib each frame and writes the results
//!   into [`crate::resources::input::InputState`], before any simulation
//!   system reads it.
//! - Pressing the debug key triggers a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_held = |state: &BoolState| {
        rl.is_key_down(state.key_binding)
            || (state.alt_binding != KeyboardKey::KEY_NULL && rl.is_key_down(state.alt_binding))
    };

    let left = is_held(&input.move_left);
    let right = is_held(&input.move_right);
    let debug = is_held(&input.toggle_debug);

    input.move_left.set_active(left);
    input.move_right.set_active(right);
    input.toggle_debug.set_active(debug);

    if input.toggle_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
