//! Debug overlay toggle.
//!
//! While this resource exists the renderer outlines every collider and
//! prints the player state in a corner of the window.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
