//! World-wide physics constants.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Default downward gravity in world units per second squared.
pub const DEFAULT_GRAVITY: f32 = 500.0;

/// Forces applied to every dynamic body.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Physics {
    pub gravity: Vector2,
}

impl Default for Physics {
    fn default() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }
}

impl Physics {
    /// Downward gravity of the given magnitude (Y grows downwards).
    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity: Vector2 { x: 0.0, y: gravity },
        }
    }
}
