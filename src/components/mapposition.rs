use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity, in pixels. Y grows downwards.
///
/// This is the top-left corner of the sprite; colliders are offset from it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
