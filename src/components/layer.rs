//! World layer tag.
//!
//! Entities are partitioned by role. The level layer holds static geometry
//! and is always processed and drawn before the characters layer.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Static obstacles built from the tile grid.
    Level,
    /// Dynamic actors, the player included.
    Characters,
}

impl Layer {
    /// All layers in draw order.
    pub const ALL: [Layer; 2] = [Layer::Level, Layer::Characters];
}
