//! Animation playback.
//!
//! Advances the playing track of every entity by the frame delta. Which
//! track plays is decided earlier in the frame, by the player controller on
//! state transitions; the renderer reads the resulting frame index.

use bevy_ecs::prelude::*;

use crate::components::animation::Animations;
use crate::resources::worldtime::WorldTime;

/// Advance the current animation of each entity. Entities with no current
/// track are left alone.
pub fn animation(mut query: Query<&mut Animations>, time: Res<WorldTime>) {
    for mut animations in query.iter_mut() {
        if let Some(track) = animations.current_mut() {
            track.advance(time.delta);
        }
    }
}
