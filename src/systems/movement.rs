//! Kinematics systems.
//!
//! - [`gravity`] adds the world gravity to every dynamic body's velocity. It
//!   runs first in the frame, before input has a chance to touch velocity.
//! - [`movement`] integrates positions from velocities once input and
//!   gravity have been applied, right before collision resolution.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::physics::Physics;
use crate::resources::worldtime::WorldTime;

/// Accelerate dynamic bodies by gravity.
pub fn gravity(mut query: Query<&mut RigidBody>, physics: Res<Physics>, time: Res<WorldTime>) {
    for mut rigidbody in query.iter_mut() {
        if rigidbody.dynamic {
            rigidbody.velocity += physics.gravity * time.delta;
        }
    }
}

/// `position += velocity * delta` for every body.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos += rigidbody.velocity * time.delta;
    }
}
