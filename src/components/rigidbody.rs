//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity and acceleration of an
//! entity, the horizontal speed cap and whether the entity is dynamic.
//! Dynamic bodies receive gravity and are the moving side of a collision;
//! static bodies (level tiles) are only ever obstacles.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity, acceleration and the horizontal speed cap.
///
/// `acceleration` is the magnitude the entity accelerates with when driven by
/// input; gravity is a world-wide force from
/// [`Physics`](crate::resources::physics::Physics) and is not stored here.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::dynamic(Vector2 { x: 300.0, y: 0.0 }, 100.0);
/// rb.accelerate(1.0, 0.016);
/// rb.clamp_horizontal(1.0);
/// ```
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Input acceleration in world units per second squared.
    pub acceleration: Vector2,
    /// Horizontal speed limit. Zero for entities that never move.
    pub max_speed_x: f32,
    /// Whether gravity applies and the entity resolves its own collisions.
    pub dynamic: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::fixed()
    }
}

impl RigidBody {
    /// A body that never moves.
    pub fn fixed() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            acceleration: Vector2 { x: 0.0, y: 0.0 },
            max_speed_x: 0.0,
            dynamic: false,
        }
    }

    /// A dynamic body at rest.
    pub fn dynamic(acceleration: Vector2, max_speed_x: f32) -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            acceleration,
            max_speed_x,
            dynamic: true,
        }
    }

    /// Add `intent * acceleration * delta` to the velocity.
    pub fn accelerate(&mut self, intent: f32, delta: f32) {
        self.velocity += self.acceleration * (intent * delta);
    }

    /// Slow the horizontal velocity towards zero at `1.5 * acceleration.x`.
    ///
    /// A step larger than the remaining speed stops the body exactly.
    pub fn decelerate_x(&mut self, delta: f32) {
        if self.velocity.x == 0.0 {
            return;
        }
        let factor = if self.velocity.x > 0.0 { -1.5 } else { 1.5 };
        let amount = factor * self.acceleration.x * delta;
        if self.velocity.x.abs() < amount.abs() {
            self.velocity.x = 0.0;
        } else {
            self.velocity.x += amount;
        }
    }

    /// Cap the horizontal speed.
    ///
    /// When over the limit the velocity becomes `intent * max_speed_x`, so a
    /// body coasting over the limit with no intent is stopped dead.
    pub fn clamp_horizontal(&mut self, intent: f32) {
        if self.velocity.x.abs() > self.max_speed_x {
            self.velocity.x = intent * self.max_speed_x;
        }
    }
}
