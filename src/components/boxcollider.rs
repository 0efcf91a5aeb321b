use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned collider, placed at `offset` from the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle of the collider for a given entity position.
    pub fn world_rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x + self.offset.x,
            y: position.y + self.offset.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// Overlap region against another collider at a different entity position.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlap(
        &self,
        position: Vector2,
        other: &Self,
        other_position: Vector2,
    ) -> Option<Rectangle> {
        intersection(
            &self.world_rect(position),
            &other.world_rect(other_position),
        )
    }
}

/// Intersection of two rectangles, `None` when they do not overlap.
pub fn intersection(a: &Rectangle, b: &Rectangle) -> Option<Rectangle> {
    let min_x = a.x.max(b.x);
    let min_y = a.y.max(b.y);
    let max_x = (a.x + a.width).min(b.x + b.width);
    let max_y = (a.y + a.height).min(b.y + b.height);
    if min_x < max_x && min_y < max_y {
        Some(Rectangle {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    } else {
        None
    }
}
