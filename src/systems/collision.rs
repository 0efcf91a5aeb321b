//! Collision detection and response.
//!
//! [`collision_detector`] walks every ordered pair `(a, b)` of distinct
//! entities in [`WorldLayers`] order. That is O(n²) with both directions
//! checked, which is fine for a single screen of tiles; a spatial grid would
//! have to keep the same narrow phase and resolution for every pair.
//!
//! For each pair the response is looked up by kind in [`response_for`]. When
//! there is one and the colliders overlap, it runs immediately, so later
//! pairs see the corrected position. The pairs of one dynamic entity run
//! deepest overlap first. Responses only ever touch `a`, the dynamic side;
//! `b` is an obstacle and is never moved.
//!
//! This is discrete end-of-step correction. Fast bodies can tunnel through
//! thin obstacles on long frames.

use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::kind::{EntityKind, KindTag};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::layers::WorldLayers;

/// Response callback: mutates the position and velocity of the first entity
/// of a colliding pair, given the overlap rectangle.
pub type CollisionResponse = fn(position: &mut Vector2, velocity: &mut Vector2, overlap: &Rectangle);

/// Axis a collision is resolved along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Axis of least penetration. Ties go vertical.
pub fn penetration_axis(overlap: &Rectangle) -> Axis {
    if overlap.width < overlap.height {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Response table keyed by `(kind of a, kind of b)`.
pub fn response_for(a: KindTag, b: KindTag) -> Option<CollisionResponse> {
    match (a, b) {
        (KindTag::Player, KindTag::LevelTile) => Some(resolve_against_level),
        _ => None,
    }
}

/// Push a body out of static level geometry.
///
/// The body moves back against its velocity by the overlap along the axis of
/// least penetration, then its velocity on that axis is zeroed. With zero
/// velocity on that axis there is no push, only the zeroing.
pub fn resolve_against_level(position: &mut Vector2, velocity: &mut Vector2, overlap: &Rectangle) {
    match penetration_axis(overlap) {
        Axis::Horizontal => {
            if velocity.x > 0.0 {
                position.x -= overlap.width;
            } else if velocity.x < 0.0 {
                position.x += overlap.width;
            }
            velocity.x = 0.0;
        }
        Axis::Vertical => {
            if velocity.y > 0.0 {
                position.y -= overlap.height;
            } else if velocity.y < 0.0 {
                position.y += overlap.height;
            }
            velocity.y = 0.0;
        }
    }
}

/// Overlap area of `a` against `b` at their current positions, zero when apart.
fn overlap_area(
    bodies: &Query<(&mut MapPosition, &mut RigidBody, &BoxCollider)>,
    a: Entity,
    b: Entity,
) -> f32 {
    let (Ok((position_a, _, collider_a)), Ok((position_b, _, collider_b))) = (bodies.get(a), bodies.get(b))
    else {
        return 0.0;
    };
    collider_a
        .overlap(position_a.pos, collider_b, position_b.pos)
        .map_or(0.0, |overlap| overlap.width * overlap.height)
}

/// Detect overlaps between every ordered pair and run the matching response.
///
/// Obstacles of a dynamic entity are handled deepest first (largest overlap
/// area, ties in layer order), and each is re-tested against the position
/// left by the previous responses. A sliver of the tile behind a seam then
/// never outranks the tile the body stands on.
pub fn collision_detector(
    layers: Res<WorldLayers>,
    kinds: Query<&EntityKind>,
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider)>,
) {
    let entities: Vec<Entity> = layers.iter().collect();

    for &a in &entities {
        let Ok(kind_a) = kinds.get(a) else {
            continue;
        };
        if !bodies.get(a).is_ok_and(|(_, rigidbody, _)| rigidbody.dynamic) {
            continue;
        }

        let mut contacts: Vec<(Entity, CollisionResponse, f32)> = entities
            .iter()
            .filter(|&&b| b != a)
            .filter_map(|&b| {
                let kind_b = kinds.get(b).ok()?;
                let response = response_for(kind_a.tag(), kind_b.tag())?;
                Some((b, response, overlap_area(&bodies, a, b)))
            })
            .collect();
        contacts.sort_by(|x, y| y.2.total_cmp(&x.2));

        for (b, response, _) in contacts {
            let Ok([(mut position_a, mut rigidbody_a, collider_a), (position_b, _, collider_b)]) =
                bodies.get_many_mut([a, b])
            else {
                continue;
            };
            if let Some(overlap) = collider_a.overlap(position_a.pos, collider_b, position_b.pos) {
                trace!(
                    "Collision {:?} vs {:?}: overlap {}x{}",
                    a, b, overlap.width, overlap.height
                );
                response(&mut position_a.pos, &mut rigidbody_a.velocity, &overlap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[test]
    fn narrow_overlap_resolves_horizontally() {
        assert_eq!(penetration_axis(&rect(2.0, 10.0)), Axis::Horizontal);
    }

    #[test]
    fn flat_overlap_resolves_vertically() {
        assert_eq!(penetration_axis(&rect(10.0, 2.0)), Axis::Vertical);
    }

    #[test]
    fn square_overlap_resolves_vertically() {
        assert_eq!(penetration_axis(&rect(4.0, 4.0)), Axis::Vertical);
    }

    #[test]
    fn only_player_against_level_has_a_response() {
        assert!(response_for(KindTag::Player, KindTag::LevelTile).is_some());
        assert!(response_for(KindTag::LevelTile, KindTag::Player).is_none());
        assert!(response_for(KindTag::LevelTile, KindTag::LevelTile).is_none());
        assert!(response_for(KindTag::Player, KindTag::Enemy).is_none());
        assert!(response_for(KindTag::Projectile, KindTag::LevelTile).is_none());
    }

    #[test]
    fn moving_right_is_pushed_left() {
        let mut position = Vector2::new(100.0, 50.0);
        let mut velocity = Vector2::new(80.0, 0.0);
        resolve_against_level(&mut position, &mut velocity, &rect(2.0, 10.0));
        assert_eq!(position.x, 98.0);
        assert_eq!(position.y, 50.0);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn moving_left_is_pushed_right() {
        let mut position = Vector2::new(100.0, 50.0);
        let mut velocity = Vector2::new(-80.0, 5.0);
        resolve_against_level(&mut position, &mut velocity, &rect(3.0, 10.0));
        assert_eq!(position.x, 103.0);
        assert_eq!(velocity.x, 0.0);
        assert_eq!(velocity.y, 5.0);
    }

    #[test]
    fn falling_is_pushed_up() {
        let mut position = Vector2::new(10.0, 258.0);
        let mut velocity = Vector2::new(0.0, 120.0);
        resolve_against_level(&mut position, &mut velocity, &rect(10.0, 2.0));
        assert_eq!(position.y, 256.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn rising_is_pushed_down() {
        let mut position = Vector2::new(10.0, 100.0);
        let mut velocity = Vector2::new(0.0, -50.0);
        resolve_against_level(&mut position, &mut velocity, &rect(10.0, 4.0));
        assert_eq!(position.y, 104.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn zero_velocity_only_zeroes() {
        let mut position = Vector2::new(10.0, 100.0);
        let mut velocity = Vector2::new(0.0, 0.0);
        resolve_against_level(&mut position, &mut velocity, &rect(2.0, 10.0));
        assert_eq!(position.x, 10.0);
        assert_eq!(position.y, 100.0);
        assert_eq!(velocity.x, 0.0);
    }
}
