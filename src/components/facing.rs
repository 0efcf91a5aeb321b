//! Horizontal facing of an entity.

use bevy_ecs::prelude::Component;

/// Signed facing, `+1.0` (right) or `-1.0` (left). Drives sprite mirroring.
///
/// Facing only changes when there is a horizontal intent; a tick without
/// intent keeps whatever the entity last faced.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Facing(pub f32);

impl Default for Facing {
    fn default() -> Self {
        Facing(1.0)
    }
}

impl Facing {
    /// Turn towards the sign of `intent`. Zero intent leaves facing untouched.
    pub fn face(&mut self, intent: f32) {
        if intent != 0.0 {
            self.0 = intent.signum();
        }
    }

    /// True when the sprite has to be drawn mirrored.
    pub fn is_mirrored(&self) -> bool {
        self.0 < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_right() {
        assert_eq!(Facing::default(), Facing(1.0));
        assert!(!Facing::default().is_mirrored());
    }

    #[test]
    fn face_follows_intent_sign() {
        let mut facing = Facing::default();
        facing.face(-1.0);
        assert_eq!(facing, Facing(-1.0));
        assert!(facing.is_mirrored());
        facing.face(1.0);
        assert_eq!(facing, Facing(1.0));
    }

    #[test]
    fn zero_intent_keeps_last_facing() {
        let mut facing = Facing::default();
        facing.face(-1.0);
        facing.face(0.0);
        assert_eq!(facing, Facing(-1.0));
    }
}
