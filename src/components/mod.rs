//! ECS components for entities.
//!
//! Every simulated object (player, level tile, and the reserved enemy and
//! projectile kinds) is one ECS entity built from the components below.
//!
//! Submodules overview:
//! - [`animation`] – frame-cycling animation tracks owned by an entity
//! - [`boxcollider`] – axis-aligned rectangular collider and overlap math
//! - [`facing`] – horizontal facing used for sprite mirroring
//! - [`kind`] – entity kind tag together with its per-kind state
//! - [`layer`] – which world layer an entity belongs to
//! - [`mapposition`] – world-space position of an entity
//! - [`rigidbody`] – velocity, acceleration and speed cap
//! - [`sprite`] – texture handle and draw size

pub mod animation;
pub mod boxcollider;
pub mod facing;
pub mod kind;
pub mod layer;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
