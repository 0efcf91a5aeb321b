//! EchoWorlds library.
//!
//! A small side-scrolling platformer built on bevy_ecs and raylib. This
//! module exposes the simulation core (components, resources, systems) and
//! the level builder for use by the game binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod systems;
