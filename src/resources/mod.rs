//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: input, timing, physics
//! constants, asset handles, layer ordering and the platform's render state.
//!
//! Overview
//! - `debugmode` – presence toggles the collider/state debug overlay
//! - `gameassets` – named texture handles and animation definitions
//! - `gameconfig` – INI-backed window, render and physics settings
//! - `input` – per-frame keyboard state and horizontal intent
//! - `layers` – ordered entity lists for the level and characters layers
//! - `physics` – gravity applied to dynamic bodies
//! - `rendertarget` – logical-resolution framebuffer and letterboxing
//! - `texturestore` – loaded textures addressed by handle
//! - `worldtime` – simulation time, delta and the millisecond frame clock
pub mod debugmode;
pub mod gameassets;
pub mod gameconfig;
pub mod input;
pub mod layers;
pub mod physics;
pub mod rendertarget;
pub mod texturestore;
pub mod worldtime;
