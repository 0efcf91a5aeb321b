//! Engine systems.
//!
//! The simulation runs in a fixed order every frame:
//! input → [`movement::gravity`] → [`playercontroller`] → [`movement::movement`]
//! → [`collision`] → [`animation`] → [`render`].
//!
//! Submodules overview
//! - [`animation`] – advance the playing animation track of each entity
//! - [`collision`] – pairwise overlap detection and kind-dispatched response
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – gravity and position integration
//! - [`playercontroller`] – player state machine, braking and speed cap
//! - [`render`] – draw the layers into the logical render target
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
