use bevy_ecs::prelude::Component;

/// Non-owning reference to a texture held by the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
///
/// The simulation only swaps handles around; it never loads, mutates or
/// frees the texture behind one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub usize);

/// Sprite drawn from a horizontal sprite sheet of fixed-size frames.
///
/// The active frame comes from the entity's
/// [`Animations`](crate::components::animation::Animations); the renderer
/// picks the sub-rectangle at `frame * width`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub tex: TextureHandle,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex: TextureHandle, width: f32, height: f32) -> Self {
        Self { tex, width, height }
    }
}
