//! Named texture handles and animation definitions used to build entities.
//!
//! [`GameAssets`] is the fixed set of resources the level builder and the
//! player controller draw from: the handles of the six textures the game
//! uses and the pre-built animation tracks. Handles are plain indices into
//! the [`TextureStore`], so this resource can be built without a window.

use bevy_ecs::prelude::Resource;

use crate::components::animation::Animation;
use crate::components::sprite::TextureHandle;
use crate::resources::texturestore::TextureStore;

/// Index of the idle track in [`GameAssets::animations`].
pub const ANIM_PLAYER_IDLE: usize = 0;
/// Index of the running track in [`GameAssets::animations`].
pub const ANIM_PLAYER_RUN: usize = 1;

/// Texture names and the file each one is loaded from.
pub const TEXTURE_FILES: [(&str, &str); 6] = [
    ("idle", "./assets/textures/idle.png"),
    ("running", "./assets/textures/running.png"),
    ("ground", "./assets/textures/ground.png"),
    ("panel", "./assets/textures/panel.png"),
    ("grass", "./assets/textures/grass.png"),
    ("brick", "./assets/textures/brick.png"),
];

#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub idle: TextureHandle,
    pub running: TextureHandle,
    pub ground: TextureHandle,
    pub panel: TextureHandle,
    pub grass: TextureHandle,
    pub brick: TextureHandle,
    /// Animation definitions, copied into entities that use them.
    pub animations: Vec<Animation>,
}

impl GameAssets {
    /// Assets for the given handles, with the standard animation set.
    pub fn new(
        idle: TextureHandle,
        running: TextureHandle,
        ground: TextureHandle,
        panel: TextureHandle,
        grass: TextureHandle,
        brick: TextureHandle,
    ) -> Self {
        Self {
            idle,
            running,
            ground,
            panel,
            grass,
            brick,
            animations: standard_animations(),
        }
    }

    /// Resolve every named texture in `store`.
    pub fn from_store(store: &TextureStore) -> Result<Self, String> {
        let get = |name: &str| {
            store
                .handle(name)
                .ok_or_else(|| format!("Texture '{}' was not loaded", name))
        };
        Ok(Self::new(
            get("idle")?,
            get("running")?,
            get("ground")?,
            get("panel")?,
            get("grass")?,
            get("brick")?,
        ))
    }
}

/// Idle: 8 frames over 1.6 s. Running: 4 frames over 0.5 s. Indexed by
/// [`ANIM_PLAYER_IDLE`] and [`ANIM_PLAYER_RUN`].
pub fn standard_animations() -> Vec<Animation> {
    vec![Animation::new(8, 1.6), Animation::new(4, 0.5)]
}
