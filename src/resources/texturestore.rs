//! Loaded textures.
//!
//! The store owns every GPU texture and hands out [`TextureHandle`] indices.
//! Entities only ever hold handles; nothing in the simulation frees or
//! replaces a texture. Inserted as a non-send resource because raylib
//! textures must stay on the main thread.

use log::debug;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::sprite::TextureHandle;

#[derive(Default)]
pub struct TextureStore {
    textures: Vec<Texture2D>,
    names: FxHashMap<String, TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and register it under `name`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        name: &str,
        path: &str,
    ) -> Result<TextureHandle, String> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {}", name, path, e))?;
        debug!("Loaded texture '{}' from {}", name, path);
        Ok(self.insert(name, texture))
    }

    /// Register an already-loaded texture under `name`.
    pub fn insert(&mut self, name: impl Into<String>, texture: Texture2D) -> TextureHandle {
        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        self.names.insert(name.into(), handle);
        handle
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&Texture2D> {
        self.textures.get(handle.0)
    }

    /// Handle of a texture registered under `name`.
    pub fn handle(&self, name: &str) -> Option<TextureHandle> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
