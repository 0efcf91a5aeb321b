//! Fixed-resolution render target.
//!
//! The level is laid out in a small logical resolution. Everything is drawn
//! into a texture of that size, which is then scaled into the window with
//! letterboxing so pixels stay square.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Logical-resolution framebuffer. Non-send: it wraps a GPU resource.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    /// Create the target with nearest-neighbour filtering for pixel art.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// Source rectangle covering the whole texture, Y flipped for OpenGL.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }

    /// Where the target lands inside a `window_w` x `window_h` window.
    pub fn letterbox(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(self.width, self.height, window_w, window_h)
    }
}

/// Largest rectangle with the game's aspect ratio centred in the window.
pub fn letterbox(game_width: u32, game_height: u32, window_w: i32, window_h: i32) -> Rectangle {
    let game_w = game_width as f32;
    let game_h = game_height as f32;
    let window_w = window_w as f32;
    let window_h = window_h as f32;

    if window_w / window_h > game_w / game_h {
        // pillarbox
        let scaled_w = game_w * (window_h / game_h);
        Rectangle {
            x: (window_w - scaled_w) / 2.0,
            y: 0.0,
            width: scaled_w,
            height: window_h,
        }
    } else {
        let scaled_h = game_h * (window_w / game_w);
        Rectangle {
            x: 0.0,
            y: (window_h - scaled_h) / 2.0,
            width: window_w,
            height: scaled_h,
        }
    }
}
