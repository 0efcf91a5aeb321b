use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animations;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::layers::WorldLayers;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;

/// Side of the square frames in every sprite sheet.
pub const FRAME_SIZE: f32 = 32.0;

const BACKGROUND: Color = Color {
    r: 20,
    g: 10,
    b: 30,
    a: 255,
};

/// Source rectangle of a frame in a horizontal sprite sheet.
///
/// A negative width makes raylib mirror the frame, which is how a sprite
/// facing left is drawn.
pub fn frame_source_rect(frame: usize, mirrored: bool) -> Rectangle {
    Rectangle {
        x: frame as f32 * FRAME_SIZE,
        y: 0.0,
        width: if mirrored { -FRAME_SIZE } else { FRAME_SIZE },
        height: FRAME_SIZE,
    }
}

/// Draw the world into the logical render target, then scale that into the
/// window.
///
/// Entities are drawn in [`WorldLayers`] order, so the level always sits
/// under the characters. Nothing here mutates the simulation.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    layers: Res<WorldLayers>,
    sprites: Query<(&MapPosition, &Sprite, Option<&Animations>, Option<&Facing>)>,
    colliders: Query<(&MapPosition, &BoxCollider)>,
    kinds: Query<&EntityKind>,
    debug: Option<Res<DebugMode>>,
) {
    let window_w = rl.get_screen_width();
    let window_h = rl.get_screen_height();
    let source = target.source_rect();
    let dest = target.letterbox(window_w, window_h);

    let mut d = rl.begin_drawing(&th);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(BACKGROUND);

        for entity in layers.iter() {
            let Ok((position, sprite, animations, facing)) = sprites.get(entity) else {
                continue;
            };
            let Some(tex) = textures.get(sprite.tex) else {
                continue;
            };
            let frame = animations.and_then(Animations::current_frame).unwrap_or(0);
            let mirrored = facing.is_some_and(Facing::is_mirrored);
            let sprite_rect = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            t.draw_texture_pro(
                tex,
                frame_source_rect(frame, mirrored),
                sprite_rect,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }

        if debug.is_some() {
            for entity in layers.iter() {
                if let Ok((position, collider)) = colliders.get(entity) {
                    let rect = collider.world_rect(position.pos);
                    t.draw_rectangle_lines_ex(rect, 1.0, Color::RED);
                }
            }
        }
    }

    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        &target.texture,
        source,
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );

    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG (F11) | FPS: {} | Entities: {}", fps, layers.len()),
            10,
            10,
            20,
            Color::RAYWHITE,
        );
        for kind in kinds.iter() {
            if let Some(state) = kind.player_state() {
                d.draw_text(&format!("Player: {:?}", state), 10, 34, 20, Color::RAYWHITE);
            }
        }
    }
}
