//! Level construction.
//!
//! Turns a grid of small integer tile codes into entities. Runs once when the
//! level is set up; it is not part of the per-frame simulation.
//!
//! Grid rows map to world Y from the bottom up: the last row sits on the
//! bottom edge of the logical screen, and a grid of `n` rows places row `r`
//! at `logical_height - (n - r) * tile_size`.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Vector2;

use crate::components::animation::Animations;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::kind::EntityKind;
use crate::components::layer::Layer;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{Sprite, TextureHandle};
use crate::resources::gameassets::{ANIM_PLAYER_IDLE, GameAssets};
use crate::resources::layers::WorldLayers;

/// Side of a grid cell in world units.
pub const TILE_SIZE: f32 = 32.0;
pub const MAP_ROWS: usize = 5;
pub const MAP_COLS: usize = 50;

/// Input acceleration of the player.
pub const PLAYER_ACCELERATION: f32 = 300.0;
/// Horizontal speed cap of the player.
pub const PLAYER_MAX_SPEED_X: f32 = 100.0;

/// Tile codes understood by the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileCode {
    Empty,
    Ground,
    Panel,
    Enemy,
    Player,
    Grass,
    Brick,
}

impl TileCode {
    /// Decode a grid value. Unknown values decode to `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileCode::Empty),
            1 => Some(TileCode::Ground),
            2 => Some(TileCode::Panel),
            3 => Some(TileCode::Enemy),
            4 => Some(TileCode::Player),
            5 => Some(TileCode::Grass),
            6 => Some(TileCode::Brick),
            _ => None,
        }
    }

    /// Texture of a static level tile, `None` for codes that are not tiles.
    pub fn tile_texture(self, assets: &GameAssets) -> Option<TextureHandle> {
        match self {
            TileCode::Ground => Some(assets.ground),
            TileCode::Panel => Some(assets.panel),
            TileCode::Grass => Some(assets.grass),
            TileCode::Brick => Some(assets.brick),
            TileCode::Empty | TileCode::Enemy | TileCode::Player => None,
        }
    }
}

/// The built-in level.
pub const LEVEL_MAP: [[u8; MAP_COLS]; MAP_ROWS] = [
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 6, 6, 6, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6,
    ],
    [
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 5,
        5, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    ],
];

/// How grid cells map onto the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelGeometry {
    pub tile_size: f32,
    /// Height of the logical screen the grid is anchored to.
    pub logical_height: f32,
}

impl LevelGeometry {
    pub fn new(tile_size: f32, logical_height: f32) -> Self {
        Self {
            tile_size,
            logical_height,
        }
    }

    /// World position of the cell at `row`, `col` in a grid of `rows` rows.
    pub fn cell_position(&self, row: usize, col: usize, rows: usize) -> Vector2 {
        Vector2 {
            x: col as f32 * self.tile_size,
            y: self.logical_height - (rows - row) as f32 * self.tile_size,
        }
    }
}

/// What [`build_level`] spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelSummary {
    pub tiles: usize,
    pub player: Option<Entity>,
}

/// Spawn the static tile at `position`.
pub fn spawn_tile(world: &mut World, position: Vector2, tex: TextureHandle, tile_size: f32) -> Entity {
    let entity = world
        .spawn((
            EntityKind::level_tile(),
            MapPosition::new(position.x, position.y),
            RigidBody::fixed(),
            Facing::default(),
            BoxCollider::new(tile_size, tile_size),
            Sprite::new(tex, tile_size, tile_size),
            Animations::default(),
            Layer::Level,
        ))
        .id();
    world.resource_mut::<WorldLayers>().push(Layer::Level, entity);
    entity
}

/// Spawn the player, idle and at rest, at `position`.
pub fn spawn_player(world: &mut World, position: Vector2, assets: &GameAssets) -> Entity {
    let entity = world
        .spawn((
            EntityKind::player(),
            MapPosition::new(position.x, position.y),
            RigidBody::dynamic(
                Vector2 {
                    x: PLAYER_ACCELERATION,
                    y: 0.0,
                },
                PLAYER_MAX_SPEED_X,
            ),
            Facing::default(),
            BoxCollider::new(10.0, 26.0).with_offset(Vector2 { x: 11.0, y: 6.0 }),
            Sprite::new(assets.idle, TILE_SIZE, TILE_SIZE),
            Animations::new(assets.animations.clone()).with_current(ANIM_PLAYER_IDLE),
            Layer::Characters,
        ))
        .id();
    world
        .resource_mut::<WorldLayers>()
        .push(Layer::Characters, entity);
    entity
}

/// Build the entities of `grid` into `world`.
///
/// Tile codes become static level tiles in the level layer; the first player
/// code becomes the player in the characters layer. Empty cells, enemy cells
/// (no enemy art yet), extra player codes and unknown codes are skipped.
pub fn build_level<R: AsRef<[u8]>>(
    world: &mut World,
    grid: &[R],
    geometry: LevelGeometry,
    assets: &GameAssets,
) -> LevelSummary {
    world.init_resource::<WorldLayers>();

    let rows = grid.len();
    let mut summary = LevelSummary {
        tiles: 0,
        player: None,
    };

    for (row, cells) in grid.iter().enumerate() {
        for (col, &code) in cells.as_ref().iter().enumerate() {
            let Some(tile) = TileCode::from_code(code) else {
                continue;
            };
            let position = geometry.cell_position(row, col, rows);

            if let Some(tex) = tile.tile_texture(assets) {
                spawn_tile(world, position, tex, geometry.tile_size);
                summary.tiles += 1;
            } else if tile == TileCode::Player {
                if summary.player.is_some() {
                    warn!("Extra player at row {}, col {} skipped", row, col);
                    continue;
                }
                summary.player = Some(spawn_player(world, position, assets));
            } else if tile == TileCode::Enemy {
                debug!("Enemy at row {}, col {} skipped", row, col);
            }
        }
    }

    info!(
        "Level built: {} tiles, player {}",
        summary.tiles,
        if summary.player.is_some() { "spawned" } else { "missing" }
    );
    summary
}

/// Despawn every layered entity and empty the layers.
pub fn unload_level(world: &mut World) {
    let entities: Vec<Entity> = {
        let Some(mut layers) = world.get_resource_mut::<WorldLayers>() else {
            return;
        };
        let entities = layers.iter().collect();
        layers.clear();
        entities
    };
    for entity in entities {
        world.despawn(entity);
    }
}
