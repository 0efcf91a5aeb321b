//! Game setup: asset loading, world resources and the simulation schedule.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::level::{LEVEL_MAP, LevelGeometry, LevelSummary, TILE_SIZE, build_level};
use crate::resources::gameassets::{GameAssets, TEXTURE_FILES};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::layers::WorldLayers;
use crate::resources::physics::Physics;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collision::collision_detector;
use crate::systems::movement::{gravity, movement};
use crate::systems::playercontroller::player_controller;

/// Load every texture the game uses. Fails on the first missing file.
pub fn load_textures(rl: &mut RaylibHandle, th: &RaylibThread) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();
    for (name, path) in TEXTURE_FILES {
        store.load(rl, th, name, path)?;
    }
    info!("Loaded {} textures", store.len());
    Ok(store)
}

/// Insert the resources the simulation systems read.
pub fn insert_simulation_resources(world: &mut World, config: &GameConfig, assets: GameAssets) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Physics::with_gravity(config.gravity));
    world.insert_resource(WorldLayers::new());
    world.insert_resource(assets);
}

/// Build the built-in level against the logical screen height.
pub fn setup_level(world: &mut World, config: &GameConfig) -> LevelSummary {
    let assets = world.resource::<GameAssets>().clone();
    let geometry = LevelGeometry::new(TILE_SIZE, config.render_height as f32);
    build_level(world, &LEVEL_MAP, geometry, &assets)
}

/// Add one simulation tick to `schedule`, in order: gravity, player state
/// machine, position integration, collision, animation.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            gravity,
            player_controller,
            movement,
            collision_detector,
            animation,
        )
            .chain(),
    );
}

/// A schedule running just the simulation tick.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    schedule
}
