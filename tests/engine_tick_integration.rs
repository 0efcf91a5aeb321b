//! Engine tick integration tests for gravity, the player controller,
//! movement, collision, animation and the level builder.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use echoworlds::components::animation::Animations;
use echoworlds::components::facing::Facing;
use echoworlds::components::kind::{EntityKind, PlayerState};
use echoworlds::components::layer::Layer;
use echoworlds::components::mapposition::MapPosition;
use echoworlds::components::rigidbody::RigidBody;
use echoworlds::components::sprite::{Sprite, TextureHandle};
use echoworlds::game::simulation_schedule;
use echoworlds::level::{LEVEL_MAP, LevelGeometry, TILE_SIZE, build_level, spawn_player, spawn_tile};
use echoworlds::resources::gameassets::{ANIM_PLAYER_IDLE, ANIM_PLAYER_RUN, GameAssets};
use echoworlds::resources::input::InputState;
use echoworlds::resources::layers::WorldLayers;
use echoworlds::resources::physics::Physics;
use echoworlds::resources::worldtime::WorldTime;
use echoworlds::systems::animation::animation;
use echoworlds::systems::collision::collision_detector;
use echoworlds::systems::movement::{gravity, movement};
use echoworlds::systems::playercontroller::player_controller;
use echoworlds::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn assets() -> GameAssets {
    GameAssets::new(
        TextureHandle(0),
        TextureHandle(1),
        TextureHandle(2),
        TextureHandle(3),
        TextureHandle(4),
        TextureHandle(5),
    )
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Physics::with_gravity(500.0));
    world.insert_resource(WorldLayers::new());
    world.insert_resource(assets());
    update_world_time(&mut world, delta);
    world
}

fn set_intent(world: &mut World, intent: f32) {
    let mut input = world.resource_mut::<InputState>();
    input.move_left.set_active(intent < 0.0);
    input.move_right.set_active(intent > 0.0);
}

fn tick_gravity(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(gravity);
    schedule.run(world);
}

fn tick_player_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.run(world);
}

fn tick_movement_and_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision_detector).chain());
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn player_at(world: &mut World, x: f32, y: f32) -> Entity {
    let assets = world.resource::<GameAssets>().clone();
    spawn_player(world, Vector2 { x, y }, &assets)
}

fn player_state(world: &World, entity: Entity) -> Option<PlayerState> {
    world.get::<EntityKind>(entity).unwrap().player_state()
}

// ---------------------------------------------------------------------------
// Gravity and movement
// ---------------------------------------------------------------------------

#[test]
fn gravity_only_affects_dynamic_bodies() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    let tile = spawn_tile(&mut world, Vector2 { x: 0.0, y: 288.0 }, TextureHandle(2), TILE_SIZE);

    tick_gravity(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.y, 50.0));
    let rb = world.get::<RigidBody>(tile).unwrap();
    assert!(approx_eq(rb.velocity.y, 0.0));
}

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.5);
    let player = player_at(&mut world, 10.0, 20.0);
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector2 { x: 10.0, y: -4.0 };

    tick_movement_and_collision(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 15.0));
    assert!(approx_eq(pos.pos.y, 18.0));
}

#[test]
fn zero_delta_changes_nothing() {
    let mut world = make_world(0.0);
    let player = player_at(&mut world, 64.0, 160.0);
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector2 { x: 30.0, y: 30.0 };

    tick_gravity(&mut world);
    tick_movement_and_collision(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 64.0));
    assert!(approx_eq(pos.pos.y, 160.0));
}

// ---------------------------------------------------------------------------
// Player controller
// ---------------------------------------------------------------------------

#[test]
fn intent_switches_idle_to_running_with_texture_and_track() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    set_intent(&mut world, 1.0);

    tick_player_controller(&mut world);

    assert_eq!(player_state(&world, player), Some(PlayerState::Running));
    assert_eq!(world.get::<Sprite>(player).unwrap().tex, TextureHandle(1));
    assert_eq!(
        world.get::<Animations>(player).unwrap().current_index(),
        Some(ANIM_PLAYER_RUN)
    );
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, 30.0));
}

#[test]
fn running_without_intent_returns_to_idle_and_keeps_facing() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);

    set_intent(&mut world, -1.0);
    tick_player_controller(&mut world);
    assert!(world.get::<Facing>(player).unwrap().is_mirrored());

    set_intent(&mut world, 0.0);
    tick_player_controller(&mut world);

    assert_eq!(player_state(&world, player), Some(PlayerState::Idle));
    assert_eq!(world.get::<Sprite>(player).unwrap().tex, TextureHandle(0));
    assert_eq!(
        world.get::<Animations>(player).unwrap().current_index(),
        Some(ANIM_PLAYER_IDLE)
    );
    assert!(world.get::<Facing>(player).unwrap().is_mirrored());
    // Transition tick: no deceleration yet.
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, -30.0));
}

#[test]
fn staying_running_does_not_touch_the_sprite() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    set_intent(&mut world, 1.0);
    tick_player_controller(&mut world);

    world.get_mut::<Sprite>(player).unwrap().tex = TextureHandle(42);
    tick_player_controller(&mut world);

    assert_eq!(player_state(&world, player), Some(PlayerState::Running));
    assert_eq!(world.get::<Sprite>(player).unwrap().tex, TextureHandle(42));
}

#[test]
fn idle_deceleration_stops_without_overshoot() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    world.get_mut::<RigidBody>(player).unwrap().velocity.x = 40.0;

    tick_player_controller(&mut world);

    assert_eq!(player_state(&world, player), Some(PlayerState::Idle));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.velocity.x, 0.0);
}

#[test]
fn idle_deceleration_slows_by_one_and_a_half_acceleration() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    world.get_mut::<RigidBody>(player).unwrap().velocity.x = -80.0;

    tick_player_controller(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, -35.0));
}

#[test]
fn running_speed_is_clamped() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 0.0, 0.0);
    set_intent(&mut world, 1.0);
    tick_player_controller(&mut world);

    world.get_mut::<RigidBody>(player).unwrap().velocity.x = 300.0;
    tick_player_controller(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, 100.0));
}

// ---------------------------------------------------------------------------
// Collision
// ---------------------------------------------------------------------------

#[test]
fn falling_player_lands_on_tile_top() {
    let mut world = make_world(0.1);
    let player = player_at(&mut world, 64.0, 250.0);
    spawn_tile(&mut world, Vector2 { x: 64.0, y: 288.0 }, TextureHandle(2), TILE_SIZE);
    world.get_mut::<RigidBody>(player).unwrap().velocity.y = 100.0;

    tick_gravity(&mut world);
    tick_movement_and_collision(&mut world);

    // Collider bottom = y + 6 + 26 rests on the tile top at 288.
    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.y, 256.0));
    assert!(approx_eq(pos.pos.x, 64.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.velocity.y, 0.0);
}

#[test]
fn two_ground_tiles_push_only_once() {
    let mut world = make_world(0.1);
    // Collider spans x 27..37, straddling the seam at x = 32.
    let player = player_at(&mut world, 16.0, 254.0);
    spawn_tile(&mut world, Vector2 { x: 0.0, y: 288.0 }, TextureHandle(2), TILE_SIZE);
    spawn_tile(&mut world, Vector2 { x: 32.0, y: 288.0 }, TextureHandle(2), TILE_SIZE);

    tick_gravity(&mut world);
    tick_movement_and_collision(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.y, 256.0));
}

#[test]
fn running_into_a_wall_stops_horizontally() {
    let mut world = make_world(0.1);
    // Collider spans x 27..37 after moving 2 units right; wall starts at 35.
    let player = player_at(&mut world, 14.0, 100.0);
    spawn_tile(&mut world, Vector2 { x: 35.0, y: 96.0 }, TextureHandle(5), TILE_SIZE);
    world.get_mut::<RigidBody>(player).unwrap().velocity.x = 20.0;

    tick_movement_and_collision(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 14.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.velocity.x, 0.0);
}

fn ground_strip(world: &mut World, first_col: i32, last_col: i32) {
    for col in first_col..=last_col {
        let x = col as f32 * TILE_SIZE;
        spawn_tile(world, Vector2 { x, y: 288.0 }, TextureHandle(2), TILE_SIZE);
    }
}

#[test]
fn sliver_of_the_tile_behind_a_seam_does_not_stop_the_player() {
    let mut world = make_world(1.0 / 60.0);
    ground_strip(&mut world, 0, 1);
    // Collider left edge at 31.95, just right of the seam at x = 32.
    let player = player_at(&mut world, 20.95, 256.0);
    world.get_mut::<RigidBody>(player).unwrap().velocity.x = -3.0;

    tick_gravity(&mut world);
    tick_movement_and_collision(&mut world);

    // The left tile overlap (0.10 wide) is shallower than the sink (0.14),
    // but the tile underfoot lifts the player first, leaving it touching.
    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 20.9));
    assert!(approx_eq(pos.pos.y, 256.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, -3.0));
    assert_eq!(rb.velocity.y, 0.0);
}

#[test]
fn walking_left_crosses_ground_seams() {
    for i in 0..12 {
        let start_x = 300.0 + i as f32 * 6.1;
        let mut world = make_world(1.0 / 60.0);
        ground_strip(&mut world, -12, 12);
        let player = player_at(&mut world, start_x, 256.0);

        let mut schedule = simulation_schedule();
        for _ in 0..30 {
            schedule.run(&mut world);
        }
        set_intent(&mut world, -1.0);
        for _ in 0..180 {
            schedule.run(&mut world);
        }

        // Three seconds at up to 100 units/s, minus the time to accelerate.
        let pos = world.get::<MapPosition>(player).unwrap();
        assert!(
            pos.pos.x < start_x - 250.0,
            "start {} stopped at x = {}",
            start_x,
            pos.pos.x
        );
        assert!(approx_eq(pos.pos.y, 256.0));
        let rb = world.get::<RigidBody>(player).unwrap();
        assert!(approx_eq(rb.velocity.x, -100.0));
    }
}

#[test]
fn walking_right_crosses_ground_seams() {
    let mut world = make_world(1.0 / 60.0);
    ground_strip(&mut world, -2, 14);
    let player = player_at(&mut world, 3.0, 256.0);

    let mut schedule = simulation_schedule();
    set_intent(&mut world, 1.0);
    for _ in 0..180 {
        schedule.run(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(pos.pos.x > 253.0);
    assert!(approx_eq(pos.pos.y, 256.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, 100.0));
}

#[test]
fn touching_edges_do_not_collide() {
    let mut world = make_world(0.0);
    let player = player_at(&mut world, 64.0, 256.0);
    spawn_tile(&mut world, Vector2 { x: 64.0, y: 288.0 }, TextureHandle(2), TILE_SIZE);
    world.get_mut::<RigidBody>(player).unwrap().velocity.y = 12.0;

    tick_movement_and_collision(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.y, 12.0));
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

#[test]
fn animation_advances_current_track() {
    let mut world = make_world(0.25);
    let player = player_at(&mut world, 0.0, 0.0);

    tick_animation(&mut world);

    // Idle: 8 frames over 1.6 s, 0.2 s per frame.
    let animations = world.get::<Animations>(player).unwrap();
    assert_eq!(animations.current_frame(), Some(1));
}

#[test]
fn animation_wraps_around_cycle() {
    let mut world = make_world(1.7);
    let player = player_at(&mut world, 0.0, 0.0);

    tick_animation(&mut world);

    let animations = world.get::<Animations>(player).unwrap();
    assert_eq!(animations.current_frame(), Some(0));
}

// ---------------------------------------------------------------------------
// Level and full tick
// ---------------------------------------------------------------------------

#[test]
fn builtin_level_spawns_player_above_ground() {
    let mut world = make_world(0.0);
    let assets = assets();
    let summary = build_level(&mut world, &LEVEL_MAP, LevelGeometry::new(TILE_SIZE, 320.0), &assets);

    let player = summary.player.unwrap();
    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 64.0));
    assert!(approx_eq(pos.pos.y, 224.0));
    assert_eq!(*world.get::<Layer>(player).unwrap(), Layer::Characters);
}

#[test]
fn player_settles_on_ground_under_full_schedule() {
    let mut world = make_world(1.0 / 60.0);
    let assets = assets();
    let summary = build_level(&mut world, &LEVEL_MAP, LevelGeometry::new(TILE_SIZE, 320.0), &assets);
    let player = summary.player.unwrap();

    let mut schedule = simulation_schedule();
    for _ in 0..120 {
        schedule.run(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.y, 256.0));
    assert!(approx_eq(pos.pos.x, 64.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.velocity.y, 0.0);
    assert_eq!(player_state(&world, player), Some(PlayerState::Idle));
}

#[test]
fn player_runs_right_along_the_ground() {
    let mut world = make_world(1.0 / 60.0);
    let assets = assets();
    let summary = build_level(&mut world, &LEVEL_MAP, LevelGeometry::new(TILE_SIZE, 320.0), &assets);
    let player = summary.player.unwrap();

    let mut schedule = simulation_schedule();
    for _ in 0..60 {
        schedule.run(&mut world);
    }
    set_intent(&mut world, 1.0);
    for _ in 0..60 {
        schedule.run(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(pos.pos.x > 64.0);
    assert!(approx_eq(pos.pos.y, 256.0));
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(rb.velocity.x <= 100.0);
    assert_eq!(player_state(&world, player), Some(PlayerState::Running));
    assert!(!world.get::<Facing>(player).unwrap().is_mirrored());
}
