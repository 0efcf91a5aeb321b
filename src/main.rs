//! EchoWorlds main entry point.
//!
//! A small 2D side-scrolling platformer written in Rust using:
//! - **raylib** for windowing, textures, input and drawing
//! - **bevy_ecs** for the entity-component-system simulation
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window and load textures
//! 2. Build the level into the ECS world
//! 3. Every frame: derive the delta from the millisecond clock, poll input,
//!    run the simulation tick and draw the layers
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug
//! ```

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use echoworlds::events::switchdebug::switch_debug_observer;
use echoworlds::game;
use echoworlds::resources::debugmode::DebugMode;
use echoworlds::resources::gameassets::GameAssets;
use echoworlds::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use echoworlds::resources::rendertarget::RenderTarget;
use echoworlds::resources::worldtime::FrameClock;
use echoworlds::systems::animation::animation;
use echoworlds::systems::input::update_input_state;
use echoworlds::systems::movement::gravity;
use echoworlds::systems::render::render_system;
use echoworlds::systems::time::update_world_time;

/// EchoWorlds, a small 2D platformer
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with the collider debug overlay on (toggle in game with F11).
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn fail(message: String) -> ! {
    error!("{}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            fail(e);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("EchoWorlds");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let textures = game::load_textures(&mut rl, &thread).unwrap_or_else(|e| fail(e));
    let assets = GameAssets::from_store(&textures).unwrap_or_else(|e| fail(e));
    let render_target =
        RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)
            .unwrap_or_else(|e| fail(e));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::insert_simulation_resources(&mut world, &config, assets);
    game::setup_level(&mut world, &config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(gravity));
    game::add_simulation_systems(&mut update);
    update.add_systems(render_system.after(animation));

    // --------------- Main loop ---------------
    let mut clock = FrameClock::new();
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let now_ms = (world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_time()
            * 1000.0) as u64;
        update_world_time(&mut world, clock.tick(now_ms));

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Goodbye");
}
