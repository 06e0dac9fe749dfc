//! Pete main entry point.
//!
//! A tile-based platformer built on:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini`, open the window
//! 2. Insert resources, start the audio thread, register observers and the
//!    state hooks, then enter the Loading state
//! 3. Every frame:
//!    - poll input and apply pending state changes
//!    - exchange messages with the audio thread
//!    - while loading, process one asset job
//!    - while playing, run one simulation step
//!    - draw
//! 4. Shut the audio thread down on exit

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use pete::events::gamestate::{
    ENTER_LOADING, ENTER_PLAY, GameStateChangedEvent, QUIT_GAME, observe_gamestate_change_event,
};
use pete::events::jump::jump_sound_observer;
use pete::events::pickup::pickup_collected_observer;
use pete::events::switchdebug::switch_debug_observer;
use pete::game;
use pete::resources::audio::{setup_audio, shutdown_audio};
use pete::resources::debugmode::DebugMode;
use pete::resources::gameconfig::GameConfig;
use pete::resources::gamestate::{GameState, GameStates, NextGameState};
use pete::resources::input::InputState;
use pete::resources::rendertarget::RenderTarget;
use pete::resources::systemsstore::SystemsStore;
use pete::resources::texturestore::TextureStore;
use pete::resources::tilemapstore::TilemapStore;
use pete::resources::worldsignals::{self, WorldSignals};
use pete::resources::worldtime::WorldTime;
use pete::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use pete::systems::gamestate::{check_pending_state, state_is_loading};
use pete::systems::input::update_input_state;
use pete::systems::loading::load_next_asset;
use pete::systems::render::render_system;
use pete::systems::time::update_world_time;

/// Pete, the acorn-collecting squirrel.
#[derive(Parser)]
#[command(version, about = "A small tile-based platformer.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Level file to play, overriding the configuration.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }
    info!("Starting Pete with level {}", config.level_path.display());

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Pete");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC is handled as an input action, not a window close.
    rl.set_exit_key(None);

    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(TilemapStore::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());

    // Must go before the state hooks run: they write audio messages.
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(observe_gamestate_change_event);
    world.add_observer(switch_debug_observer);
    world.add_observer(jump_sound_observer);
    world.add_observer(pickup_collected_observer);

    let mut systems_store = SystemsStore::new();
    systems_store.insert(ENTER_LOADING, world.register_system(game::enter_loading));
    systems_store.insert(ENTER_PLAY, world.register_system(game::enter_play));
    systems_store.insert(QUIT_GAME, world.register_system(game::quit_game));
    world.insert_resource(systems_store);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Loading);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems((update_input_state, check_pending_state).chain());
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(check_pending_state),
    );
    update.add_systems(
        load_next_asset
            .run_if(state_is_loading)
            .after(check_pending_state),
    );

    let mut frame = game::frame_schedule();
    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag(worldsignals::QUIT_GAME)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
        frame.run(&mut world);
        render.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
    info!("Bye");
}
