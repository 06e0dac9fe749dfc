//! Game flow: state hooks and the per-frame simulation schedule.
//!
//! The hooks here are registered in [`crate::resources::systemsstore::SystemsStore`]
//! and run by the state-change observer:
//! - [`enter_loading`] queues every asset the game needs
//! - [`enter_play`] spawns Pete and the acorns, centres the camera and starts
//!   the music
//! - [`quit_game`] raises the flag the main loop exits on

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Color;
use std::path::PathBuf;

use crate::components::animation::PoseAnimation;
use crate::components::inputcontrolled::InputControlled;
use crate::components::jumper::Jumper;
use crate::components::mover::Mover;
use crate::components::pickup::{PICKUP_SIZE, Pickup};
use crate::components::player::{
    PLAYER_HEIGHT, PLAYER_JUMP_SPEED, PLAYER_MAX_JUMP_DISTANCE, PLAYER_RUN_SPEED, PLAYER_WIDTH,
    Player,
};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::jump::JUMP_FX;
use crate::events::pickup::ACORN_FX;
use crate::resources::assetqueue::{AssetJob, AssetQueue};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::tilemapstore::{CURRENT_LEVEL, TilemapStore};
use crate::resources::worldsignals::{ACORNS_COLLECTED, QUIT_GAME, WorldSignals};
use crate::systems::animation::pose_animation;
use crate::systems::bounds::level_bounds;
use crate::systems::camera::camera_follow;
use crate::systems::collision::tile_collision;
use crate::systems::gamestate::state_is_playing;
use crate::systems::movement::movement;
use crate::systems::pickup::collect_pickups;
use crate::systems::render::TILES_TEXTURE;

pub const PETE_TEXTURE: &str = "pete";
pub const ACORN_TEXTURE: &str = "acorn";
pub const THEME_MUSIC: &str = "theme";
/// Object layer the acorns are spawned from.
pub const COLLECTABLES_LAYER: &str = "Collectables";

const PETE_PLACEHOLDER: Color = Color::new(230, 120, 40, 255);
const ACORN_PLACEHOLDER: Color = Color::new(150, 90, 30, 255);

/// Asset jobs for a level, in loading order.
pub fn asset_jobs(level_path: PathBuf) -> Vec<AssetJob> {
    vec![
        AssetJob::Level { path: level_path },
        AssetJob::Texture {
            key: PETE_TEXTURE.into(),
            path: "./assets/textures/pete.png".into(),
        },
        AssetJob::Texture {
            key: ACORN_TEXTURE.into(),
            path: "./assets/textures/acorn.png".into(),
        },
        AssetJob::Texture {
            key: TILES_TEXTURE.into(),
            path: "./assets/textures/tiles.png".into(),
        },
        AssetJob::Fx {
            id: JUMP_FX.into(),
            path: "./assets/audio/jump.wav".into(),
        },
        AssetJob::Fx {
            id: ACORN_FX.into(),
            path: "./assets/audio/acorn.wav".into(),
        },
        AssetJob::Music {
            id: THEME_MUSIC.into(),
            path: "./assets/audio/peteTheme.mp3".into(),
        },
    ]
}

pub fn enter_loading(mut commands: Commands, config: Res<GameConfig>) {
    let mut queue = AssetQueue::new();
    for job in asset_jobs(config.level_path.clone()) {
        queue.push(job);
    }
    commands.insert_resource(queue);
}

pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    tilemaps: Res<TilemapStore>,
    mut signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let view_w = config.render_width as f32;
    let view_h = config.render_height as f32;
    commands.insert_resource(Camera2DRes::centered(
        view_w / 2.0,
        view_h / 2.0,
        view_w,
        view_h,
    ));

    commands.spawn((
        Player,
        Mover::new(0.0, view_h / 2.0, PLAYER_WIDTH, PLAYER_HEIGHT),
        RigidBody::new(),
        Jumper::new(PLAYER_MAX_JUMP_DISTANCE),
        InputControlled::new(PLAYER_RUN_SPEED, PLAYER_JUMP_SPEED, PLAYER_JUMP_SPEED),
        PoseAnimation::new(),
        Sprite::new(PETE_TEXTURE, PLAYER_WIDTH, PLAYER_HEIGHT, PETE_PLACEHOLDER),
    ));
    signals.set_integer(ACORNS_COLLECTED, 0);

    match tilemaps.get(CURRENT_LEVEL) {
        Some(tilemap) => {
            let objects = tilemap.objects(COLLECTABLES_LAYER);
            for object in objects {
                commands.spawn((
                    Pickup::new(object.x, object.y),
                    Sprite::new(ACORN_TEXTURE, PICKUP_SIZE, PICKUP_SIZE, ACORN_PLACEHOLDER),
                ));
            }
            info!("Spawned {} acorns", objects.len());
        }
        None => warn!("No level loaded, playing without acorns"),
    }

    audio.write(AudioCmd::PlayMusic {
        id: THEME_MUSIC.into(),
        looped: true,
    });
}

pub fn quit_game(mut signals: ResMut<WorldSignals>, mut audio: MessageWriter<AudioCmd>) {
    info!("Quitting");
    audio.write(AudioCmd::StopMusic {
        id: THEME_MUSIC.into(),
    });
    signals.set_flag(QUIT_GAME);
}

/// One simulation step, in the fixed order: motion, level bounds, tile
/// collision, pickups, camera, pose.
///
/// Nothing runs unless the game is in [`crate::resources::gamestate::GameStates::Playing`].
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            movement,
            level_bounds,
            tile_collision,
            collect_pickups,
            camera_follow,
            pose_animation,
        )
            .chain()
            .run_if(state_is_playing),
    );
    schedule
}
