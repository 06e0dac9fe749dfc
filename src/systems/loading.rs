//! Loading screen.
//!
//! [`load_next_asset`] takes one job from the [`AssetQueue`] per frame so the
//! progress bar is redrawn between jobs. When the queue is empty the game
//! moves on to Playing.
//!
//! A level that cannot be read is fatal and requests Quitting. Textures and
//! sounds are optional: a missing texture is logged and drawn as a
//! placeholder, and sound failures come back from the audio thread.

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use raylib::prelude::{RaylibHandle, RaylibThread};
use std::path::Path;

use crate::events::audio::AudioCmd;
use crate::resources::assetqueue::{AssetJob, AssetQueue};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::texturestore::TextureStore;
use crate::resources::tilegrid::TileGrid;
use crate::resources::tilemap::Tilemap;
use crate::resources::tilemapstore::{CURRENT_LEVEL, TilemapStore};

/// Index of the tile layer used for collision.
pub const COLLISION_LAYER: usize = 0;

/// Read a level and build its collision grid.
pub fn load_level(path: &Path) -> Result<(Tilemap, TileGrid), String> {
    let tilemap = Tilemap::load_from_file(path)?;
    let grid = TileGrid::from_tilemap(&tilemap, COLLISION_LAYER);
    info!(
        "Loaded level {}: {}x{} cells of {} units, {} solid",
        path.display(),
        grid.width(),
        grid.height(),
        tilemap.tile_size,
        grid.solid_cells().count()
    );
    Ok((tilemap, grid))
}

/// Process at most one pending asset job.
///
/// Textures need the raylib handle; without one (headless runs) texture jobs
/// are skipped with a warning.
pub fn load_next_asset(
    mut queue: ResMut<AssetQueue>,
    mut tilemaps: ResMut<TilemapStore>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
    rl: Option<NonSendMut<RaylibHandle>>,
    th: Option<NonSend<RaylibThread>>,
    textures: Option<NonSendMut<TextureStore>>,
) {
    let Some(job) = queue.next_job() else {
        info!("All assets loaded");
        next_state.set(GameStates::Playing);
        return;
    };

    match job {
        AssetJob::Level { path } => match load_level(&path) {
            Ok((tilemap, grid)) => {
                commands.insert_resource(grid);
                tilemaps.insert(CURRENT_LEVEL, tilemap);
            }
            Err(e) => {
                error!("{}", e);
                next_state.set(GameStates::Quitting);
            }
        },
        AssetJob::Texture { key, path } => match (rl, th, textures) {
            (Some(mut rl), Some(th), Some(mut textures)) => {
                match rl.load_texture(&th, &path.to_string_lossy()) {
                    Ok(texture) => textures.insert(key, texture),
                    Err(e) => warn!(
                        "Texture '{}' unavailable ({}): {}",
                        key,
                        path.display(),
                        e
                    ),
                }
            }
            _ => warn!("No renderer, skipping texture '{}'", key),
        },
        AssetJob::Music { id, path } => {
            audio.write(AudioCmd::LoadMusic {
                id,
                path: path.to_string_lossy().into_owned(),
            });
        }
        AssetJob::Fx { id, path } => {
            audio.write(AudioCmd::LoadFx {
                id,
                path: path.to_string_lossy().into_owned(),
            });
        }
    }
}
