//! Rendering.
//!
//! Everything is drawn into the fixed-resolution [`RenderTarget`], which is
//! then scaled into the window with letterboxing. World space is y-up with
//! the origin at the bottom-left of the level; [`Camera2DRes::to_screen`]
//! flips boxes into raylib's y-down pixels.
//!
//! Draw order while playing: tiles, acorns, Pete, then the debug overlay.
//! A sprite whose texture is missing is drawn as a flat rectangle in its
//! placeholder colour.

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::mover::Mover;
use crate::components::pickup::Pickup;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::assetqueue::AssetQueue;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldsignals::{ACORNS_COLLECTED, WorldSignals};

/// Texture key of the tile sheet. Tile id `n` is the `n`-th cell of the
/// sheet, read left to right and top to bottom.
pub const TILES_TEXTURE: &str = "tiles";

const SKY: Color = Color::new(99, 155, 255, 255);
const TILE_PLACEHOLDER: Color = Color::new(120, 84, 48, 255);
const LOADING_BAR_WIDTH: f32 = 100.0;
const LOADING_BAR_HEIGHT: f32 = 25.0;

/// Frame rectangle of the loading bar, centred in a `view_w` by `view_h`
/// view, and the width of its filled part.
pub fn loading_bar(progress: f32, view_w: f32, view_h: f32) -> (Rectangle, f32) {
    let frame = Rectangle {
        x: (view_w - LOADING_BAR_WIDTH) / 2.0,
        y: (view_h - LOADING_BAR_HEIGHT) / 2.0,
        width: LOADING_BAR_WIDTH,
        height: LOADING_BAR_HEIGHT,
    };
    (frame, progress.clamp(0.0, 1.0) * LOADING_BAR_WIDTH)
}

/// Source rectangle of tile `id` in a sheet `sheet_width` pixels wide.
pub fn tile_source(id: u32, tile_size: f32, sheet_width: i32) -> Rectangle {
    let columns = ((sheet_width as f32 / tile_size) as u32).max(1);
    Rectangle {
        x: (id % columns) as f32 * tile_size,
        y: (id / columns) as f32 * tile_size,
        width: tile_size,
        height: tile_size,
    }
}

fn draw_sprite<D: RaylibDraw>(
    d: &mut D,
    textures: &TextureStore,
    sprite: &Sprite,
    screen: Vector2,
) {
    let dest = Rectangle {
        x: screen.x,
        y: screen.y,
        width: sprite.width,
        height: sprite.height,
    };
    match textures.get(&sprite.tex_key) {
        Some(tex) => {
            // Negative source width mirrors the frame in place.
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: if sprite.flip_h {
                    -sprite.width
                } else {
                    sprite.width
                },
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
        None => d.draw_rectangle_rec(dest, sprite.placeholder),
    }
}

/// Draw the current frame: the loading bar while loading, the level while
/// playing.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    state: Res<GameState>,
    queue: Option<Res<AssetQueue>>,
    camera: Option<Res<Camera2DRes>>,
    grid: Option<Res<TileGrid>>,
    debug: Option<Res<DebugMode>>,
    signals: Res<WorldSignals>,
    players: Query<(&Mover, &Sprite), With<Player>>,
    pickups: Query<(&Pickup, &Sprite)>,
) {
    let view_w = target.game_width as f32;
    let view_h = target.game_height as f32;
    let fps = rl.get_fps();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(SKY);

        match state.get() {
            GameStates::Loading => {
                let progress = queue.as_ref().map_or(0.0, |q| q.progress());
                let (frame, filled) = loading_bar(progress, view_w, view_h);
                t.draw_rectangle_rec(
                    Rectangle {
                        width: filled,
                        ..frame
                    },
                    Color::WHITE,
                );
                t.draw_rectangle_lines_ex(frame, 1.0, Color::WHITE);
            }
            GameStates::Playing => {
                if let (Some(camera), Some(grid)) = (camera.as_ref(), grid.as_ref()) {
                    let size = grid.cell_size();
                    let sheet = textures.get(TILES_TEXTURE);
                    for (cx, cy, id) in grid.solid_cells() {
                        let world_x = cx as f32 * size;
                        let world_y = cy as f32 * size;
                        let p = camera.to_screen(world_x, world_y, size, view_w, view_h);
                        if p.x + size < 0.0 || p.x > view_w {
                            continue;
                        }
                        let dest = Rectangle {
                            x: p.x,
                            y: p.y,
                            width: size,
                            height: size,
                        };
                        match sheet {
                            Some(tex) => t.draw_texture_pro(
                                tex,
                                tile_source(id, size, tex.width),
                                dest,
                                Vector2::zero(),
                                0.0,
                                Color::WHITE,
                            ),
                            None => t.draw_rectangle_rec(dest, TILE_PLACEHOLDER),
                        }
                    }

                    for (pickup, sprite) in pickups.iter() {
                        let b = pickup.bounds();
                        let p = camera.to_screen(b.x, b.y, b.height, view_w, view_h);
                        draw_sprite(&mut t, &textures, sprite, p);
                    }

                    for (mover, sprite) in players.iter() {
                        let p = camera.to_screen(
                            mover.x(),
                            mover.y(),
                            mover.height(),
                            view_w,
                            view_h,
                        );
                        draw_sprite(&mut t, &textures, sprite, p);
                    }

                    if debug.is_some() {
                        for (mover, _) in players.iter() {
                            let b = mover.bounds();
                            let p = camera.to_screen(b.x, b.y, b.height, view_w, view_h);
                            t.draw_rectangle_lines_ex(
                                Rectangle {
                                    x: p.x,
                                    y: p.y,
                                    width: b.width,
                                    height: b.height,
                                },
                                1.0,
                                Color::RED,
                            );
                        }
                        let text = format!(
                            "cam x {:.1} | acorns {} | fps {}",
                            camera.0.target.x,
                            signals.get_integer(ACORNS_COLLECTED).unwrap_or(0),
                            fps
                        );
                        t.draw_text(&text, 4, 4, 10, Color::BLACK);
                    }
                }
            }
            GameStates::None | GameStates::Quitting => {}
        }
    }

    let dest = target.letterbox(d.get_screen_width(), d.get_screen_height());
    unsafe {
        ffi::DrawTexturePro(
            target.texture.texture,
            target.source_rect().into(),
            dest.into(),
            Vector2::zero().into(),
            0.0,
            Color::WHITE.into(),
        );
    }
}
