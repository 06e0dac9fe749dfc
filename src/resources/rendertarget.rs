//! Fixed-resolution render target.
//!
//! The game draws into a texture at its internal resolution, which is then
//! scaled to fit the window with letterboxing. Point filtering keeps the
//! pixel art sharp.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// NonSend: `RenderTexture2D` holds GPU resources owned by the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
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
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle with negative height, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Destination rectangle inside a `window_w` by `window_h` window that
    /// keeps the aspect ratio and centres the picture.
    pub fn letterbox(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(self.game_width, self.game_height, window_w, window_h)
    }
}

pub fn letterbox(game_width: u32, game_height: u32, window_w: i32, window_h: i32) -> Rectangle {
    let game_w = game_width as f32;
    let game_h = game_height as f32;
    let window_w = window_w as f32;
    let window_h = window_h as f32;

    if window_w / window_h > game_w / game_h {
        // Wider window: bars on the sides.
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
