use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Sprite is identified by a texture key, its size in world units and an
/// offset into the texture when it is a spritesheet.
///
/// When the texture is not loaded the renderer draws a `placeholder`
/// coloured rectangle of the same size instead.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub flip_h: bool,
    pub placeholder: Color,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32, placeholder: Color) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
            placeholder,
        }
    }
}
