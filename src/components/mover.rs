//! Position and bounding box of an entity that collides with the tile grid.
//!
//! [`Mover`] keeps its position and its world-space bounding box together.
//! Fields are private so the box can only change through the setters, which
//! re-derive it in the same call. Any collision query that reads
//! [`Mover::bounds`] therefore sees the current position.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::geometry::Rect;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    position: Vector2,
    size: Vector2,
    bounds: Rect,
}

impl Mover {
    /// Create a mover with its bottom-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            size: Vector2 {
                x: width,
                y: height,
            },
            bounds: Rect::new(x, y, width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bounding box at the current position.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move to `(x, y)` and re-derive the bounding box.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vector2 { x, y };
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn set_x(&mut self, x: f32) {
        self.set_position(x, self.position.y);
    }

    pub fn set_y(&mut self, y: f32) {
        self.set_position(self.position.x, y);
    }

    /// Offset the position by `(dx, dy)`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.set_position(self.position.x + dx, self.position.y + dy);
    }
}
