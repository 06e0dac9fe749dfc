//! Collectable acorns.

use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Width and height of an acorn.
pub const PICKUP_SIZE: f32 = 16.0;

/// A static collectable. Its bounding box is computed once at spawn time.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Pickup {
    bounds: Rect,
}

impl Pickup {
    /// Create an acorn with its bottom-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
