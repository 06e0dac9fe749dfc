//! Shared 2D camera resource.
//!
//! Wraps raylib's [`Camera2D`]. Only `target` is meaningful here: it is the
//! world point (y-up) shown at the centre of the view. The renderer projects
//! world coordinates by hand instead of using raylib's y-down camera mode.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centred on `(x, y)` for a view of `view_w` by `view_h` units.
    pub fn centered(x: f32, y: f32, view_w: f32, view_h: f32) -> Self {
        Camera2DRes(Camera2D {
            target: Vector2 { x, y },
            offset: Vector2 {
                x: view_w / 2.0,
                y: view_h / 2.0,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    /// World x of the left edge of the view.
    pub fn left(&self, view_w: f32) -> f32 {
        self.0.target.x - view_w / 2.0
    }

    /// World y of the bottom edge of the view.
    pub fn bottom(&self, view_h: f32) -> f32 {
        self.0.target.y - view_h / 2.0
    }

    /// Project a world-space box to render-target pixels (y-down).
    pub fn to_screen(&self, x: f32, y: f32, h: f32, view_w: f32, view_h: f32) -> Vector2 {
        Vector2 {
            x: x - self.left(view_w),
            y: view_h - (y - self.bottom(view_h)) - h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_with_y_flipped() {
        let cam = Camera2DRes::centered(160.0, 120.0, 320.0, 240.0);
        let p = cam.to_screen(0.0, 0.0, 16.0, 320.0, 240.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 224.0);
        let top = cam.to_screen(10.0, 224.0, 16.0, 320.0, 240.0);
        assert_eq!(top.y, 0.0);
    }

    #[test]
    fn scrolled_camera_shifts_x() {
        let cam = Camera2DRes::centered(400.0, 120.0, 320.0, 240.0);
        assert_eq!(cam.left(320.0), 240.0);
        assert_eq!(cam.to_screen(250.0, 0.0, 16.0, 320.0, 240.0).x, 10.0);
    }
}
