//! Horizontal camera follow.
//!
//! The camera recentres on the player's X while the player is more than half
//! a viewport from both level edges. Near the edges the camera stays put, so
//! the view never shows past the level. There is no vertical follow.

use bevy_ecs::prelude::*;

use crate::components::mover::Mover;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::tilegrid::TileGrid;

/// New camera X for a player at `player_x`, or `None` to keep it.
pub fn follow_x(player_x: f32, view_width: f32, level_width: f32) -> Option<f32> {
    let half = view_width / 2.0;
    if player_x > half && player_x < level_width - half {
        Some(player_x)
    } else {
        None
    }
}

pub fn camera_follow(
    players: Query<&Mover, With<Player>>,
    camera: Option<ResMut<Camera2DRes>>,
    config: Res<GameConfig>,
    grid: Option<Res<TileGrid>>,
) {
    let (Some(mut camera), Some(grid)) = (camera, grid) else {
        return;
    };
    let Some(mover) = players.iter().next() else {
        return;
    };
    if let Some(x) = follow_x(mover.x(), config.render_width as f32, grid.level_width()) {
        camera.0.target.x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_only_away_from_edges() {
        assert_eq!(follow_x(100.0, 320.0, 960.0), None);
        assert_eq!(follow_x(160.0, 320.0, 960.0), None);
        assert_eq!(follow_x(161.0, 320.0, 960.0), Some(161.0));
        assert_eq!(follow_x(799.0, 320.0, 960.0), Some(799.0));
        assert_eq!(follow_x(800.0, 320.0, 960.0), None);
    }

    #[test]
    fn level_narrower_than_view_never_follows() {
        assert_eq!(follow_x(100.0, 320.0, 200.0), None);
    }
}
