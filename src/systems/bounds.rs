//! Keep movers inside the level.
//!
//! Horizontally the mover is clamped to `[0, level_width - width]`. The
//! world floor is `y = 0`: a mover below it is snapped back up and lands.

use bevy_ecs::prelude::*;

use crate::components::jumper::Jumper;
use crate::components::mover::Mover;
use crate::components::rigidbody::RigidBody;
use crate::geometry::clamp;
use crate::resources::tilegrid::TileGrid;
use crate::systems::movement::landed;

/// Clamp `mover` into the level. Returns true if it hit the world floor.
pub fn keep_inside_level(mover: &mut Mover, level_width: f32) -> bool {
    let mut hit_floor = false;
    if mover.y() < 0.0 {
        mover.set_y(0.0);
        hit_floor = true;
    }
    let x = clamp(mover.x(), 0.0, level_width - mover.width());
    mover.set_x(x);
    hit_floor
}

pub fn level_bounds(
    mut query: Query<(&mut Mover, &mut RigidBody, Option<&mut Jumper>)>,
    grid: Option<Res<TileGrid>>,
) {
    let Some(grid) = grid else {
        return;
    };
    let level_width = grid.level_width();
    for (mut mover, mut body, jumper) in query.iter_mut() {
        if keep_inside_level(&mut mover, level_width) {
            landed(&mut body, jumper.map(|j| j.into_inner()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_sides() {
        let mut m = Mover::new(-3.0, 10.0, 16.0, 15.0);
        assert!(!keep_inside_level(&mut m, 160.0));
        assert_eq!(m.x(), 0.0);

        m.set_x(150.0);
        keep_inside_level(&mut m, 160.0);
        assert_eq!(m.x(), 144.0);
        assert_eq!(m.bounds().right(), 160.0);
    }

    #[test]
    fn below_floor_snaps_up_and_reports_landing() {
        let mut m = Mover::new(20.0, -2.0, 16.0, 15.0);
        assert!(keep_inside_level(&mut m, 160.0));
        assert_eq!(m.y(), 0.0);
        assert_eq!(m.bounds().y, 0.0);
    }

    #[test]
    fn standing_on_floor_is_not_a_new_landing() {
        let mut m = Mover::new(20.0, 0.0, 16.0, 15.0);
        assert!(!keep_inside_level(&mut m, 160.0));
    }
}
