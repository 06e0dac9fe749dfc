//! Player pose animation.
//!
//! Picks the pose from the body's velocity each frame and points the sprite
//! at the matching frame of the player sheet, mirrored when facing left.

use bevy_ecs::prelude::*;

use crate::components::animation::PoseAnimation;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn pose_animation(
    mut query: Query<(&RigidBody, &mut PoseAnimation, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (body, mut anim, mut sprite) in query.iter_mut() {
        anim.update(body.velocity, time.delta);
        sprite.offset.x = anim.frame_index() as f32 * sprite.width;
        sprite.flip_h = anim.facing_left;
    }
}
