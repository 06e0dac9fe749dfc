//! Input-driven motion.
//!
//! [`step`] turns the player's input into a per-step velocity and adds it to
//! the position. The simulation is frame-locked: one call is one step, and
//! speeds are in world units per step.
//!
//! - Horizontal speed is binary: full right, full left, or zero.
//! - Holding jump climbs at constant speed until the accumulated height
//!   passes the jumper's maximum, after which the jump is blocked.
//! - Otherwise the entity falls at constant speed. The block stays on until
//!   [`landed`] resets the jump.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::inputcontrolled::InputControlled;
use crate::components::jumper::Jumper;
use crate::components::mover::Mover;
use crate::components::rigidbody::RigidBody;
use crate::events::jump::JumpStartedEvent;
use crate::resources::input::{InputState, MotionInput};

/// Advance one step. Returns true when this step started a jump.
pub fn step(
    mover: &mut Mover,
    body: &mut RigidBody,
    jumper: &mut Jumper,
    controls: &InputControlled,
    input: MotionInput,
) -> bool {
    body.velocity.x = if input.right {
        controls.run_speed
    } else if input.left {
        -controls.run_speed
    } else {
        0.0
    };

    let mut jump_started = false;
    if input.jump && !jumper.blocked {
        if body.velocity.y != controls.jump_speed {
            jump_started = true;
        }
        body.velocity.y = controls.jump_speed;
        jumper.distance += body.velocity.y;
        jumper.blocked = jumper.distance > jumper.max_distance;
    } else {
        body.velocity.y = -controls.fall_speed;
        jumper.blocked = jumper.distance > 0.0;
    }

    mover.translate(body.velocity.x, body.velocity.y);
    jump_started
}

/// Reset the jump and stop vertical motion after touching the ground.
pub fn landed(body: &mut RigidBody, jumper: Option<&mut Jumper>) {
    if let Some(jumper) = jumper {
        jumper.land();
    }
    body.stop_vertical();
}

/// Apply [`step`] to every input-controlled mover.
pub fn movement(
    mut query: Query<(
        Entity,
        &mut Mover,
        &mut RigidBody,
        &mut Jumper,
        &InputControlled,
    )>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    let motion = input.motion();
    for (entity, mut mover, mut body, mut jumper, controls) in query.iter_mut() {
        if step(&mut mover, &mut body, &mut jumper, controls, motion) {
            debug!("Jump started by {:?}", entity);
            commands.trigger(JumpStartedEvent { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pete() -> (Mover, RigidBody, Jumper, InputControlled) {
        (
            Mover::new(0.0, 0.0, 16.0, 15.0),
            RigidBody::new(),
            Jumper::new(45.0),
            InputControlled::new(2.0, 2.0, 2.0),
        )
    }

    fn input(left: bool, right: bool, jump: bool) -> MotionInput {
        MotionInput { left, right, jump }
    }

    #[test]
    fn horizontal_speed_is_binary() {
        let (mut m, mut b, mut j, c) = pete();
        step(&mut m, &mut b, &mut j, &c, input(false, true, false));
        assert_eq!(b.velocity.x, 2.0);
        assert_eq!(m.x(), 2.0);
        step(&mut m, &mut b, &mut j, &c, input(true, false, false));
        assert_eq!(b.velocity.x, -2.0);
        assert_eq!(m.x(), 0.0);
        step(&mut m, &mut b, &mut j, &c, input(false, false, false));
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn right_wins_over_left() {
        let (mut m, mut b, mut j, c) = pete();
        step(&mut m, &mut b, &mut j, &c, input(true, true, false));
        assert_eq!(b.velocity.x, 2.0);
    }

    #[test]
    fn falls_at_constant_speed_without_jump() {
        let (mut m, mut b, mut j, c) = pete();
        m.set_y(100.0);
        for _ in 0..3 {
            step(&mut m, &mut b, &mut j, &c, input(false, false, false));
            assert_eq!(b.velocity.y, -2.0);
        }
        assert_eq!(m.y(), 94.0);
    }

    #[test]
    fn jump_reports_start_once() {
        let (mut m, mut b, mut j, c) = pete();
        assert!(step(&mut m, &mut b, &mut j, &c, input(false, false, true)));
        assert!(!step(&mut m, &mut b, &mut j, &c, input(false, false, true)));
        assert_eq!(j.distance, 4.0);
        assert_eq!(m.y(), 4.0);
    }

    #[test]
    fn jump_blocks_after_max_distance_until_landing() {
        let (mut m, mut b, mut j, c) = pete();
        // 23 steps of 2 units pass 45.
        for _ in 0..23 {
            step(&mut m, &mut b, &mut j, &c, input(false, false, true));
        }
        assert!(j.blocked);
        assert_eq!(j.distance, 46.0);

        step(&mut m, &mut b, &mut j, &c, input(false, false, true));
        assert_eq!(b.velocity.y, -2.0);
        assert!(j.blocked);

        // Releasing jump mid-air keeps the block while distance is positive.
        step(&mut m, &mut b, &mut j, &c, input(false, false, false));
        assert!(j.blocked);

        landed(&mut b, Some(&mut j));
        assert!(!j.blocked);
        assert_eq!(j.distance, 0.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn released_jump_cannot_restart_in_mid_air() {
        let (mut m, mut b, mut j, c) = pete();
        step(&mut m, &mut b, &mut j, &c, input(false, false, true));
        step(&mut m, &mut b, &mut j, &c, input(false, false, false));
        assert!(j.blocked);
        step(&mut m, &mut b, &mut j, &c, input(false, false, true));
        assert_eq!(b.velocity.y, -2.0);
    }
}
