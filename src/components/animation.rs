//! Pose-based sprite animation for the player.
//!
//! The player sheet is one row of four frames: standing, step, jump-up and
//! jump-down. Walking alternates between the standing and step frames.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Seconds each walking frame stays on screen.
pub const WALK_FRAME_DURATION: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Standing,
    Walking,
    JumpUp,
    JumpDown,
}

impl Pose {
    /// Pick a pose from the current per-step velocity.
    ///
    /// Horizontal motion wins over vertical motion.
    pub fn from_velocity(velocity: Vector2) -> Self {
        if velocity.x != 0.0 {
            Pose::Walking
        } else if velocity.y > 0.0 {
            Pose::JumpUp
        } else if velocity.y < 0.0 {
            Pose::JumpDown
        } else {
            Pose::Standing
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseAnimation {
    pub pose: Pose,
    /// Seconds since the animation was created. Drives the walk cycle.
    pub elapsed: f32,
    /// Last horizontal direction was left. The sprite is drawn mirrored.
    pub facing_left: bool,
}

impl PoseAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and pick the pose and facing for `velocity`.
    ///
    /// Facing only changes while moving horizontally.
    pub fn update(&mut self, velocity: Vector2, delta: f32) {
        self.elapsed += delta;
        self.pose = Pose::from_velocity(velocity);
        if velocity.x < 0.0 {
            self.facing_left = true;
        } else if velocity.x > 0.0 {
            self.facing_left = false;
        }
    }

    /// Column of the frame to draw in the player sheet.
    pub fn frame_index(&self) -> usize {
        match self.pose {
            Pose::Standing => 0,
            Pose::Walking => (self.elapsed / WALK_FRAME_DURATION) as usize % 2,
            Pose::JumpUp => 2,
            Pose::JumpDown => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_motion_selects_walking() {
        assert_eq!(Pose::from_velocity(Vector2 { x: 2.0, y: 2.0 }), Pose::Walking);
        assert_eq!(Pose::from_velocity(Vector2 { x: -2.0, y: 0.0 }), Pose::Walking);
    }

    #[test]
    fn vertical_motion_selects_jump_frames() {
        assert_eq!(Pose::from_velocity(Vector2 { x: 0.0, y: 2.0 }), Pose::JumpUp);
        assert_eq!(Pose::from_velocity(Vector2 { x: 0.0, y: -2.0 }), Pose::JumpDown);
        assert_eq!(Pose::from_velocity(Vector2 { x: 0.0, y: 0.0 }), Pose::Standing);
    }

    #[test]
    fn facing_survives_standing_still() {
        let mut anim = PoseAnimation::new();
        anim.update(Vector2 { x: -2.0, y: 0.0 }, 0.0);
        assert!(anim.facing_left);
        anim.update(Vector2 { x: 0.0, y: 0.0 }, 0.0);
        assert!(anim.facing_left);
        anim.update(Vector2 { x: 2.0, y: 0.0 }, 0.0);
        assert!(!anim.facing_left);
    }

    #[test]
    fn walk_cycle_alternates_frames() {
        let mut anim = PoseAnimation::new();
        anim.update(Vector2 { x: 2.0, y: 0.0 }, 0.1);
        assert_eq!(anim.frame_index(), 0);
        anim.update(Vector2 { x: 2.0, y: 0.0 }, 0.2);
        assert_eq!(anim.frame_index(), 1);
        anim.update(Vector2 { x: 2.0, y: 0.0 }, 0.25);
        assert_eq!(anim.frame_index(), 0);
    }
}
