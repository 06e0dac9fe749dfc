//! Kinematic body storing a per-step velocity.
//!
//! Velocity is expressed in world units per simulation step, not per second:
//! the simulation is frame-locked and [`crate::systems::movement`] adds it to
//! the position once per frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per step.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Stop vertical motion, keeping the horizontal speed.
    pub fn stop_vertical(&mut self) {
        self.velocity.y = 0.0;
    }
}
