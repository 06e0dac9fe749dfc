//! Input-controlled movement component.
//!
//! [`InputControlled`] stores the fixed speeds applied by
//! [`crate::systems::movement`] when the player presses left, right or jump.
//! Speeds are binary: full speed while a key is held, zero otherwise. There
//! is no acceleration ramp.

use bevy_ecs::prelude::Component;

/// Movement speeds driven by player input, in world units per step.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct InputControlled {
    /// Horizontal speed while left or right is held.
    pub run_speed: f32,
    /// Upward speed while jump is held and not blocked.
    pub jump_speed: f32,
    /// Downward speed otherwise. Falling does not accelerate.
    pub fall_speed: f32,
}

impl InputControlled {
    pub fn new(run_speed: f32, jump_speed: f32, fall_speed: f32) -> Self {
        Self {
            run_speed,
            jump_speed,
            fall_speed,
        }
    }
}
