//! Debug overlay toggle.
//!
//! While this resource exists the renderer outlines every solid cell, the
//! player's box and the pickups, and prints the player position.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
