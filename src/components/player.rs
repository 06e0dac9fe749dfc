//! Player tag component and Pete's fixed dimensions and speeds.

use bevy_ecs::prelude::Component;

/// Width of Pete's bounding box and sprite frame.
pub const PLAYER_WIDTH: f32 = 16.0;
/// Height of Pete's bounding box and sprite frame.
pub const PLAYER_HEIGHT: f32 = 15.0;
/// Horizontal speed in world units per step.
pub const PLAYER_RUN_SPEED: f32 = 2.0;
/// Vertical speed in world units per step, used both climbing and falling.
pub const PLAYER_JUMP_SPEED: f32 = 2.0;
/// Highest climb of a single jump.
pub const PLAYER_MAX_JUMP_DISTANCE: f32 = 3.0 * PLAYER_HEIGHT;

/// Tag for the entity controlled by the player.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
