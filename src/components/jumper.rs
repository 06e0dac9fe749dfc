//! Jump bookkeeping for entities that can leave the ground.
//!
//! A jump climbs at constant speed while the jump input is held. The height
//! gained so far is accumulated in [`Jumper::distance`]; once it exceeds
//! [`Jumper::max_distance`] the jump is blocked until the entity lands.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Jumper {
    /// Height climbed since the last landing, in world units.
    pub distance: f32,
    /// Height after which the jump is cut off.
    pub max_distance: f32,
    /// While set, the jump input is ignored and the entity falls.
    pub blocked: bool,
}

impl Jumper {
    pub fn new(max_distance: f32) -> Self {
        Self {
            distance: 0.0,
            max_distance,
            blocked: false,
        }
    }

    /// Clear the jump state after touching the ground.
    pub fn land(&mut self) {
        self.blocked = false;
        self.distance = 0.0;
    }
}
