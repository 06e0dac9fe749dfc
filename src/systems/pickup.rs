//! Acorn collection.
//!
//! Every frame each live pickup is tested against the player's box. Those
//! that overlap are collected into a separate list first and then despawned,
//! so removal never happens while the pickup query is being walked. A
//! despawned pickup cannot be matched again, so each one fires
//! [`PickupCollectedEvent`] exactly once.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::mover::Mover;
use crate::components::pickup::Pickup;
use crate::components::player::Player;
use crate::events::pickup::PickupCollectedEvent;
use crate::geometry::Rect;

/// Entities among `pickups` whose box overlaps `bounds`, in input order.
pub fn overlapping_pickups<'a>(
    bounds: &Rect,
    pickups: impl IntoIterator<Item = (Entity, &'a Pickup)>,
) -> Vec<(Entity, Rect)> {
    pickups
        .into_iter()
        .filter(|(_, pickup)| bounds.overlaps(&pickup.bounds()))
        .map(|(entity, pickup)| (entity, pickup.bounds()))
        .collect()
}

pub fn collect_pickups(
    players: Query<&Mover, With<Player>>,
    pickups: Query<(Entity, &Pickup)>,
    mut commands: Commands,
) {
    for mover in players.iter() {
        for (entity, bounds) in overlapping_pickups(&mover.bounds(), pickups.iter()) {
            debug!("Pickup {:?} collected at ({}, {})", entity, bounds.x, bounds.y);
            commands.entity(entity).despawn();
            commands.trigger(PickupCollectedEvent {
                entity,
                position: Vector2 {
                    x: bounds.x,
                    y: bounds.y,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_overlapping_pickups_are_returned() {
        let mut world = World::new();
        let near = world.spawn(Pickup::new(10.0, 0.0)).id();
        world.spawn(Pickup::new(100.0, 0.0));
        world.spawn(Pickup::new(16.0, 20.0));

        let bounds = Rect::new(0.0, 0.0, 16.0, 15.0);
        let mut pickups = world.query::<(Entity, &Pickup)>();
        let hits = overlapping_pickups(&bounds, pickups.iter(&world));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, near);
        assert_eq!(hits[0].1, Pickup::new(10.0, 0.0).bounds());
    }
}
