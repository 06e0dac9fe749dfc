//! Pickup collection notification and its observer.
use crate::events::audio::AudioCmd;
use crate::resources::worldsignals::{ACORNS_COLLECTED, WorldSignals};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

/// Sound effect id played when an acorn is picked up.
pub const ACORN_FX: &str = "acorn";

/// Fired once per collected pickup. `entity` is already despawned (or about
/// to be) when observers run; `position` is where it was.
#[derive(Event, Debug, Clone, Copy)]
pub struct PickupCollectedEvent {
    pub entity: Entity,
    pub position: Vector2,
}

/// Play the acorn sound and bump the collected counter.
pub fn pickup_collected_observer(
    trigger: On<PickupCollectedEvent>,
    mut signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let total = signals.increment(ACORNS_COLLECTED, 1);
    info!(
        "Acorn collected at ({}, {}), total {}",
        event.position.x, event.position.y, total
    );
    audio.write(AudioCmd::PlayFx {
        id: ACORN_FX.to_string(),
    });
}
