//! Jump notification.
//!
//! [`JumpStartedEvent`] fires on the first step of a jump, never while the
//! jump is being held. The observer answers it with the jump sound.
use crate::events::audio::AudioCmd;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Sound effect id played when a jump starts.
pub const JUMP_FX: &str = "jump";

/// Fired when `entity` leaves the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpStartedEvent {
    pub entity: Entity,
}

pub fn jump_sound_observer(_trigger: On<JumpStartedEvent>, mut audio: MessageWriter<AudioCmd>) {
    audio.write(AudioCmd::PlayFx {
        id: JUMP_FX.to_string(),
    });
}
