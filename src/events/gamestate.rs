//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter hook registered for the new state in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Hook run when entering [`GameStates::Loading`].
pub const ENTER_LOADING: &str = "enter_loading";
/// Hook run when entering [`GameStates::Playing`].
pub const ENTER_PLAY: &str = "enter_play";
/// Hook run when entering [`GameStates::Quitting`].
pub const QUIT_GAME: &str = "quit_game";

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// If [`NextGameState`] holds [`Pending`], the value is copied into
/// [`GameState`], the pending value is cleared and the enter hook for the
/// new state runs. [`Unchanged`] is a no-op.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    let Pending(new_state) = next_game_state.get().clone() else {
        debug!("No state change pending.");
        return;
    };
    let old_state = game_state.get().clone();
    if old_state == new_state {
        next_game_state.reset();
        return;
    }
    info!("Transitioning from {:?} to {:?}", old_state, new_state);
    game_state.set(new_state.clone());
    next_game_state.reset();
    on_state_enter(&new_state, &mut commands, &systems_store);
}

fn hook_for(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Loading => Some(ENTER_LOADING),
        GameStates::Playing => Some(ENTER_PLAY),
        GameStates::Quitting => Some(QUIT_GAME),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(name) = hook_for(state) else {
        return;
    };
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' system registered in SystemsStore", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::worldsignals::WorldSignals;

    fn mark_play(mut signals: ResMut<WorldSignals>) {
        signals.increment("entered_play", 1);
    }

    #[test]
    fn pending_state_runs_enter_hook_once() {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(WorldSignals::default());
        let id = world.register_system(mark_play);
        let mut store = SystemsStore::new();
        store.insert(ENTER_PLAY, id);
        world.insert_resource(store);
        world.add_observer(observe_gamestate_change_event);

        world.resource_mut::<NextGameState>().set(GameStates::Playing);
        world.trigger(GameStateChangedEvent {});
        world.flush();
        world.trigger(GameStateChangedEvent {});
        world.flush();

        assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
        assert_eq!(world.resource::<NextGameState>().get(), &Unchanged);
        assert_eq!(
            world
                .resource::<WorldSignals>()
                .get_integer("entered_play"),
            Some(1)
        );
    }

    #[test]
    fn missing_hook_still_changes_state() {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(SystemsStore::new());
        world.add_observer(observe_gamestate_change_event);

        world.resource_mut::<NextGameState>().set(GameStates::Quitting);
        world.trigger(GameStateChangedEvent {});
        world.flush();
        assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
    }
}
