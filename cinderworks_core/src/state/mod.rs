//! Loading-state logic shared by everything that registers content.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Represents the state of the game.
///
/// Content registration is staged: registries exist by the end of
/// `PreLoading`, items by the end of `Loading`, and everything derived from
/// them (categories, ore dictionary entries, generated recipes) during
/// `PostLoading`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Copy, Default, States)]
pub enum GameState {
    #[default]
    /// Bevy startup
    Startup,
    /// Initial resources are created
    PreLoading,
    /// Resources are filled out
    Loading,
    /// Everything that needs to happen based on those filled out resources
    PostLoading,
    /// Playing the game
    Playing,
}

// One state per frame, so every OnEnter/OnExit hook of a stage runs before
// the next stage begins.
fn advance_loading_state(state: Res<State<GameState>>, mut next_state: ResMut<NextState<GameState>>) {
    let next = match state.get() {
        GameState::Startup => GameState::PreLoading,
        GameState::PreLoading => GameState::Loading,
        GameState::Loading => GameState::PostLoading,
        GameState::PostLoading => GameState::Playing,
        GameState::Playing => return,
    };
    next_state.set(next);
}

pub(crate) fn register(app: &mut App) {
    if !app.is_plugin_added::<StatesPlugin>() {
        app.add_plugins(StatesPlugin);
    }

    app.init_state::<GameState>().add_systems(Update, advance_loading_state);
}
