//! Wires every cinderworks_core module into a bevy [`App`].

use bevy::prelude::*;

use crate::{crafting, item, ore_dictionary, state};

/// Adds the shared content registries & the loading-state machinery.
///
/// The server plugin expects this to have been added first.
#[derive(Default)]
pub struct CinderworksCorePlugin;

impl Plugin for CinderworksCorePlugin {
    fn build(&self, app: &mut App) {
        state::register(app);
        item::register(app);
        ore_dictionary::register(app);
        crafting::register(app);
    }
}
