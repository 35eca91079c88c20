//! Wires every cinderworks_server module into a bevy [`App`].

use bevy::prelude::*;

use crate::{crafting, items, ore_dictionary};

/// Seeds game content & generates the machines' recipes during loading.
///
/// Requires
/// [`CinderworksCorePlugin`](cinderworks_core::plugin::CinderworksCorePlugin)
/// to have been added first.
#[derive(Default)]
pub struct CinderworksServerPlugin;

impl Plugin for CinderworksServerPlugin {
    fn build(&self, app: &mut App) {
        items::register(app);
        ore_dictionary::register(app);
        crafting::register(app);
    }
}
