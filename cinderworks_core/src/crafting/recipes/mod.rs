//! Recipe tables for the machines this mod adds.

use bevy::prelude::App;

pub mod furnace;
pub mod smelting;

pub(super) fn register(app: &mut App) {
    smelting::register(app);
    furnace::register(app);
}
