//! Machine recipe registries & the keys they are looked up by.

use bevy::prelude::App;

pub mod item_key;
pub mod recipes;

pub(crate) fn register(app: &mut App) {
    recipes::register(app);
}
