//! Server-side recipe seeding, generation, and data-file loading.

use bevy::prelude::App;

pub mod recipes;

pub(crate) fn register(app: &mut App) {
    recipes::register(app);
}
