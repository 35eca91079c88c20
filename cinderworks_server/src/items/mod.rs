//! Server-side item content registration.

use bevy::prelude::App;

mod categories;

pub(crate) fn register(app: &mut App) {
    categories::register(app);
}
