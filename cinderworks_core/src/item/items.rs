//! The base item set this mod ships.

use bevy::prelude::*;

use crate::registry::Registry;
use crate::state::GameState;

use super::{DEFAULT_MAX_STACK_SIZE, Item};

fn add_cinderworks_items(mut items: ResMut<Registry<Item>>) {
    let item_ids = [
        "iron_ore",
        "iron_dust",
        "iron_ingot",
        "iron_cluster",
        "copper_ore",
        "copper_dust",
        "copper_ingot",
        // Another mod's take on the same metal. The ore dictionary folds it
        // into cinderworks:copper_ingot during recipe import.
        "rustic_copper_ingot",
        "oak_log",
        "charcoal",
        "sand",
        "glass",
        "raw_beef",
        "cooked_beef",
        "raw_potato",
        "baked_potato",
        "bread",
    ];

    for id in item_ids {
        items.register(Item::new(format!("cinderworks:{id}"), DEFAULT_MAX_STACK_SIZE));
    }
}

pub(super) fn register(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), add_cinderworks_items);
}
