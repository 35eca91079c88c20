//! Seeds the built-in smelting table with the base game's recipes.

use bevy::prelude::*;
use cinderworks_core::{
    crafting::recipes::smelting::SmeltingRecipes,
    inventory::itemstack::{ItemStack, Metadata},
    item::Item,
    registry::Registry,
    state::GameState,
};

fn seed_smelting_recipes(mut smelting: ResMut<SmeltingRecipes>, items: Res<Registry<Item>>) {
    let mut add = |input_id: &str, input_metadata: Metadata, output_id: &str| {
        let (Some(input), Some(output)) = (items.from_id(input_id), items.from_id(output_id)) else {
            warn!("Missing items for smelting recipe {input_id} -> {output_id}!");
            return;
        };
        smelting.add_smelting(
            ItemStack::with_quantity(input, 1, input_metadata),
            ItemStack::with_quantity(output, 1, Metadata::Value(0)),
        );
    };

    add("cinderworks:iron_ore", Metadata::Value(0), "cinderworks:iron_ingot");
    add("cinderworks:iron_dust", Metadata::Value(0), "cinderworks:iron_ingot");
    // The base game smelts copper ore into the rustic ingot; import
    // collapses that output into the canonical copper ingot.
    add("cinderworks:copper_ore", Metadata::Value(0), "cinderworks:rustic_copper_ingot");
    add("cinderworks:copper_dust", Metadata::Value(0), "cinderworks:copper_ingot");
    add("cinderworks:sand", Metadata::Value(0), "cinderworks:glass");
    add("cinderworks:oak_log", Metadata::Wildcard, "cinderworks:charcoal");
    add("cinderworks:raw_beef", Metadata::Value(0), "cinderworks:cooked_beef");
    add("cinderworks:raw_potato", Metadata::Value(0), "cinderworks:baked_potato");

    info!("Seeded {} built-in smelting recipes", smelting.len());
}

pub(super) fn register(app: &mut App) {
    app.add_systems(OnEnter(GameState::PostLoading), seed_smelting_recipes);
}
