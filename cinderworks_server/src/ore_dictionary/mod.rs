//! Seeds the ore dictionary with the base game's names, links, and
//! canonical substitute forms.

use bevy::prelude::*;
use cinderworks_core::{
    crafting::item_key::ItemKey,
    inventory::itemstack::{ItemStack, Metadata},
    item::Item,
    ore_dictionary::OreDictionary,
    registry::{Registry, identifiable::Identifiable},
    state::GameState,
};

fn link(
    ore_dictionary: &mut OreDictionary,
    items: &Registry<Item>,
    item_id: &str,
    metadata: Metadata,
    name: &str,
) {
    let Some(item) = items.from_id(item_id) else {
        warn!("Missing item {item_id} for ore dictionary name {name}!");
        return;
    };
    if let Err(e) = ore_dictionary.add_link(ItemKey::new(item.id(), metadata), name) {
        error!("{e}");
    }
}

fn seed_ore_dictionary(mut ore_dictionary: ResMut<OreDictionary>, items: Res<Registry<Item>>) {
    for name in [
        "oreIron",
        "dustIron",
        "ingotIron",
        "clusterIron",
        "oreCopper",
        "dustCopper",
        "ingotCopper",
        "logWood",
    ] {
        ore_dictionary.register_name(name);
    }

    link(&mut ore_dictionary, &items, "cinderworks:iron_ore", Metadata::Wildcard, "oreIron");
    link(&mut ore_dictionary, &items, "cinderworks:iron_dust", Metadata::Value(0), "dustIron");
    link(&mut ore_dictionary, &items, "cinderworks:iron_ingot", Metadata::Value(0), "ingotIron");
    link(&mut ore_dictionary, &items, "cinderworks:iron_cluster", Metadata::Wildcard, "clusterIron");
    link(&mut ore_dictionary, &items, "cinderworks:copper_ore", Metadata::Wildcard, "oreCopper");
    link(&mut ore_dictionary, &items, "cinderworks:copper_dust", Metadata::Value(0), "dustCopper");
    link(&mut ore_dictionary, &items, "cinderworks:copper_ingot", Metadata::Value(0), "ingotCopper");
    link(
        &mut ore_dictionary,
        &items,
        "cinderworks:rustic_copper_ingot",
        Metadata::Value(0),
        "ingotCopper",
    );
    link(&mut ore_dictionary, &items, "cinderworks:oak_log", Metadata::Wildcard, "logWood");

    // Canonical forms that equivalent items collapse into during recipe
    // import.
    for (name, item_id) in [
        ("ingotIron", "cinderworks:iron_ingot"),
        ("ingotCopper", "cinderworks:copper_ingot"),
    ] {
        let Some(item) = items.from_id(item_id) else {
            warn!("Missing item {item_id} for {name} substitute!");
            continue;
        };
        let canonical = ItemStack::with_quantity(item, 1, Metadata::Value(0));
        if let Err(e) = ore_dictionary.set_substitute(name, canonical) {
            error!("{e}");
        }
    }
}

pub(crate) fn register(app: &mut App) {
    app.add_systems(OnEnter(GameState::PostLoading), seed_ore_dictionary);
}
