use bevy::prelude::*;
use cinderworks_core::{
    item::{
        Item,
        item_category::{FOOD_CATEGORY, ItemCategory},
    },
    registry::{Registry, identifiable::Identifiable},
    state::GameState,
};

fn create_item_categories(mut categories: ResMut<Registry<ItemCategory>>, items: Res<Registry<Item>>) {
    let mut food = ItemCategory::new(FOOD_CATEGORY);

    for id in ["cinderworks:cooked_beef", "cinderworks:baked_potato", "cinderworks:bread"] {
        let Some(item) = items.from_id(id) else {
            warn!("Missing item {id} for category {FOOD_CATEGORY}!");
            continue;
        };
        food.add_item(item.id());
    }

    categories.register(food);
}

pub(super) fn register(app: &mut App) {
    app.add_systems(OnEnter(GameState::PostLoading), create_item_categories);
}
