//! The host game's built-in smelting table.

use bevy::prelude::*;

use crate::inventory::itemstack::ItemStack;

/// Every smelting recipe the base game registered, as (input, output)
/// pairs. Seeded once during loading; the furnace import pass reads it to
/// generate machine recipes with heuristic energy costs.
#[derive(Resource, Debug, Default, Clone)]
pub struct SmeltingRecipes {
    recipes: Vec<(ItemStack, ItemStack)>,
}

impl SmeltingRecipes {
    /// Records a smelting recipe.
    pub fn add_smelting(&mut self, input: ItemStack, output: ItemStack) {
        self.recipes.push((input, output));
    }

    /// Iterates every (input, output) pair in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &(ItemStack, ItemStack)> {
        self.recipes.iter()
    }

    /// How many smelting recipes are registered.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the table has been seeded yet.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

pub(super) fn register(app: &mut App) {
    app.insert_resource(SmeltingRecipes::default());
}
