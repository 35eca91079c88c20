//! Groupings of items that other systems special-case, such as foods.

use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::registry::{create_registry, identifiable::Identifiable};

/// Items in this category cost half the usual energy to process, and their
/// smelting inputs are remembered as foods by the furnace registry.
pub const FOOD_CATEGORY: &str = "cinderworks:food";

/// A named set of items.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ItemCategory {
    unlocalized_name: String,
    id: u16,

    items: HashSet<u16>,
}

impl ItemCategory {
    /// Creates an empty category.
    pub fn new(unlocalized_name: impl Into<String>) -> Self {
        Self {
            unlocalized_name: unlocalized_name.into(),
            items: Default::default(),
            id: 0,
        }
    }

    /// Adds an item, by numeric id, to this category.
    pub fn add_item(&mut self, item_id: u16) {
        self.items.insert(item_id);
    }

    /// Whether the item with this numeric id belongs to the category.
    pub fn contains(&self, item_id: u16) -> bool {
        self.items.contains(&item_id)
    }
}

impl Identifiable for ItemCategory {
    fn id(&self) -> u16 {
        self.id
    }

    fn set_numeric_id(&mut self, id: u16) {
        self.id = id
    }

    fn unlocalized_name(&self) -> &str {
        &self.unlocalized_name
    }
}

pub(super) fn register(app: &mut App) {
    create_registry::<ItemCategory>(app, "cinderworks:item_category");
}
