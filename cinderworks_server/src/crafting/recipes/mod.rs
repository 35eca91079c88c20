use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use cinderworks_core::{
    inventory::itemstack::{ItemStack, Metadata},
    item::Item,
    registry::Registry,
};

pub mod furnace;
pub mod smelting;

/// A metadata value as it appears in data files: `{"value": 3}` or
/// `"wildcard"`. Omitting it means metadata 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawMetadata {
    Value(u16),
    Wildcard,
}

impl Default for RawMetadata {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl From<RawMetadata> for Metadata {
    fn from(raw: RawMetadata) -> Self {
        match raw {
            RawMetadata::Value(value) => Metadata::Value(value),
            RawMetadata::Wildcard => Metadata::Wildcard,
        }
    }
}

/// An item stack as it appears in data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItemStack {
    pub item: String,
    #[serde(default = "one")]
    pub quantity: u16,
    #[serde(default)]
    pub metadata: RawMetadata,
}

fn one() -> u16 {
    1
}

impl RawItemStack {
    /// Resolves this entry against the item registry.
    pub fn to_stack(&self, items: &Registry<Item>) -> Option<ItemStack> {
        let Some(item) = items.from_id(&self.item) else {
            error!("Missing item {} - did you forget cinderworks:?", self.item);
            return None;
        };
        Some(ItemStack::with_quantity(item, self.quantity, self.metadata.into()))
    }
}

pub(super) fn register(app: &mut App) {
    smelting::register(app);
    furnace::register(app);
}
