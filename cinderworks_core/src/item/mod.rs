//! Items are the units of content machines consume & produce.

pub mod item_category;
pub mod items;

use bevy::prelude::App;

use crate::registry::{create_registry, identifiable::Identifiable};

/// An item any inventory can hold.
#[derive(Debug, Clone)]
pub struct Item {
    unlocalized_name: String,
    numeric_id: u16,
    max_stack_size: u16,
}

/// The max stack size an item gets unless its registration says otherwise.
pub const DEFAULT_MAX_STACK_SIZE: u16 = 64;

impl Identifiable for Item {
    #[inline]
    fn unlocalized_name(&self) -> &str {
        &self.unlocalized_name
    }

    #[inline]
    fn id(&self) -> u16 {
        self.numeric_id
    }

    fn set_numeric_id(&mut self, id: u16) {
        self.numeric_id = id;
    }
}

impl Item {
    /// Creates an item. The numeric id is assigned when it is registered.
    pub fn new(unlocalized_name: impl Into<String>, max_stack_size: u16) -> Self {
        Self {
            unlocalized_name: unlocalized_name.into(),
            numeric_id: 0,
            max_stack_size,
        }
    }

    /// How many of this item fit into one inventory slot.
    pub fn max_stack_size(&self) -> u16 {
        self.max_stack_size
    }
}

pub(crate) fn register(app: &mut App) {
    create_registry::<Item>(app, "cinderworks:items");
    items::register(app);
    item_category::register(app);
}
