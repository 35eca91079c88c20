//! An ItemStack represents an item, the quantity of that item, and its
//! metadata (damage/variant) value.

use serde::{Deserialize, Serialize};

use crate::{item::Item, registry::identifiable::Identifiable};

/// An item's damage/variant value.
///
/// Recipes and ore dictionary links may be registered under
/// [`Metadata::Wildcard`] to cover every variant of an item at once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metadata {
    /// One concrete variant.
    Value(u16),
    /// Matches any variant of the item.
    Wildcard,
}

/// An item, the quantity of that item, & its metadata value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    item_id: u16,
    quantity: u16,
    metadata: Metadata,
}

impl ItemStack {
    /// Creates a stack of that item with the given quantity & metadata.
    pub fn with_quantity(item: &Item, quantity: u16, metadata: Metadata) -> Self {
        Self::raw(item.id(), quantity, metadata)
    }

    /// Creates a stack from a raw numeric item id.
    pub fn raw(item_id: u16, quantity: u16, metadata: Metadata) -> Self {
        Self {
            item_id,
            quantity,
            metadata,
        }
    }

    #[inline]
    /// Gets the item's id
    pub fn item_id(&self) -> u16 {
        self.item_id
    }

    #[inline]
    /// Gets the quantity
    pub fn quantity(&self) -> u16 {
        self.quantity
    }

    #[inline]
    /// Gets the metadata value
    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// An empty stack holds nothing, matches no recipe, and is rejected at
    /// every registration boundary.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// This same stack with a different metadata value.
    pub fn with_metadata(&self, metadata: Metadata) -> Self {
        Self { metadata, ..self.clone() }
    }

    /// This same stack with a different quantity.
    pub fn copy_with_quantity(&self, quantity: u16) -> Self {
        Self { quantity, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_empty() {
        let stack = ItemStack::raw(4, 0, Metadata::Value(0));
        assert!(stack.is_empty());
        assert!(!stack.copy_with_quantity(1).is_empty());
    }

    #[test]
    fn copies_keep_identity() {
        let stack = ItemStack::raw(4, 2, Metadata::Value(3));
        assert_eq!(stack.with_metadata(Metadata::Wildcard).item_id(), 4);
        assert_eq!(stack.copy_with_quantity(16).metadata(), Metadata::Value(3));
    }
}
