//! Normalized lookup keys for recipe & override tables.
//!
//! Two key kinds exist on purpose. [`ItemKey`] compares by item & metadata
//! only. [`OreBoundKey`] additionally collapses items of the same validated
//! ore class into one table slot. Which tables use which kind is part of
//! the registry's contract, not an implementation detail.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::inventory::itemstack::{ItemStack, Metadata};

/// A plain `(item, metadata)` lookup key, with no ore-class binding.
///
/// Ore overrides are keyed this way: one wildcard entry can cover a whole
/// ore dictionary class, even one that is neither ore nor dust.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey {
    item_id: u16,
    metadata: Metadata,
}

impl ItemKey {
    /// Creates a key from a raw numeric item id.
    pub fn new(item_id: u16, metadata: Metadata) -> Self {
        Self { item_id, metadata }
    }

    /// The key this stack is looked up by.
    pub fn of(stack: &ItemStack) -> Self {
        Self::new(stack.item_id(), stack.metadata())
    }

    #[inline]
    /// Gets the item's id
    pub fn item_id(&self) -> u16 {
        self.item_id
    }

    #[inline]
    /// Gets the metadata value
    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// This same key with its metadata coerced to [`Metadata::Wildcard`].
    pub fn with_wildcard(self) -> Self {
        Self {
            metadata: Metadata::Wildcard,
            ..self
        }
    }
}

/// A lookup key that collapses items of the same validated ore class.
///
/// When the source stack carried an ore name that passed the registry's
/// validator, the key is bound to that ore class: equality & hashing then
/// ignore the item and metadata, so every member of the class lands in the
/// same table slot. Unbound keys compare by item & metadata, and never
/// equal a bound key.
#[derive(Debug, Clone, Copy)]
pub struct OreBoundKey {
    item_id: u16,
    metadata: Metadata,
    ore_class: Option<u16>,
}

impl OreBoundKey {
    pub(crate) fn new(stack: &ItemStack, ore_class: Option<u16>) -> Self {
        Self {
            item_id: stack.item_id(),
            metadata: stack.metadata(),
            ore_class,
        }
    }

    #[inline]
    /// Gets the item's id
    pub fn item_id(&self) -> u16 {
        self.item_id
    }

    #[inline]
    /// Gets the metadata value
    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// The validated ore class this key is bound to, if any.
    pub fn ore_class(&self) -> Option<u16> {
        self.ore_class
    }

    /// This same key with its metadata coerced to [`Metadata::Wildcard`].
    /// A no-op for class-bound keys, whose comparisons ignore metadata.
    pub fn with_wildcard(self) -> Self {
        Self {
            metadata: Metadata::Wildcard,
            ..self
        }
    }

    /// Rebuilds a quantity-1 stack from the key's stored fields, for key
    /// renormalization after ore dictionary changes.
    pub(crate) fn to_stack(&self) -> ItemStack {
        ItemStack::raw(self.item_id, 1, self.metadata)
    }
}

impl PartialEq for OreBoundKey {
    fn eq(&self, other: &Self) -> bool {
        match (self.ore_class, other.ore_class) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.item_id == other.item_id && self.metadata == other.metadata,
            _ => false,
        }
    }
}

impl Eq for OreBoundKey {}

impl Hash for OreBoundKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.ore_class {
            Some(class) => {
                1u8.hash(state);
                class.hash(state);
            }
            None => {
                0u8.hash(state);
                self.item_id.hash(state);
                self.metadata.hash(state);
            }
        }
    }
}
