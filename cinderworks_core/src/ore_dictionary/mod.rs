//! Groups functionally-equivalent items from different sources under shared
//! ore names, so machines can treat every member of a name as one material.
//!
//! Ore names follow the `prefixMaterial` convention: `oreIron`, `dustIron`,
//! `ingotIron`, `logWood`. Names must be registered before anything can be
//! linked to them, mirroring how content registries insert values before
//! links.

use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use crate::crafting::item_key::ItemKey;
use crate::inventory::itemstack::ItemStack;

/// Ore name prefix for raw ores.
pub const ORE: &str = "ore";
/// Ore name prefix for ground dusts.
pub const DUST: &str = "dust";
/// Ore name prefix for smelted ingots.
pub const INGOT: &str = "ingot";
/// Ore name prefix for enriched ore clusters.
pub const CLUSTER: &str = "cluster";
/// Ore name prefix for wooden logs.
pub const LOG: &str = "log";

#[derive(Debug, Error)]
/// Errors from linking against the ore dictionary.
pub enum OreDictionaryError {
    /// The ore name was never registered with
    /// [`OreDictionary::register_name`].
    #[error("no ore dictionary name registered for {name}")]
    UnknownName {
        /// The name that was looked up.
        name: String,
    },
}

/// The ore dictionary: registered ore names, the `(item, metadata)` keys
/// linked to them, and an optional canonical stack per name.
///
/// Wildcard-metadata links cover every variant of an item at once; a stack
/// belongs to both its exact-metadata links and its wildcard links.
#[derive(Resource, Debug, Default, Clone)]
pub struct OreDictionary {
    names: Vec<String>,
    name_to_id: HashMap<String, u16>,
    links: HashMap<ItemKey, Vec<u16>>,
    substitutes: HashMap<u16, ItemStack>,
}

impl OreDictionary {
    /// Creates an empty ore dictionary. The core plugin adds one as a
    /// resource; you rarely want your own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ore name, returning its numeric id. Registering a name
    /// twice returns the id it already has.
    pub fn register_name(&mut self, name: impl Into<String>) -> u16 {
        let name = name.into();
        if let Some(id) = self.name_to_id.get(&name) {
            return *id;
        }
        let id = self.names.len() as u16;
        self.name_to_id.insert(name.clone(), id);
        self.names.push(name);
        id
    }

    /// Whether this ore name has been registered.
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub(crate) fn name_of(&self, id: u16) -> &str {
        &self.names[id as usize]
    }

    /// Links an `(item, metadata)` key to a registered ore name.
    ///
    /// The name must exist first, see [`Self::register_name`]. A
    /// wildcard-metadata key links every variant of the item at once.
    pub fn add_link(&mut self, key: ItemKey, name: &str) -> Result<(), OreDictionaryError> {
        let id = *self
            .name_to_id
            .get(name)
            .ok_or_else(|| OreDictionaryError::UnknownName { name: name.to_owned() })?;

        let ids = self.links.entry(key).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }

        Ok(())
    }

    pub(crate) fn ore_classes(&self, stack: &ItemStack) -> impl Iterator<Item = u16> {
        let exact = ItemKey::of(stack);
        let wildcard = exact.with_wildcard();

        let exact_ids = self.links.get(&exact);
        // An already-wildcard stack would otherwise see its links twice.
        let wildcard_ids = (wildcard != exact).then(|| self.links.get(&wildcard)).flatten();

        exact_ids
            .into_iter()
            .flatten()
            .chain(wildcard_ids.into_iter().flatten())
            .copied()
    }

    /// Every ore name the stack belongs to: exact-metadata links first, then
    /// wildcard links.
    pub fn ore_names(&self, stack: &ItemStack) -> impl Iterator<Item = &str> {
        self.ore_classes(stack).map(|id| self.name_of(id))
    }

    /// The first ore name the stack was linked under, if any.
    pub fn first_ore_name(&self, stack: &ItemStack) -> Option<&str> {
        self.ore_names(stack).next()
    }

    /// Whether the stack is linked to any ore name at all.
    pub fn has_ore_name(&self, stack: &ItemStack) -> bool {
        self.ore_classes(stack).next().is_some()
    }

    /// Marks the canonical stack for an ore name. Recipe imports replace
    /// outputs belonging to the name with this stack, collapsing equivalent
    /// items from different mods into one form.
    pub fn set_substitute(&mut self, name: &str, stack: ItemStack) -> Result<(), OreDictionaryError> {
        let id = *self
            .name_to_id
            .get(name)
            .ok_or_else(|| OreDictionaryError::UnknownName { name: name.to_owned() })?;

        self.substitutes.insert(id, stack);

        Ok(())
    }

    /// The canonical stack registered for an ore name, if any.
    pub fn substitute(&self, name: &str) -> Option<&ItemStack> {
        self.name_to_id.get(name).and_then(|id| self.substitutes.get(id))
    }

    /// Whether any of the stack's ore names carries the given prefix.
    pub fn has_prefixed_name(&self, stack: &ItemStack, prefix: &str) -> bool {
        self.ore_names(stack).any(|name| name.starts_with(prefix))
    }

    /// Whether the stack is a raw ore.
    pub fn is_ore(&self, stack: &ItemStack) -> bool {
        self.has_prefixed_name(stack, ORE)
    }

    /// Whether the stack is a ground dust.
    pub fn is_dust(&self, stack: &ItemStack) -> bool {
        self.has_prefixed_name(stack, DUST)
    }

    /// Whether the stack is a smelted ingot.
    pub fn is_ingot(&self, stack: &ItemStack) -> bool {
        self.has_prefixed_name(stack, INGOT)
    }

    /// Whether the stack is an enriched ore cluster.
    pub fn is_cluster(&self, stack: &ItemStack) -> bool {
        self.has_prefixed_name(stack, CLUSTER)
    }
}

/// Decides which ore classes participate in recipe key normalization: a
/// name passes when it starts with one of the configured prefixes.
#[derive(Debug, Clone, Default)]
pub struct OreNameValidator {
    prefixes: Vec<String>,
}

impl OreNameValidator {
    /// Accepts ore names starting with this prefix.
    pub fn add_prefix(&mut self, prefix: impl Into<String>) {
        self.prefixes.push(prefix.into());
    }

    /// Whether the ore name passes any configured prefix.
    pub fn validate(&self, name: &str) -> bool {
        self.prefixes.iter().any(|prefix| name.starts_with(prefix))
    }
}

pub(crate) fn register(app: &mut App) {
    app.insert_resource(OreDictionary::default());
}
