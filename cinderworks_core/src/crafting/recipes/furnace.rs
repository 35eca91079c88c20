//! The recipe registry backing the standard furnace & its pyrolysis
//! variant.
//!
//! Both tables key their recipes by [`OreBoundKey`], so every item of a
//! validated ore class shares one recipe slot, and fall back from an exact
//! metadata match to a wildcard-registered recipe. The registry also tracks
//! which inputs count as food or ore for machines that grant processing
//! bonuses, with caller-managed override tables on top of the derived
//! defaults.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crafting::item_key::{ItemKey, OreBoundKey};
use crate::inventory::itemstack::{ItemStack, Metadata};
use crate::item::item_category::ItemCategory;
use crate::ore_dictionary::{self, OreDictionary, OreNameValidator};

use super::smelting::SmeltingRecipes;

/// Energy cost assigned to recipes generated from the built-in smelting
/// table, before food & dust discounts.
pub const DEFAULT_ENERGY: u32 = 2000;

/// Selects which of the two furnace recipe tables to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnaceTable {
    /// The standard furnace table.
    Standard,
    /// The pyrolysis table. Recipes here yield creosote alongside their
    /// output.
    Pyrolysis,
}

/// One furnace recipe: an input stack, the stack it becomes, and what the
/// conversion costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnaceRecipe {
    input: ItemStack,
    output: ItemStack,
    energy: u32,
    creosote: u32,
}

impl FurnaceRecipe {
    fn new(input: ItemStack, output: ItemStack, energy: u32, creosote: u32) -> Self {
        Self {
            input,
            output,
            energy,
            creosote,
        }
    }

    /// The stack this recipe consumes.
    pub fn input(&self) -> &ItemStack {
        &self.input
    }

    /// The stack this recipe produces.
    pub fn output(&self) -> &ItemStack {
        &self.output
    }

    /// Energy drained over the course of processing.
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Millibuckets of creosote produced alongside the output. Always 0 for
    /// standard-table recipes.
    pub fn creosote(&self) -> u32 {
        self.creosote
    }
}

/// Recipe registry for the furnace machines.
///
/// Lookup, mutation, and the one-time smelting import all normalize their
/// input through the ore dictionary; [`Self::refresh`] rebuilds every key
/// after the dictionary gains entries, since cached keys may have gone
/// stale.
#[derive(Resource, Debug, Clone)]
pub struct FurnaceRecipes {
    recipes: HashMap<OreBoundKey, FurnaceRecipe>,
    pyrolysis_recipes: HashMap<OreBoundKey, FurnaceRecipe>,
    food_set: HashSet<OreBoundKey>,
    // Kept apart from food_set, which refresh() rebuilds from scratch.
    food_overrides: HashMap<OreBoundKey, bool>,
    // Keyed without ore-class binding so one wildcard entry can cover a
    // whole ore dictionary class, even one that is neither ore nor dust.
    ore_overrides: HashMap<ItemKey, bool>,
    ore_validator: OreNameValidator,
}

impl Default for FurnaceRecipes {
    fn default() -> Self {
        let mut ore_validator = OreNameValidator::default();
        ore_validator.add_prefix(ore_dictionary::ORE);
        ore_validator.add_prefix(ore_dictionary::DUST);
        ore_validator.add_prefix(ore_dictionary::LOG);

        Self {
            recipes: HashMap::new(),
            pyrolysis_recipes: HashMap::new(),
            food_set: HashSet::new(),
            food_overrides: HashMap::new(),
            ore_overrides: HashMap::new(),
            ore_validator,
        }
    }
}

impl FurnaceRecipes {
    fn table(&self, table: FurnaceTable) -> &HashMap<OreBoundKey, FurnaceRecipe> {
        match table {
            FurnaceTable::Standard => &self.recipes,
            FurnaceTable::Pyrolysis => &self.pyrolysis_recipes,
        }
    }

    fn table_mut(&mut self, table: FurnaceTable) -> &mut HashMap<OreBoundKey, FurnaceRecipe> {
        match table {
            FurnaceTable::Standard => &mut self.recipes,
            FurnaceTable::Pyrolysis => &mut self.pyrolysis_recipes,
        }
    }

    fn convert_input(&self, input: &ItemStack, ore_dictionary: &OreDictionary) -> OreBoundKey {
        let ore_class = ore_dictionary
            .ore_classes(input)
            .find(|&id| self.ore_validator.validate(ore_dictionary.name_of(id)));

        OreBoundKey::new(input, ore_class)
    }

    /// Finds the recipe for this input stack, trying the exact metadata
    /// first and a wildcard-registered recipe second. Empty stacks match
    /// nothing.
    pub fn get_recipe(
        &self,
        input: &ItemStack,
        table: FurnaceTable,
        ore_dictionary: &OreDictionary,
    ) -> Option<&FurnaceRecipe> {
        if input.is_empty() {
            return None;
        }
        let query = self.convert_input(input, ore_dictionary);
        let map = self.table(table);

        map.get(&query).or_else(|| map.get(&query.with_wildcard()))
    }

    /// Whether [`Self::get_recipe`] would find a recipe for this input.
    pub fn recipe_exists(&self, input: &ItemStack, table: FurnaceTable, ore_dictionary: &OreDictionary) -> bool {
        self.get_recipe(input, table, ore_dictionary).is_some()
    }

    /// Iterates every recipe in the selected table. No ordering guarantee.
    pub fn recipes(&self, table: FurnaceTable) -> impl Iterator<Item = &FurnaceRecipe> {
        self.table(table).values()
    }

    /// Registers a standard furnace recipe, returning the stored recipe.
    ///
    /// Returns `None` without mutating anything when the input or output is
    /// empty, the energy cost is zero, or a standard recipe (exact or
    /// wildcard) already covers the input.
    pub fn add_recipe(
        &mut self,
        energy: u32,
        input: ItemStack,
        output: ItemStack,
        ore_dictionary: &OreDictionary,
    ) -> Option<FurnaceRecipe> {
        self.insert(FurnaceTable::Standard, energy, input, output, 0, ore_dictionary)
    }

    /// Registers a pyrolysis recipe with its creosote byproduct amount.
    /// Same rejection rules as [`Self::add_recipe`], against the pyrolysis
    /// table.
    pub fn add_pyrolysis_recipe(
        &mut self,
        energy: u32,
        input: ItemStack,
        output: ItemStack,
        creosote: u32,
        ore_dictionary: &OreDictionary,
    ) -> Option<FurnaceRecipe> {
        self.insert(FurnaceTable::Pyrolysis, energy, input, output, creosote, ore_dictionary)
    }

    fn insert(
        &mut self,
        table: FurnaceTable,
        energy: u32,
        input: ItemStack,
        output: ItemStack,
        creosote: u32,
        ore_dictionary: &OreDictionary,
    ) -> Option<FurnaceRecipe> {
        if input.is_empty() || output.is_empty() || energy == 0 || self.recipe_exists(&input, table, ore_dictionary) {
            return None;
        }
        let key = self.convert_input(&input, ore_dictionary);
        let recipe = FurnaceRecipe::new(input, output, energy, creosote);
        self.table_mut(table).insert(key, recipe.clone());

        Some(recipe)
    }

    /// Removes & returns the standard recipe registered for this input.
    /// Removing an absent recipe is a no-op returning `None`.
    pub fn remove_recipe(&mut self, input: &ItemStack, ore_dictionary: &OreDictionary) -> Option<FurnaceRecipe> {
        let key = self.convert_input(input, ore_dictionary);
        self.recipes.remove(&key)
    }

    /// [`Self::remove_recipe`], against the pyrolysis table.
    pub fn remove_pyrolysis_recipe(
        &mut self,
        input: &ItemStack,
        ore_dictionary: &OreDictionary,
    ) -> Option<FurnaceRecipe> {
        let key = self.convert_input(input, ore_dictionary);
        self.pyrolysis_recipes.remove(&key)
    }

    /// Whether machines should treat this stack as a food.
    ///
    /// Overrides always win: an exact-metadata override first, then a
    /// wildcard one. With no override, the stack is food when its exact or
    /// wildcard key was recorded during import.
    pub fn is_food(&self, input: &ItemStack, ore_dictionary: &OreDictionary) -> bool {
        if input.is_empty() {
            return false;
        }
        let query = self.convert_input(input, ore_dictionary);

        if let Some(&verdict) = self.food_overrides.get(&query) {
            return verdict;
        }

        // Remember the exact verdict, the entire wildcard could be
        // blacklisted.
        let default_return = self.food_set.contains(&query);
        let wildcard = query.with_wildcard();

        if let Some(&verdict) = self.food_overrides.get(&wildcard) {
            return verdict;
        }

        default_return || self.food_set.contains(&wildcard)
    }

    /// Whether machines should treat this stack as an ore.
    ///
    /// Override lookups use plain `(item, metadata)` keys, never the
    /// ore-class-bound kind; see the override table's note. With no
    /// override, defers to the ore dictionary's ore & cluster prefixes.
    pub fn is_ore(&self, stack: &ItemStack, ore_dictionary: &OreDictionary) -> bool {
        let query = ItemKey::of(stack);
        if let Some(&verdict) = self.ore_overrides.get(&query) {
            return verdict;
        }
        if let Some(&verdict) = self.ore_overrides.get(&query.with_wildcard()) {
            return verdict;
        }

        ore_dictionary.is_ore(stack) || ore_dictionary.is_cluster(stack)
    }

    /// Overrides whether this stack counts as food, returning the previous
    /// override if one existed. Wildcard-metadata stacks override every
    /// variant at once.
    pub fn add_food_override(
        &mut self,
        stack: &ItemStack,
        value: bool,
        ore_dictionary: &OreDictionary,
    ) -> Option<bool> {
        let key = self.convert_input(stack, ore_dictionary);
        self.food_overrides.insert(key, value)
    }

    /// Removes the food override for this stack, returning it.
    pub fn remove_food_override(&mut self, stack: &ItemStack, ore_dictionary: &OreDictionary) -> Option<bool> {
        let key = self.convert_input(stack, ore_dictionary);
        self.food_overrides.remove(&key)
    }

    /// Whether a food override exists for this stack.
    pub fn has_food_override(&self, stack: &ItemStack, ore_dictionary: &OreDictionary) -> bool {
        let key = self.convert_input(stack, ore_dictionary);
        self.food_overrides.contains_key(&key)
    }

    /// Overrides whether this stack counts as an ore, returning the
    /// previous override if one existed.
    pub fn add_ore_override(&mut self, stack: &ItemStack, value: bool) -> Option<bool> {
        self.ore_overrides.insert(ItemKey::of(stack), value)
    }

    /// Removes the ore override for this stack, returning it.
    pub fn remove_ore_override(&mut self, stack: &ItemStack) -> Option<bool> {
        self.ore_overrides.remove(&ItemKey::of(stack))
    }

    /// Whether an ore override exists for this stack.
    pub fn has_ore_override(&self, stack: &ItemStack) -> bool {
        self.ore_overrides.contains_key(&ItemKey::of(stack))
    }

    /// Generates a furnace recipe from every entry of the built-in smelting
    /// table. Safe to re-run: inputs that already resolve to a recipe are
    /// skipped.
    ///
    /// Heuristics, in order: outputs with a canonical ore dictionary
    /// substitute are replaced by it; food outputs halve the energy cost
    /// and record the input in the food set; dust inputs smelting into
    /// ingots get three quarters of the remaining cost; wildcard-metadata
    /// inputs whose concrete metadata-0 form belongs to a validated ore
    /// class are registered under that concrete form instead.
    pub fn import_smelting(
        &mut self,
        smelting: &SmeltingRecipes,
        ore_dictionary: &OreDictionary,
        food: Option<&ItemCategory>,
    ) {
        for (input, output) in smelting.iter() {
            if input.is_empty() || self.recipe_exists(input, FurnaceTable::Standard, ore_dictionary) {
                continue;
            }

            let mut output = output.clone();
            if let Some(substitute) = ore_dictionary
                .first_ore_name(&output)
                .and_then(|name| ore_dictionary.substitute(name))
            {
                output = substitute.copy_with_quantity(output.quantity());
            }

            let mut energy = DEFAULT_ENERGY;

            if food.is_some_and(|food| food.contains(output.item_id())) {
                let key = self.convert_input(input, ore_dictionary);
                self.food_set.insert(key);
                energy /= 2;
            }

            if ore_dictionary.is_dust(input) && ore_dictionary.is_ingot(&output) {
                self.add_recipe(energy * 3 / 4, input.clone(), output, ore_dictionary);
            } else {
                if input.metadata() == Metadata::Wildcard {
                    let concrete = input.with_metadata(Metadata::Value(0));
                    if ore_dictionary
                        .first_ore_name(&concrete)
                        .is_some_and(|name| self.ore_validator.validate(name))
                    {
                        self.add_recipe(energy, concrete, output, ore_dictionary);
                        continue;
                    }
                }
                self.add_recipe(energy, input.clone(), output, ore_dictionary);
            }
        }
    }

    /// Rebuilds every normalized key from the recipes' stored inputs after
    /// the ore dictionary changed, then swaps the tables in wholesale.
    /// Override tables are caller-managed and stay untouched.
    pub fn refresh(&mut self, ore_dictionary: &OreDictionary) {
        let mut recipes = HashMap::with_capacity(self.recipes.len());
        for recipe in self.recipes.values() {
            recipes.insert(self.convert_input(recipe.input(), ore_dictionary), recipe.clone());
        }

        let mut pyrolysis_recipes = HashMap::with_capacity(self.pyrolysis_recipes.len());
        for recipe in self.pyrolysis_recipes.values() {
            pyrolysis_recipes.insert(self.convert_input(recipe.input(), ore_dictionary), recipe.clone());
        }

        let mut food_set = HashSet::with_capacity(self.food_set.len());
        for key in &self.food_set {
            food_set.insert(self.convert_input(&key.to_stack(), ore_dictionary));
        }

        self.recipes = recipes;
        self.pyrolysis_recipes = pyrolysis_recipes;
        self.food_set = food_set;
    }
}

pub(super) fn register(app: &mut App) {
    app.insert_resource(FurnaceRecipes::default());
}
