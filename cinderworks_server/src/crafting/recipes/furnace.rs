//! Generates & loads the furnace machines' recipes once base content is
//! ready, and keeps their keys fresh afterwards.

use std::{ffi::OsStr, fs, path::Path};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use cinderworks_core::{
    crafting::recipes::{
        furnace::{FurnaceRecipes, FurnaceTable},
        smelting::SmeltingRecipes,
    },
    inventory::itemstack::ItemStack,
    item::{
        Item,
        item_category::{FOOD_CATEGORY, ItemCategory},
    },
    ore_dictionary::OreDictionary,
    registry::Registry,
    state::GameState,
};

use super::{RawItemStack, RawMetadata};

const RECIPE_DIR: &str = "assets/cinderworks/recipes/furnace";
const OVERRIDES_FILE: &str = "assets/cinderworks/recipes/furnace_overrides.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawFurnaceTable {
    #[default]
    Standard,
    Pyrolysis,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawFurnaceRecipe {
    #[serde(default)]
    table: RawFurnaceTable,
    energy: u32,
    input: RawItemStack,
    output: RawItemStack,
    #[serde(default)]
    creosote: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawOverride {
    item: String,
    #[serde(default)]
    metadata: RawMetadata,
    value: bool,
}

impl RawOverride {
    fn to_stack(&self, items: &Registry<Item>) -> Option<ItemStack> {
        let Some(item) = items.from_id(&self.item) else {
            error!("Missing item {} in override entry - did you forget cinderworks:?", self.item);
            return None;
        };
        Some(ItemStack::with_quantity(item, 1, self.metadata.into()))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawOverrides {
    #[serde(default)]
    food: Vec<RawOverride>,
    #[serde(default)]
    ore: Vec<RawOverride>,
}

fn import_smelting_recipes(
    mut furnace_recipes: ResMut<FurnaceRecipes>,
    smelting: Res<SmeltingRecipes>,
    ore_dictionary: Res<OreDictionary>,
    categories: Res<Registry<ItemCategory>>,
) {
    let food = categories.from_id(FOOD_CATEGORY);
    if food.is_none() {
        warn!("No {FOOD_CATEGORY} category registered - imported recipes get no food discount!");
    }

    furnace_recipes.import_smelting(&smelting, &ore_dictionary, food);

    info!(
        "Imported {} furnace recipes from the smelting table",
        furnace_recipes.recipes(FurnaceTable::Standard).count()
    );
}

fn load_custom_recipes(
    mut furnace_recipes: ResMut<FurnaceRecipes>,
    ore_dictionary: Res<OreDictionary>,
    items: Res<Registry<Item>>,
) {
    for file in WalkDir::new(RECIPE_DIR)
        .max_depth(1)
        .into_iter()
        .flatten()
        .filter(|x| x.file_type().is_file())
    {
        let path = file.path();

        if path.extension() != Some(OsStr::new("json")) {
            continue;
        }

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                error!("Failed to read {path:?} - {e:?}");
                continue;
            }
        };

        let Ok(raw) = serde_json::de::from_slice::<RawFurnaceRecipe>(&data).map_err(|e| {
            error!("Error parsing {path:?} - {e:?}");
            e
        }) else {
            continue;
        };

        let (Some(input), Some(output)) = (raw.input.to_stack(&items), raw.output.to_stack(&items)) else {
            continue;
        };

        let added = match raw.table {
            RawFurnaceTable::Standard => furnace_recipes.add_recipe(raw.energy, input, output, &ore_dictionary),
            RawFurnaceTable::Pyrolysis => {
                furnace_recipes.add_pyrolysis_recipe(raw.energy, input, output, raw.creosote, &ore_dictionary)
            }
        };

        if added.is_none() {
            warn!("Rejected furnace recipe {path:?} - empty stack, zero energy, or duplicate input");
        }
    }
}

fn load_overrides(
    mut furnace_recipes: ResMut<FurnaceRecipes>,
    ore_dictionary: Res<OreDictionary>,
    items: Res<Registry<Item>>,
) {
    let path = Path::new(OVERRIDES_FILE);
    if !path.exists() {
        return;
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {path:?} - {e:?}");
            return;
        }
    };

    let Ok(raw) = serde_json::de::from_slice::<RawOverrides>(&data).map_err(|e| {
        error!("Error parsing {path:?} - {e:?}");
        e
    }) else {
        return;
    };

    for entry in &raw.food {
        let Some(stack) = entry.to_stack(&items) else {
            continue;
        };
        furnace_recipes.add_food_override(&stack, entry.value, &ore_dictionary);
    }
    for entry in &raw.ore {
        let Some(stack) = entry.to_stack(&items) else {
            continue;
        };
        furnace_recipes.add_ore_override(&stack, entry.value);
    }
}

// Other mods keep registering ore dictionary entries while the game runs,
// which silently invalidates the keys cached in the recipe tables.
fn refresh_on_ore_dictionary_change(mut furnace_recipes: ResMut<FurnaceRecipes>, ore_dictionary: Res<OreDictionary>) {
    furnace_recipes.refresh(&ore_dictionary);
    info!("Renormalized furnace recipe keys after an ore dictionary change");
}

pub(super) fn register(app: &mut App) {
    app.add_systems(
        OnExit(GameState::PostLoading),
        (import_smelting_recipes, load_custom_recipes, load_overrides).chain(),
    )
    .add_systems(
        Update,
        refresh_on_ore_dictionary_change
            .run_if(in_state(GameState::Playing))
            .run_if(resource_exists_and_changed::<OreDictionary>),
    );
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;
    use cinderworks_core::{
        crafting::item_key::ItemKey, crafting::recipes::furnace::DEFAULT_ENERGY, inventory::itemstack::Metadata,
        plugin::CinderworksCorePlugin,
    };

    use crate::plugin::CinderworksServerPlugin;

    use super::*;

    fn loaded_app() -> App {
        let mut app = App::new();
        app.add_plugins((StatesPlugin, CinderworksCorePlugin, CinderworksServerPlugin));

        // Startup -> PreLoading -> Loading -> PostLoading -> Playing, one
        // state per update.
        for _ in 0..6 {
            app.update();
        }

        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Playing);

        app
    }

    fn stack(app: &App, id: &str, metadata: Metadata) -> ItemStack {
        let items = app.world().resource::<Registry<Item>>();
        ItemStack::with_quantity(items.from_id(id).unwrap(), 1, metadata)
    }

    #[test]
    fn import_discounts_dust_and_food() {
        let app = loaded_app();
        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();

        let dust = stack(&app, "cinderworks:iron_dust", Metadata::Value(0));
        let recipe = recipes.get_recipe(&dust, FurnaceTable::Standard, ore_dictionary).unwrap();
        assert_eq!(recipe.energy(), DEFAULT_ENERGY * 3 / 4);
        assert_eq!(recipe.output(), &stack(&app, "cinderworks:iron_ingot", Metadata::Value(0)));

        let beef = stack(&app, "cinderworks:raw_beef", Metadata::Value(0));
        let recipe = recipes.get_recipe(&beef, FurnaceTable::Standard, ore_dictionary).unwrap();
        assert_eq!(recipe.energy(), DEFAULT_ENERGY / 2);
        assert!(recipes.is_food(&beef, ore_dictionary));

        let sand = stack(&app, "cinderworks:sand", Metadata::Value(0));
        let recipe = recipes.get_recipe(&sand, FurnaceTable::Standard, ore_dictionary).unwrap();
        assert_eq!(recipe.energy(), DEFAULT_ENERGY);
    }

    #[test]
    fn import_collapses_equivalent_outputs() {
        let app = loaded_app();
        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();

        // The base game smelts copper ore into another mod's ingot; the
        // imported recipe produces the canonical one.
        let ore = stack(&app, "cinderworks:copper_ore", Metadata::Value(0));
        let recipe = recipes.get_recipe(&ore, FurnaceTable::Standard, ore_dictionary).unwrap();
        assert_eq!(recipe.output(), &stack(&app, "cinderworks:copper_ingot", Metadata::Value(0)));
    }

    #[test]
    fn import_covers_every_log_variant() {
        let app = loaded_app();
        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();

        let log = stack(&app, "cinderworks:oak_log", Metadata::Value(7));
        let recipe = recipes.get_recipe(&log, FurnaceTable::Standard, ore_dictionary).unwrap();
        assert_eq!(recipe.output(), &stack(&app, "cinderworks:charcoal", Metadata::Value(0)));
        assert_eq!(recipe.energy(), DEFAULT_ENERGY);
    }

    #[test]
    fn custom_pyrolysis_recipe_loads_from_assets() {
        let app = loaded_app();
        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();

        let log = stack(&app, "cinderworks:oak_log", Metadata::Value(0));
        let recipe = recipes.get_recipe(&log, FurnaceTable::Pyrolysis, ore_dictionary).unwrap();
        assert_eq!(recipe.energy(), 1600);
        assert_eq!(recipe.creosote(), 250);
        assert_eq!(recipe.output(), &stack(&app, "cinderworks:charcoal", Metadata::Value(0)));
    }

    #[test]
    fn overrides_load_from_assets() {
        let app = loaded_app();
        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();

        // Bread never smelts, the data file declares it food anyway.
        let bread = stack(&app, "cinderworks:bread", Metadata::Value(0));
        assert!(recipes.has_food_override(&bread, ore_dictionary));
        assert!(recipes.is_food(&bread, ore_dictionary));

        // Clusters default to ore, the data file blacklists this one
        // wholesale.
        let cluster = stack(&app, "cinderworks:iron_cluster", Metadata::Value(0));
        assert!(!recipes.is_ore(&cluster, ore_dictionary));
    }

    #[test]
    fn ore_dictionary_changes_trigger_a_refresh() {
        let mut app = loaded_app();

        let sand = stack(&app, "cinderworks:sand", Metadata::Value(0));
        let sand_variant = stack(&app, "cinderworks:sand", Metadata::Value(5));

        {
            let recipes = app.world().resource::<FurnaceRecipes>();
            let ore_dictionary = app.world().resource::<OreDictionary>();
            assert!(recipes.recipe_exists(&sand, FurnaceTable::Standard, ore_dictionary));
            assert!(!recipes.recipe_exists(&sand_variant, FurnaceTable::Standard, ore_dictionary));
        }

        // A late mod groups every sand variant under a validated ore class.
        {
            let item_id = sand.item_id();
            let mut ore_dictionary = app.world_mut().resource_mut::<OreDictionary>();
            ore_dictionary.register_name("dustSand");
            ore_dictionary
                .add_link(ItemKey::new(item_id, Metadata::Wildcard), "dustSand")
                .unwrap();
        }

        app.update();

        let recipes = app.world().resource::<FurnaceRecipes>();
        let ore_dictionary = app.world().resource::<OreDictionary>();
        assert!(recipes.recipe_exists(&sand, FurnaceTable::Standard, ore_dictionary));
        assert!(recipes.recipe_exists(&sand_variant, FurnaceTable::Standard, ore_dictionary));
    }
}
