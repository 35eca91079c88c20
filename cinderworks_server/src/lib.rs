// #![warn(missing_docs)]

pub mod crafting;
pub mod items;
pub mod ore_dictionary;
pub mod plugin;
