//! Runtime registries of game content, addressable by unlocalized name.
//!
//! Add one as a bevy resource by calling [`create_registry`].

pub mod identifiable;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use self::identifiable::Identifiable;

/// Holds every registered instance of one kind of game content.
///
/// Numeric ids are assigned in registration order and may differ between
/// runs; unlocalized names are the stable handle.
#[derive(Resource, Debug, Clone)]
pub struct Registry<T: Identifiable + Sync + Send + 'static> {
    contents: Vec<T>,
    unlocalized_name_to_id: HashMap<String, u16>,
    name: String,
}

impl<T: Identifiable + Sync + Send + 'static> Registry<T> {
    /// Creates an empty registry.
    ///
    /// You should use [`create_registry`] instead, unless you don't want this
    /// added as a bevy resource.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            contents: Vec::new(),
            unlocalized_name_to_id: HashMap::new(),
            name: name.into(),
        }
    }

    /// This registry's own name, used in log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefer [`Self::from_id`] in general -- numeric ids may change between
    /// runs, unlocalized names should not.
    ///
    /// # Panics
    /// If the id was never assigned by this registry.
    pub fn from_numeric_id(&self, id: u16) -> &T {
        &self.contents[id as usize]
    }

    /// Non-panicking variant of [`Self::from_numeric_id`].
    pub fn try_from_numeric_id(&self, id: u16) -> Option<&T> {
        self.contents.get(id as usize)
    }

    /// Fetches content by its unlocalized name.
    pub fn from_id(&self, id: &str) -> Option<&T> {
        self.unlocalized_name_to_id
            .get(id)
            .map(|id| self.from_numeric_id(*id))
    }

    /// Whether anything is registered under this unlocalized name.
    pub fn contains(&self, id: &str) -> bool {
        self.unlocalized_name_to_id.contains_key(id)
    }

    /// Registers the content, assigning its numeric id.
    pub fn register(&mut self, mut item: T) {
        let id = self.contents.len() as u16;
        item.set_numeric_id(id);
        self.unlocalized_name_to_id.insert(item.unlocalized_name().to_owned(), id);
        self.contents.push(item);
    }

    /// Iterates over everything registered, in numeric id order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.contents.iter()
    }
}

/// Initializes & adds the registry to bevy, usable in systems via
/// `Res<Registry<T>>`.
pub fn create_registry<T: Identifiable + Sync + Send + 'static>(app: &mut App, name: impl Into<String>) {
    app.insert_resource(Registry::<T>::new(name));
}
