//! Card registry for looking up card definitions by name
//!
//! Lookup is case-insensitive. Registration order is kept so that listing and
//! random kingdom selection don't depend on hash order.

use crate::core::{Card, CardDefinition, CardId, CardSet, EntityStore};
use crate::{DominionError, Result};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Registry of every card definition a game can use
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    by_name: FxHashMap<String, usize>,
    definitions: Vec<Arc<CardDefinition>>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in catalog
    pub fn with_catalog() -> Result<Self> {
        let mut registry = CardRegistry::new();
        registry.register_all(crate::loader::catalog::all_cards())?;
        Ok(registry)
    }

    /// Add a definition; a name already registered (in any case) is an error
    pub fn register(&mut self, definition: CardDefinition) -> Result<Arc<CardDefinition>> {
        let key = definition.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(DominionError::DuplicateCard(definition.name));
        }
        let definition = Arc::new(definition);
        self.by_name.insert(key, self.definitions.len());
        self.definitions.push(definition.clone());
        Ok(definition)
    }

    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<()> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CardDefinition>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.definitions[i])
    }

    /// Like `get`, but an unknown name is an error
    pub fn lookup(&self, name: &str) -> Result<&Arc<CardDefinition>> {
        self.get(name)
            .ok_or_else(|| DominionError::UnknownCard(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Create a fresh card instance of `name` in the store
    pub fn new_instance(&self, name: &str, cards: &mut EntityStore<Card>) -> Result<CardId> {
        let definition = self.lookup(name)?.clone();
        let id = cards.next_id();
        cards.insert(id, Card::new(id, definition));
        Ok(id)
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.definitions.iter()
    }

    /// Names of the cards that may be picked for a kingdom, in registration order
    pub fn kingdom_card_names(&self) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|d| d.set == CardSet::Kingdom)
            .map(|d| d.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
