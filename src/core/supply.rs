//! Card piles, the kingdom and the supply

use crate::core::{CardDefinition, CardId};
use crate::{DominionError, Result};
use std::sync::Arc;

/// An ordered stack of same-named cards; the top is the end of `cards`
#[derive(Debug, Clone)]
pub struct CardPile {
    pub name: String,
    /// Kept so an empty pile still knows its cost and types
    pub definition: Arc<CardDefinition>,
    pub cards: Vec<CardId>,
}

impl CardPile {
    pub fn new(definition: Arc<CardDefinition>, cards: Vec<CardId>) -> Self {
        CardPile {
            name: definition.name.clone(),
            definition,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }
}

/// The variable piles picked for one game
#[derive(Debug, Clone)]
pub struct Kingdom {
    piles: Vec<CardPile>,
}

impl Kingdom {
    /// Standard kingdom size
    pub const SIZE: usize = 10;

    pub fn new(piles: Vec<CardPile>) -> Self {
        Kingdom { piles }
    }

    pub fn piles(&self) -> &[CardPile] {
        &self.piles
    }

    pub fn names(&self) -> Vec<&str> {
        self.piles.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.piles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }
}

/// Base piles plus kingdom piles; no two piles share a name
#[derive(Debug, Clone)]
pub struct Supply {
    piles: Vec<CardPile>,
    base_count: usize,
}

impl Supply {
    pub fn new(base: Vec<CardPile>, kingdom: Kingdom) -> Result<Self> {
        let base_count = base.len();
        let mut piles = base;
        piles.extend(kingdom.piles);

        for (i, pile) in piles.iter().enumerate() {
            if piles[..i].iter().any(|p| p.name == pile.name) {
                return Err(DominionError::DuplicatePile(pile.name.clone()));
            }
        }

        Ok(Supply { piles, base_count })
    }

    /// All piles, base piles first, in setup order
    pub fn piles(&self) -> &[CardPile] {
        &self.piles
    }

    pub fn base_piles(&self) -> &[CardPile] {
        &self.piles[..self.base_count]
    }

    pub fn kingdom_piles(&self) -> &[CardPile] {
        &self.piles[self.base_count..]
    }

    pub fn pile(&self, name: &str) -> Option<&CardPile> {
        self.piles.iter().find(|p| p.name == name)
    }

    pub fn pile_mut(&mut self, name: &str) -> Option<&mut CardPile> {
        self.piles.iter_mut().find(|p| p.name == name)
    }

    pub fn non_empty_piles(&self) -> impl Iterator<Item = &CardPile> {
        self.piles.iter().filter(|p| !p.is_empty())
    }

    pub fn empty_piles(&self) -> impl Iterator<Item = &CardPile> {
        self.piles.iter().filter(|p| p.is_empty())
    }

    pub fn empty_pile_count(&self) -> usize {
        self.empty_piles().count()
    }

    /// Card count of a pile, 0 if the supply has no such pile
    pub fn count(&self, name: &str) -> usize {
        self.pile(name).map(CardPile::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardType, EntityId};

    fn pile(name: &str, size: u32) -> CardPile {
        let def = Arc::new(CardDefinition::new(name, 2).with_types(&[CardType::Action]));
        CardPile::new(def, (0..size).map(EntityId::new).collect())
    }

    #[test]
    fn test_supply_queries() {
        let supply = Supply::new(
            vec![pile("Copper", 3), pile("Province", 0)],
            Kingdom::new(vec![pile("Village", 2), pile("Smithy", 0)]),
        )
        .unwrap();

        assert_eq!(supply.piles().len(), 4);
        assert_eq!(supply.base_piles().len(), 2);
        assert_eq!(supply.kingdom_piles()[0].name, "Village");
        assert_eq!(supply.empty_pile_count(), 2);
        assert_eq!(supply.non_empty_piles().count(), 2);
        assert_eq!(supply.count("Copper"), 3);
        assert_eq!(supply.count("Gold"), 0);
        assert!(supply.pile("Gold").is_none());
    }

    #[test]
    fn test_duplicate_pile_names_rejected() {
        let result = Supply::new(vec![pile("Copper", 1)], Kingdom::new(vec![pile("Copper", 1)]));
        assert!(matches!(result, Err(DominionError::DuplicatePile(name)) if name == "Copper"));
    }

    #[test]
    fn test_pile_pop_from_top() {
        let mut p = pile("Silver", 2);
        assert_eq!(p.top(), Some(EntityId::new(1)));
        assert_eq!(p.pop(), Some(EntityId::new(1)));
        assert_eq!(p.pop(), Some(EntityId::new(0)));
        assert!(p.pop().is_none());
        assert!(p.is_empty());
    }
}
