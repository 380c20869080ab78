//! Player zones (hand, deck, discard, in play, set aside) and named mats

use crate::core::{CardId, PlayerId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Different places a card can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    Hand,
    /// The draw pile
    Deck,
    Discard,
    InPlay,
    SetAside,
    /// Named storage outside the five zones (e.g. the Island mat)
    Mat(&'static str),
    /// Shared trash; not a player zone
    Trash,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Hand => write!(f, "hand"),
            Zone::Deck => write!(f, "deck"),
            Zone::Discard => write!(f, "discard pile"),
            Zone::InPlay => write!(f, "play"),
            Zone::SetAside => write!(f, "set-aside zone"),
            Zone::Mat(name) => write!(f, "{name} mat"),
            Zone::Trash => write!(f, "trash"),
        }
    }
}

/// Which end of an ordered zone a card goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZonePosition {
    Top,
    Bottom,
}

/// An ordered zone of cards
///
/// The top of the zone is the END of `cards`, so drawing and gaining are pops and pushes.
#[derive(Debug, Clone, Serialize)]
pub struct CardZone {
    pub zone_type: Zone,
    pub owner: PlayerId,
    pub cards: Vec<CardId>,
}

impl CardZone {
    pub fn new(zone_type: Zone, owner: PlayerId) -> Self {
        CardZone {
            zone_type,
            owner,
            cards: Vec::new(),
        }
    }

    /// Add to top
    pub fn add(&mut self, card_id: CardId) {
        self.cards.push(card_id);
    }

    pub fn add_to_bottom(&mut self, card_id: CardId) {
        self.cards.insert(0, card_id);
    }

    pub fn insert(&mut self, card_id: CardId, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.add(card_id),
            ZonePosition::Bottom => self.add_to_bottom(card_id),
        }
    }

    pub fn remove(&mut self, card_id: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&id| id == card_id) {
            // Ordered: the rest of the zone keeps its order
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.contains(&card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw_top(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    pub fn peek_top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Up to `n` cards from the top, topmost first
    pub fn top_n(&self, n: usize) -> Vec<CardId> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Remove and return every card, preserving bottom-to-top order
    pub fn take_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }
}

/// Collection of all zones for a player
#[derive(Debug, Clone, Serialize)]
pub struct PlayerZones {
    pub hand: CardZone,
    pub deck: CardZone,
    pub discard: CardZone,
    pub in_play: CardZone,
    pub set_aside: CardZone,
    /// Ordered by name so iteration is deterministic
    pub mats: BTreeMap<&'static str, CardZone>,
}

impl PlayerZones {
    pub fn new(player_id: PlayerId) -> Self {
        PlayerZones {
            hand: CardZone::new(Zone::Hand, player_id),
            deck: CardZone::new(Zone::Deck, player_id),
            discard: CardZone::new(Zone::Discard, player_id),
            in_play: CardZone::new(Zone::InPlay, player_id),
            set_aside: CardZone::new(Zone::SetAside, player_id),
            mats: BTreeMap::new(),
        }
    }

    pub fn get_zone(&self, zone: Zone) -> Option<&CardZone> {
        match zone {
            Zone::Hand => Some(&self.hand),
            Zone::Deck => Some(&self.deck),
            Zone::Discard => Some(&self.discard),
            Zone::InPlay => Some(&self.in_play),
            Zone::SetAside => Some(&self.set_aside),
            Zone::Mat(name) => self.mats.get(name),
            Zone::Trash => None,
        }
    }

    /// Mutable access to a zone; mats are created on first use
    pub fn get_zone_mut(&mut self, zone: Zone) -> Option<&mut CardZone> {
        match zone {
            Zone::Hand => Some(&mut self.hand),
            Zone::Deck => Some(&mut self.deck),
            Zone::Discard => Some(&mut self.discard),
            Zone::InPlay => Some(&mut self.in_play),
            Zone::SetAside => Some(&mut self.set_aside),
            Zone::Mat(name) => {
                let owner = self.hand.owner;
                Some(
                    self.mats
                        .entry(name)
                        .or_insert_with(|| CardZone::new(Zone::Mat(name), owner)),
                )
            }
            Zone::Trash => None,
        }
    }

    /// Cards on a named mat, empty if the mat was never used
    pub fn mat(&self, name: &'static str) -> &[CardId] {
        self.mats.get(name).map(|z| z.cards.as_slice()).unwrap_or(&[])
    }

    /// Zones in removal precedence order: hand, deck, in play, discard, set aside, then mats
    pub fn zones_in_order(&self) -> impl Iterator<Item = &CardZone> {
        [
            &self.hand,
            &self.deck,
            &self.in_play,
            &self.discard,
            &self.set_aside,
        ]
        .into_iter()
        .chain(self.mats.values())
    }

    /// Find which zone holds a card, searching in precedence order
    pub fn locate(&self, card_id: CardId) -> Option<Zone> {
        self.zones_in_order()
            .find(|zone| zone.contains(card_id))
            .map(|zone| zone.zone_type)
    }

    /// Every card in every zone and mat, each exactly once
    pub fn all_cards(&self) -> Vec<CardId> {
        self.zones_in_order()
            .flat_map(|zone| zone.cards.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_zone() {
        let player_id = PlayerId::new(0);
        let mut zone = CardZone::new(Zone::Hand, player_id);

        assert_eq!(zone.len(), 0);
        assert!(zone.is_empty());

        let card1 = CardId::new(10);
        let card2 = CardId::new(11);

        zone.add(card1);
        zone.add(card2);

        assert_eq!(zone.len(), 2);
        assert!(zone.contains(card1));
        assert!(zone.remove(card1));
        assert!(!zone.remove(card1));
        assert_eq!(zone.cards, vec![card2]);
    }

    #[test]
    fn test_deck_operations() {
        let mut deck = CardZone::new(Zone::Deck, PlayerId::new(0));
        let (c1, c2, c3) = (CardId::new(1), CardId::new(2), CardId::new(3));

        deck.add(c1); // Bottom
        deck.add(c2);
        deck.add(c3); // Top

        assert_eq!(deck.peek_top(), Some(c3));
        assert_eq!(deck.top_n(2), vec![c3, c2]);
        assert_eq!(deck.top_n(10).len(), 3);

        deck.insert(CardId::new(4), ZonePosition::Bottom);
        assert_eq!(deck.cards[0], CardId::new(4));

        assert_eq!(deck.draw_top(), Some(c3));
        assert_eq!(deck.draw_top(), Some(c2));
        assert_eq!(deck.draw_top(), Some(c1));
        assert_eq!(deck.draw_top(), Some(CardId::new(4)));
        assert_eq!(deck.draw_top(), None);
    }

    #[test]
    fn test_mats_and_locate() {
        let mut zones = PlayerZones::new(PlayerId::new(1));
        zones.hand.add(CardId::new(1));
        zones
            .get_zone_mut(Zone::Mat("island"))
            .unwrap()
            .add(CardId::new(2));

        assert_eq!(zones.locate(CardId::new(1)), Some(Zone::Hand));
        assert_eq!(zones.locate(CardId::new(2)), Some(Zone::Mat("island")));
        assert_eq!(zones.locate(CardId::new(3)), None);
        assert_eq!(zones.mat("island"), &[CardId::new(2)]);
        assert!(zones.mat("native village").is_empty());
        assert_eq!(zones.all_cards(), vec![CardId::new(1), CardId::new(2)]);
        assert!(zones.get_zone(Zone::Trash).is_none());
    }
}
