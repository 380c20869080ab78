//! Card definitions and card instances

use crate::core::effects::{
    BuyPredicate, DurationEffect, Effect, ReactionBundle, SelfCostFn, VictoryFn,
};
use crate::core::{CardId, PlayerId};
use crate::game::GameState;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Attack,
    Curse,
    Duration,
    Reaction,
    Treasure,
    Victory,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a card shields its owner from other players' attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackImmunity {
    /// Revealed from hand when the attack is played (Moat)
    RevealFromHand,
    /// Protects silently while the card waits in the set-aside zone (Lighthouse)
    WhileSetAside,
}

/// Whether a card belongs to the fixed base piles or can be picked for a kingdom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSet {
    Base,
    Kingdom,
}

/// Shared, immutable description of a card, looked up by name
///
/// Built with chained setters:
///
/// ```ignore
/// CardDefinition::new("Village", 3)
///     .with_types(&[CardType::Action])
///     .on_play(Effect::DrawCards(1))
///     .on_play(Effect::GainActions(2))
/// ```
#[derive(Clone)]
pub struct CardDefinition {
    pub name: String,
    pub types: SmallVec<[CardType; 2]>,
    pub set: CardSet,
    /// Base cost before modifiers
    pub cost: i32,
    pub cost_modifier: Option<SelfCostFn>,
    /// Money added when played as a treasure
    pub worth: u32,
    pub victory_points: i32,
    pub dynamic_victory_points: Option<VictoryFn>,
    pub play_effects: Vec<Effect>,
    pub on_gain: Vec<Effect>,
    pub on_trash: Vec<Effect>,
    pub on_cleanup: Vec<Effect>,
    pub reactions: ReactionBundle,
    pub can_buy: Option<BuyPredicate>,
    pub attack_immunity: Option<AttackImmunity>,
    pub text: String,
}

impl CardDefinition {
    pub fn new(name: impl Into<String>, cost: i32) -> Self {
        CardDefinition {
            name: name.into(),
            types: SmallVec::new(),
            set: CardSet::Kingdom,
            cost,
            cost_modifier: None,
            worth: 0,
            victory_points: 0,
            dynamic_victory_points: None,
            play_effects: Vec::new(),
            on_gain: Vec::new(),
            on_trash: Vec::new(),
            on_cleanup: Vec::new(),
            reactions: ReactionBundle::default(),
            can_buy: None,
            attack_immunity: None,
            text: String::new(),
        }
    }

    pub fn with_types(mut self, types: &[CardType]) -> Self {
        self.types = types.iter().copied().collect();
        self
    }

    pub fn base(mut self) -> Self {
        self.set = CardSet::Base;
        self
    }

    pub fn worth(mut self, worth: u32) -> Self {
        self.worth = worth;
        self
    }

    pub fn victory_points(mut self, vp: i32) -> Self {
        self.victory_points = vp;
        self
    }

    pub fn dynamic_victory_points(
        mut self,
        f: impl Fn(&GameState, PlayerId) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.dynamic_victory_points = Some(Arc::new(f));
        self
    }

    pub fn cost_modifier(
        mut self,
        f: impl Fn(&GameState, PlayerId) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.cost_modifier = Some(Arc::new(f));
        self
    }

    pub fn on_play(mut self, effect: Effect) -> Self {
        self.play_effects.push(effect);
        self
    }

    pub fn on_gain(mut self, effect: Effect) -> Self {
        self.on_gain.push(effect);
        self
    }

    pub fn on_trash(mut self, effect: Effect) -> Self {
        self.on_trash.push(effect);
        self
    }

    pub fn on_cleanup(mut self, effect: Effect) -> Self {
        self.on_cleanup.push(effect);
        self
    }

    pub fn reactions(mut self, reactions: ReactionBundle) -> Self {
        self.reactions = reactions;
        self
    }

    pub fn can_buy(
        mut self,
        f: impl Fn(&GameState, PlayerId) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.can_buy = Some(Arc::new(f));
        self
    }

    pub fn attack_immunity(mut self, kind: AttackImmunity) -> Self {
        self.attack_immunity = Some(kind);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn is(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    pub fn is_action(&self) -> bool {
        self.is(CardType::Action)
    }

    pub fn is_treasure(&self) -> bool {
        self.is(CardType::Treasure)
    }

    pub fn is_victory(&self) -> bool {
        self.is(CardType::Victory)
    }

    /// "Action - Attack" style type line
    pub fn type_line(&self) -> String {
        self.types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

impl fmt::Debug for CardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDefinition")
            .field("name", &self.name)
            .field("types", &self.types)
            .field("cost", &self.cost)
            .field("worth", &self.worth)
            .field("victory_points", &self.victory_points)
            .field("play_effects", &self.play_effects)
            .finish_non_exhaustive()
    }
}

/// One physical card during play
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub definition: Arc<CardDefinition>,
    /// Pending duration effects; while non-empty the card stays in play at cleanup
    pub durations: Vec<DurationEffect>,
}

impl Card {
    pub fn new(id: CardId, definition: Arc<CardDefinition>) -> Self {
        Card {
            id,
            definition,
            durations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn is(&self, card_type: CardType) -> bool {
        self.definition.is(card_type)
    }

    pub fn should_clean_up(&self) -> bool {
        self.durations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityId;

    #[test]
    fn test_definition_builder() {
        let village = CardDefinition::new("Village", 3)
            .with_types(&[CardType::Action])
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(2));

        assert_eq!(village.name, "Village");
        assert!(village.is_action());
        assert!(!village.is_treasure());
        assert_eq!(village.play_effects.len(), 2);
        assert_eq!(village.set, CardSet::Kingdom);
    }

    #[test]
    fn test_type_line() {
        let moat =
            CardDefinition::new("Moat", 2).with_types(&[CardType::Action, CardType::Reaction]);
        assert_eq!(moat.type_line(), "Action - Reaction");
    }

    #[test]
    fn test_should_clean_up_tracks_durations() {
        let def = Arc::new(
            CardDefinition::new("Caravan", 4).with_types(&[CardType::Action, CardType::Duration]),
        );
        let mut card = Card::new(EntityId::new(0), def);
        assert!(card.should_clean_up());

        card.durations.push(DurationEffect::start_of_turn(|_, _| Ok(false)));
        assert!(!card.should_clean_up());
    }
}
