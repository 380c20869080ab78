//! Random AI controller for testing and baseline gameplay
//!
//! Makes uniformly random legal choices. All randomness comes from the game's
//! own random source, so a seeded game with random players replays exactly.

use crate::core::{CardId, PlayerId};
use crate::game::controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};

/// A controller that makes random choices
pub struct RandomController {
    player_id: PlayerId,
}

impl RandomController {
    pub fn new(player_id: PlayerId) -> Self {
        RandomController { player_id }
    }

    /// Random subset of `pool` with a size between `min` and `max`
    fn random_subset<T: Copy>(view: &GameStateView, pool: &[T], min: usize, max: usize) -> Vec<T> {
        let max = max.min(pool.len());
        let min = min.min(max);
        let mut rng = view.rng();
        let count = rng.random_int(min as i64, max as i64 + 1) as usize;
        let mut shuffled = pool.to_vec();
        rng.shuffle(&mut shuffled);
        shuffled.truncate(count);
        shuffled
    }
}

impl PlayerController for RandomController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn choose_action_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<CardId> {
        if playable.is_empty() {
            return None;
        }
        let card = playable[view.rng().random_index(playable.len())];
        view.logger()
            .controller_choice("RANDOM", &format!("plays {}", view.card_name(card)));
        Some(card)
    }

    fn choose_treasures_to_play(
        &mut self,
        _view: &GameStateView,
        playable: &[CardId],
    ) -> Option<Vec<CardId>> {
        Some(playable.to_vec())
    }

    fn choose_card_to_buy(&mut self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        // One extra slot stands for buying nothing
        let index = view.rng().random_index(buyable.len() + 1);
        let choice = buyable.get(index).cloned();
        view.logger()
            .controller_choice("RANDOM", &format!("buys {:?}", choice));
        choice
    }

    fn choose_cards_from_list(&mut self, view: &GameStateView, choice: &CardChoice) -> Vec<CardId> {
        let cards = Self::random_subset(view, &choice.cards, choice.min, choice.max);
        view.logger().controller_choice(
            "RANDOM",
            &format!("{}: chose {} of {}", choice.prompt, cards.len(), choice.cards.len()),
        );
        cards
    }

    fn choose_pile_from_supply(
        &mut self,
        view: &GameStateView,
        choice: &PileChoice,
    ) -> Option<String> {
        if choice.piles.is_empty() {
            return None;
        }
        let pile = choice.piles[view.rng().random_index(choice.piles.len())].clone();
        view.logger()
            .controller_choice("RANDOM", &format!("{}: {pile}", choice.prompt));
        Some(pile)
    }

    fn choose_boolean(&mut self, view: &GameStateView, choice: &BooleanChoice) -> bool {
        let answer = view.rng().random() < 0.5;
        view.logger()
            .controller_choice("RANDOM", &format!("{}: {answer}", choice.prompt));
        answer
    }

    fn choose_effects_from_list(
        &mut self,
        view: &GameStateView,
        choice: &EffectChoice,
    ) -> Vec<usize> {
        let indices: Vec<usize> = (0..choice.choices.len()).collect();
        Self::random_subset(view, &indices, choice.min, choice.max)
    }

    fn choose_integer(&mut self, view: &GameStateView, choice: &IntegerChoice) -> i64 {
        if choice.max < choice.min {
            return choice.min;
        }
        view.rng().random_int(choice.min, choice.max + 1)
    }
}
