//! Heuristic AI controller
//!
//! Plays a "big money" buying strategy with a few kingdom actions mixed in,
//! and scores cards with simple evaluation functions instead of simulating
//! ahead. Deterministic: it never draws from the random source.

use crate::core::{CardDefinition, CardId, CardType, Effect, PlayerId};
use crate::game::controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};

/// What a card's play effects add up to, as far as the heuristics can see
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct EffectTally {
    cards: u32,
    actions: u32,
    buys: u32,
    money: u32,
    custom: u32,
}

impl EffectTally {
    fn of(definition: &CardDefinition) -> Self {
        let mut tally = EffectTally::default();
        for effect in &definition.play_effects {
            tally.add(effect);
        }
        tally
    }

    fn add(&mut self, effect: &Effect) {
        match effect {
            Effect::DrawCards(n) => self.cards += n,
            Effect::GainActions(n) => self.actions += n,
            Effect::GainBuys(n) => self.buys += n,
            Effect::GainMoney(n) => self.money += n,
            Effect::Sequence(steps) => steps.iter().for_each(|s| self.add(s)),
            // Choices and attacks count as one unit of "something happens"
            _ => self.custom += 1,
        }
    }
}

/// Heuristic AI controller that makes decisions using evaluation functions
pub struct HeuristicController {
    player_id: PlayerId,
    /// Maximum copies of terminal (non-village) actions to own per 10 cards
    terminal_density: usize,
}

impl HeuristicController {
    pub fn new(player_id: PlayerId) -> Self {
        HeuristicController {
            player_id,
            terminal_density: 1,
        }
    }

    /// Allow more or fewer terminal actions in the deck (per 10 cards owned)
    pub fn set_terminal_density(&mut self, per_ten_cards: usize) {
        self.terminal_density = per_ten_cards.max(1);
    }

    /// Score an action card for playing right now; higher plays first
    pub fn evaluate_action(&self, definition: &CardDefinition, actions_left: u32) -> i32 {
        let tally = EffectTally::of(definition);
        let mut value = definition.cost * 5;
        if tally.actions > 0 {
            // Villages and cantrips first, they never use up the turn
            value += 100 + tally.actions as i32 * 10;
        } else if actions_left <= 1 {
            value += 10;
        }
        value += tally.cards as i32 * 12;
        value += tally.money as i32 * 8;
        value += tally.buys as i32 * 3;
        value += tally.custom as i32 * 6;
        if definition.is(CardType::Attack) {
            value += 5;
        }
        value
    }

    /// How much a card is worth keeping in the deck; junk scores below zero
    pub fn evaluate_card(&self, definition: &CardDefinition) -> i32 {
        if definition.is(CardType::Curse) {
            return -20;
        }
        if definition.is_victory() && !definition.is_action() && !definition.is_treasure() {
            return -10 + definition.cost;
        }
        if definition.is_treasure() && definition.worth <= 1 && definition.play_effects.is_empty()
        {
            return 0;
        }
        10 + definition.cost * 3
    }

    fn get_best_card(&self, view: &GameStateView, cards: &[CardId]) -> Option<CardId> {
        cards
            .iter()
            .copied()
            .max_by_key(|&id| view.definition(id).map(|d| self.evaluate_card(d)).unwrap_or(0))
    }

    fn sorted_worst_first(&self, view: &GameStateView, cards: &[CardId]) -> Vec<CardId> {
        let mut sorted = cards.to_vec();
        // Stable sort keeps offer order among equal cards
        sorted.sort_by_key(|&id| view.definition(id).map(|d| self.evaluate_card(d)).unwrap_or(0));
        sorted
    }

    fn count_owned(&self, view: &GameStateView, pred: impl Fn(&CardDefinition) -> bool) -> usize {
        let Ok(player) = view.state().player(self.player_id) else {
            return 0;
        };
        player
            .all_cards()
            .into_iter()
            .filter(|&id| view.definition(id).map(&pred).unwrap_or(false))
            .count()
    }

    /// Big money: Province at 8, Gold at 6, Silver at 3, greening as Provinces run low,
    /// and a kingdom action when the deck has room for another terminal
    fn choose_buy(&self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        let money = view.money();
        let provinces_left = view.pile_count("Province");
        let has = |name: &str| buyable.iter().any(|b| b == name);

        if has("Colony") && money >= 11 {
            return Some("Colony".into());
        }
        if has("Province") && money >= 8 {
            let golds = self.count_owned(view, |d| d.name == "Gold");
            if golds > 0 || provinces_left <= 6 {
                return Some("Province".into());
            }
        }
        if has("Duchy") && provinces_left <= 4 && money >= 5 {
            return Some("Duchy".into());
        }
        if has("Estate") && provinces_left <= 2 && money >= 2 {
            return Some("Estate".into());
        }

        if let Some(action) = self.choose_kingdom_buy(view, buyable) {
            return Some(action);
        }
        for treasure in ["Platinum", "Gold", "Silver"] {
            if has(treasure) {
                return Some(treasure.into());
            }
        }
        None
    }

    fn choose_kingdom_buy(&self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        let owned = view.owned_card_count();
        let actions = self.count_owned(view, |d| d.is_action());
        if actions * 10 >= owned.max(10) * self.terminal_density + 10 {
            return None;
        }
        buyable
            .iter()
            .filter_map(|name| view.supply().pile(name))
            .filter(|pile| pile.definition.is_action() && pile.definition.cost >= 2)
            .max_by_key(|pile| {
                (
                    view.pile_cost(&pile.name).unwrap_or(0),
                    self.evaluate_action(&pile.definition, 1),
                )
            })
            .map(|pile| pile.name.clone())
    }

    /// Prompts asking which card to play, gain or keep want the best; everything
    /// else (discard, trash, set aside, put back) wants the worst
    fn wants_best(prompt: &str) -> bool {
        let prompt = prompt.to_ascii_lowercase();
        ["play", "gain", "keep"]
            .iter()
            .any(|word| prompt.contains(word))
    }
}

impl PlayerController for HeuristicController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn choose_action_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<CardId> {
        let actions_left = view.actions();
        let best = playable.iter().copied().max_by_key(|&id| {
            view.definition(id)
                .map(|d| self.evaluate_action(d, actions_left))
                .unwrap_or(i32::MIN)
        })?;
        view.logger()
            .controller_choice("HEURISTIC", &format!("plays {}", view.card_name(best)));
        Some(best)
    }

    fn choose_treasures_to_play(
        &mut self,
        _view: &GameStateView,
        playable: &[CardId],
    ) -> Option<Vec<CardId>> {
        Some(playable.to_vec())
    }

    fn choose_card_to_buy(&mut self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        let choice = self.choose_buy(view, buyable);
        view.logger().controller_choice(
            "HEURISTIC",
            &format!(
                "with ${} buys {}",
                view.money(),
                choice.as_deref().unwrap_or("nothing")
            ),
        );
        choice
    }

    fn choose_cards_from_list(&mut self, view: &GameStateView, choice: &CardChoice) -> Vec<CardId> {
        let picked: Vec<CardId> = if Self::wants_best(&choice.prompt) {
            let mut pool = choice.cards.clone();
            let mut picked = Vec::new();
            while picked.len() < choice.min.max(1).min(choice.max) {
                let Some(best) = self.get_best_card(view, &pool) else {
                    break;
                };
                pool.retain(|&c| c != best);
                picked.push(best);
            }
            picked
        } else {
            // Take every junk card allowed, and at least `min`
            self.sorted_worst_first(view, &choice.cards)
                .into_iter()
                .enumerate()
                .take_while(|&(i, id)| {
                    i < choice.min
                        || view
                            .definition(id)
                            .map(|d| self.evaluate_card(d) <= 0)
                            .unwrap_or(false)
                })
                .map(|(_, id)| id)
                .take(choice.max)
                .collect()
        };
        view.logger().controller_choice(
            "HEURISTIC",
            &format!(
                "{}: {}",
                choice.prompt,
                picked
                    .iter()
                    .map(|&c| view.card_name(c))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
        picked
    }

    fn choose_pile_from_supply(
        &mut self,
        view: &GameStateView,
        choice: &PileChoice,
    ) -> Option<String> {
        // Most expensive useful card; victory cards only once the game is ending
        let late = view.pile_count("Province") <= 4;
        let pile = choice
            .piles
            .iter()
            .filter_map(|name| view.supply().pile(name))
            .filter(|pile| {
                let def = &pile.definition;
                !def.is(CardType::Curse) && (late || !def.is_victory() || def.is_action())
            })
            .max_by_key(|pile| view.pile_cost(&pile.name).unwrap_or(0))
            .map(|pile| pile.name.clone());
        view.logger()
            .controller_choice("HEURISTIC", &format!("{}: {:?}", choice.prompt, pile));
        pile
    }

    fn choose_boolean(&mut self, view: &GameStateView, choice: &BooleanChoice) -> bool {
        let prompt = choice.prompt.to_ascii_lowercase();
        let answer = if prompt.contains("trash") {
            ["curse", "estate", "copper"]
                .iter()
                .any(|junk| prompt.contains(junk))
        } else {
            choice.default
        };
        view.logger()
            .controller_choice("HEURISTIC", &format!("{}: {answer}", choice.prompt));
        answer
    }

    fn choose_effects_from_list(
        &mut self,
        _view: &GameStateView,
        choice: &EffectChoice,
    ) -> Vec<usize> {
        // Options are listed strongest first by convention
        (0..choice.choices.len())
            .take(choice.min.max(1).min(choice.max))
            .collect()
    }

    fn choose_integer(&mut self, _view: &GameStateView, choice: &IntegerChoice) -> i64 {
        choice.default
    }

    fn on_game_end(&mut self, view: &GameStateView, won: bool) {
        view.logger().controller_choice(
            "HEURISTIC",
            &format!(
                "{} with {} VP",
                if won { "won" } else { "lost" },
                view.victory_points()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_villages_play_before_terminals() {
        let controller = HeuristicController::new(PlayerId::new(0));
        let village = CardDefinition::new("Village", 3)
            .with_types(&[CardType::Action])
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(2));
        let smithy = CardDefinition::new("Smithy", 4)
            .with_types(&[CardType::Action])
            .on_play(Effect::DrawCards(3));
        assert!(controller.evaluate_action(&village, 1) > controller.evaluate_action(&smithy, 1));
    }

    #[test]
    fn test_junk_scores_below_zero() {
        let controller = HeuristicController::new(PlayerId::new(0));
        let curse = CardDefinition::new("Curse", 0)
            .with_types(&[CardType::Curse])
            .victory_points(-1);
        let estate = CardDefinition::new("Estate", 2)
            .with_types(&[CardType::Victory])
            .victory_points(1);
        let gold = CardDefinition::new("Gold", 6)
            .with_types(&[CardType::Treasure])
            .worth(3);
        assert!(controller.evaluate_card(&curse) < controller.evaluate_card(&estate));
        assert!(controller.evaluate_card(&estate) < 0);
        assert!(controller.evaluate_card(&gold) > 0);
    }

    #[test]
    fn test_wants_best() {
        assert!(HeuristicController::wants_best("Choose an action to play twice"));
        assert!(HeuristicController::wants_best("Gain a card costing up to $4"));
        assert!(!HeuristicController::wants_best("Discard any number of cards"));
        assert!(!HeuristicController::wants_best("Trash up to 4 cards"));
    }
}
