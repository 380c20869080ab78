//! The game engine: state plus the controllers that make decisions for it
//!
//! Every prompt goes through a method here that validates the answer against
//! the requested cardinality and candidate set before the engine acts on it.

use crate::core::{CardId, CardPile, EffectConfig, PlayerId};
use crate::game::controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};
use crate::game::GameState;
use crate::{DominionError, Result};

/// How many out-of-range answers a controller may give before the game fails
const MAX_REPROMPTS: usize = 16;

pub struct Game {
    pub state: GameState,
    controllers: Vec<Box<dyn PlayerController>>,
}

impl Game {
    /// Pair a state with one controller per seat, in seat order
    pub fn new(state: GameState, controllers: Vec<Box<dyn PlayerController>>) -> Result<Self> {
        if controllers.len() != state.players.len() {
            return Err(DominionError::InvalidSetup(format!(
                "{} controllers for {} players",
                controllers.len(),
                state.players.len()
            )));
        }
        for (i, controller) in controllers.iter().enumerate() {
            if controller.player_id() != PlayerId::new(i) {
                return Err(DominionError::InvalidSetup(format!(
                    "controller in seat {} is for {}",
                    i + 1,
                    controller.player_id()
                )));
            }
        }
        Ok(Game { state, controllers })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self, player: PlayerId) -> GameStateView<'_> {
        GameStateView::new(&self.state, player)
    }

    /// Run `f` with the player's controller and a view of the current state
    fn ask<R>(
        &mut self,
        player: PlayerId,
        f: impl FnOnce(&mut dyn PlayerController, &GameStateView) -> R,
    ) -> Result<R> {
        let controller = self
            .controllers
            .get_mut(player.index())
            .ok_or(DominionError::PlayerNotFound(player))?;
        let view = GameStateView::new(&self.state, player);
        Ok(f(controller.as_mut(), &view))
    }

    fn reject(&self, player: PlayerId, what: &str, attempt: usize) -> Result<()> {
        self.state
            .logger
            .warn(&format!("{player} gave an invalid answer to {what:?}; asking again"));
        if attempt + 1 >= MAX_REPROMPTS {
            return Err(DominionError::InvalidChoice(format!(
                "{player} kept answering {what:?} out of range"
            )));
        }
        Ok(())
    }

    pub fn choose_action_to_play(
        &mut self,
        player: PlayerId,
        playable: &[CardId],
    ) -> Result<Option<CardId>> {
        for attempt in 0..MAX_REPROMPTS {
            let answer = self.ask(player, |c, v| c.choose_action_to_play(v, playable))?;
            match answer {
                None => return Ok(None),
                Some(card) if playable.contains(&card) => return Ok(Some(card)),
                Some(_) => self.reject(player, "action to play", attempt)?,
            }
        }
        Ok(None)
    }

    pub fn choose_treasures_to_play(
        &mut self,
        player: PlayerId,
        playable: &[CardId],
    ) -> Result<Option<Vec<CardId>>> {
        for attempt in 0..MAX_REPROMPTS {
            let answer = self.ask(player, |c, v| c.choose_treasures_to_play(v, playable))?;
            match answer {
                None => return Ok(None),
                Some(cards) => match select_from_pool(&cards, playable, playable.len()) {
                    Some(valid) => return Ok(Some(valid)),
                    None => self.reject(player, "treasures to play", attempt)?,
                },
            }
        }
        Ok(None)
    }

    pub fn choose_card_to_buy(
        &mut self,
        player: PlayerId,
        buyable: &[String],
    ) -> Result<Option<String>> {
        for attempt in 0..MAX_REPROMPTS {
            let answer = self.ask(player, |c, v| c.choose_card_to_buy(v, buyable))?;
            match answer {
                None => return Ok(None),
                Some(pile) if buyable.contains(&pile) => return Ok(Some(pile)),
                Some(_) => self.reject(player, "card to buy", attempt)?,
            }
        }
        Ok(None)
    }

    /// Ask for between `min` and `max` cards of `cards`
    ///
    /// A pool smaller than `min` is selected whole without asking. Answers with
    /// unknown or repeated cards, or fewer than `min`, are asked again; answers
    /// longer than `max` are cut at `max`.
    pub fn choose_cards(&mut self, player: PlayerId, choice: CardChoice) -> Result<Vec<CardId>> {
        if choice.cards.is_empty() || choice.max == 0 {
            return Ok(Vec::new());
        }
        if choice.cards.len() < choice.min {
            return Ok(choice.cards);
        }
        for attempt in 0..MAX_REPROMPTS {
            let answer = self.ask(player, |c, v| c.choose_cards_from_list(v, &choice))?;
            match select_from_pool(&answer, &choice.cards, choice.max) {
                Some(valid) if valid.len() >= choice.min => return Ok(valid),
                _ => self.reject(player, &choice.prompt, attempt)?,
            }
        }
        Ok(Vec::new())
    }

    /// Exactly one card if there is any candidate
    pub fn choose_one_card(
        &mut self,
        player: PlayerId,
        prompt: &str,
        cards: Vec<CardId>,
        source: Option<CardId>,
    ) -> Result<Option<CardId>> {
        let chosen = self.choose_cards(
            player,
            CardChoice {
                prompt: prompt.to_string(),
                cards,
                min: 1,
                max: 1,
                source,
            },
        )?;
        Ok(chosen.first().copied())
    }

    /// Ask for a supply pile among those passing `filter`
    ///
    /// None if no pile qualifies or the player declines.
    pub fn choose_pile(
        &mut self,
        player: PlayerId,
        prompt: &str,
        source: Option<CardId>,
        filter: impl Fn(&GameState, &CardPile) -> bool,
    ) -> Result<Option<String>> {
        let piles: Vec<String> = self
            .state
            .supply
            .piles()
            .iter()
            .filter(|p| filter(&self.state, p))
            .map(|p| p.name.clone())
            .collect();
        if piles.is_empty() {
            return Ok(None);
        }
        let choice = PileChoice {
            prompt: prompt.to_string(),
            piles,
            source,
        };
        for attempt in 0..MAX_REPROMPTS {
            match self.ask(player, |c, v| c.choose_pile_from_supply(v, &choice))? {
                None => return Ok(None),
                Some(pile) if choice.piles.contains(&pile) => return Ok(Some(pile)),
                Some(_) => self.reject(player, prompt, attempt)?,
            }
        }
        Ok(None)
    }

    pub fn choose_boolean(
        &mut self,
        player: PlayerId,
        prompt: &str,
        default: bool,
        source: Option<CardId>,
    ) -> Result<bool> {
        let choice = BooleanChoice {
            prompt: prompt.to_string(),
            default,
            source,
        };
        self.ask(player, |c, v| c.choose_boolean(v, &choice))
    }

    /// Ask for between `min` and `max` distinct options, returned in the order picked
    pub fn choose_effects(
        &mut self,
        player: PlayerId,
        prompt: &str,
        choices: &[EffectConfig],
        min: usize,
        max: usize,
        source: Option<CardId>,
    ) -> Result<Vec<EffectConfig>> {
        if choices.is_empty() || max == 0 {
            return Ok(Vec::new());
        }
        if choices.len() < min {
            return Ok(choices.to_vec());
        }
        let request = EffectChoice {
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.description.clone()).collect(),
            min,
            max,
            source,
        };
        let indices: Vec<usize> = (0..choices.len()).collect();
        for attempt in 0..MAX_REPROMPTS {
            let answer = self.ask(player, |c, v| c.choose_effects_from_list(v, &request))?;
            match select_from_pool(&answer, &indices, max) {
                Some(valid) if valid.len() >= min => {
                    return Ok(valid.into_iter().map(|i| choices[i].clone()).collect())
                }
                _ => self.reject(player, prompt, attempt)?,
            }
        }
        Ok(Vec::new())
    }

    /// Ask for an integer; out-of-range answers are clamped
    pub fn choose_integer(&mut self, player: PlayerId, choice: IntegerChoice) -> Result<i64> {
        let answer = self.ask(player, |c, v| c.choose_integer(v, &choice))?;
        Ok(answer.clamp(choice.min, choice.max.max(choice.min)))
    }

    /// Notify every controller of the outcome
    pub fn notify_game_end(&mut self, winners: &[PlayerId]) {
        for (i, controller) in self.controllers.iter_mut().enumerate() {
            let player = PlayerId::new(i);
            let view = GameStateView::new(&self.state, player);
            controller.on_game_end(&view, winners.contains(&player));
        }
    }
}

/// Validate an answer against a pool: every item must be in the pool and appear once.
/// Items past `max` are dropped.
fn select_from_pool<T: PartialEq + Copy>(answer: &[T], pool: &[T], max: usize) -> Option<Vec<T>> {
    let mut selected: Vec<T> = Vec::with_capacity(answer.len().min(max));
    for item in answer {
        if !pool.contains(item) || selected.contains(item) {
            return None;
        }
        if selected.len() < max {
            selected.push(*item);
        }
    }
    Some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_from_pool() {
        let pool = [1, 2, 3, 4];
        assert_eq!(select_from_pool(&[3, 1], &pool, 4), Some(vec![3, 1]));
        assert_eq!(select_from_pool(&[3, 1, 2], &pool, 2), Some(vec![3, 1]));
        assert_eq!(select_from_pool(&[5], &pool, 4), None);
        assert_eq!(select_from_pool(&[2, 2], &pool, 4), None);
        assert_eq!(select_from_pool::<i32>(&[], &pool, 4), Some(vec![]));
    }
}
