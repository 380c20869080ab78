//! Scripted controller for deterministic testing
//!
//! Answers prompts from a fixed queue of answers. Answers name cards and piles
//! rather than ids, so a script can be written before the game deals its cards.
//! Once the queue is exhausted (or an answer doesn't fit the prompt) the
//! controller falls back to a passive default: play every treasure, buy
//! nothing, pick the minimum.

use crate::core::{CardId, PlayerId};
use crate::game::controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};
use crate::{DominionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One queued answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptedAnswer {
    /// A single card, by name, out of the offered cards
    Card(String),
    /// Several cards by name; a name may repeat to pick several copies
    Cards(Vec<String>),
    /// A supply pile by name
    Pile(String),
    Bool(bool),
    /// Option indices for an effect menu
    Effects(Vec<usize>),
    Integer(i64),
    /// Decline: no action, no treasures, no buy, no cards
    Pass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedController {
    player_id: PlayerId,
    answers: VecDeque<ScriptedAnswer>,
    /// Number of answers consumed so far
    pub consumed: usize,
}

impl ScriptedController {
    pub fn new(player_id: PlayerId, answers: Vec<ScriptedAnswer>) -> Self {
        ScriptedController {
            player_id,
            answers: answers.into(),
            consumed: 0,
        }
    }

    /// Build from script text; see `parse_script`
    pub fn from_script(player_id: PlayerId, script: &str) -> Result<Self> {
        Ok(Self::new(player_id, parse_script(script)?))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> Option<ScriptedAnswer> {
        let answer = self.answers.pop_front();
        if answer.is_some() {
            self.consumed += 1;
        }
        answer
    }

    fn log(&self, view: &GameStateView, message: &str) {
        view.logger().controller_choice("SCRIPT", message);
    }
}

/// Pick offered cards by name; each name takes the first unused card with that name
fn cards_by_name(view: &GameStateView, offered: &[CardId], names: &[String]) -> Vec<CardId> {
    let mut picked = Vec::with_capacity(names.len());
    for name in names {
        let found = offered
            .iter()
            .copied()
            .find(|&id| !picked.contains(&id) && view.card_name(id).eq_ignore_ascii_case(name));
        if let Some(id) = found {
            picked.push(id);
        }
    }
    picked
}

impl PlayerController for ScriptedController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn choose_action_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<CardId> {
        let chosen = match self.next_answer() {
            Some(ScriptedAnswer::Card(name)) => {
                cards_by_name(view, playable, &[name]).first().copied()
            }
            _ => None,
        };
        match chosen {
            Some(card) => self.log(view, &format!("plays {}", view.card_name(card))),
            None => self.log(view, "ends action phase"),
        }
        chosen
    }

    fn choose_treasures_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<Vec<CardId>> {
        // Treasures are played without consuming script answers unless one is queued for it
        match self.answers.front() {
            Some(ScriptedAnswer::Cards(_)) | Some(ScriptedAnswer::Pass) => {}
            _ => return Some(playable.to_vec()),
        }
        match self.next_answer() {
            Some(ScriptedAnswer::Cards(names)) => {
                let cards = cards_by_name(view, playable, &names);
                self.log(view, &format!("plays {} treasure(s)", cards.len()));
                Some(cards)
            }
            _ => None,
        }
    }

    fn choose_card_to_buy(&mut self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        let choice = match self.next_answer() {
            Some(ScriptedAnswer::Pile(name)) | Some(ScriptedAnswer::Card(name)) => buyable
                .iter()
                .find(|pile| pile.eq_ignore_ascii_case(&name))
                .cloned(),
            _ => None,
        };
        match &choice {
            Some(pile) => self.log(view, &format!("buys {pile}")),
            None => self.log(view, "buys nothing"),
        }
        choice
    }

    fn choose_cards_from_list(&mut self, view: &GameStateView, choice: &CardChoice) -> Vec<CardId> {
        let cards = match self.next_answer() {
            Some(ScriptedAnswer::Cards(names)) => cards_by_name(view, &choice.cards, &names),
            Some(ScriptedAnswer::Card(name)) => cards_by_name(view, &choice.cards, &[name]),
            Some(ScriptedAnswer::Pass) => Vec::new(),
            _ => choice.cards.iter().take(choice.min).copied().collect(),
        };
        self.log(
            view,
            &format!("{}: chose {} card(s)", choice.prompt, cards.len()),
        );
        cards
    }

    fn choose_pile_from_supply(
        &mut self,
        view: &GameStateView,
        choice: &PileChoice,
    ) -> Option<String> {
        let pile = match self.next_answer() {
            Some(ScriptedAnswer::Pile(name)) | Some(ScriptedAnswer::Card(name)) => choice
                .piles
                .iter()
                .find(|p| p.eq_ignore_ascii_case(&name))
                .cloned(),
            _ => None,
        };
        self.log(view, &format!("{}: {:?}", choice.prompt, pile));
        pile
    }

    fn choose_boolean(&mut self, view: &GameStateView, choice: &BooleanChoice) -> bool {
        let answer = match self.next_answer() {
            Some(ScriptedAnswer::Bool(b)) => b,
            Some(ScriptedAnswer::Pass) => false,
            _ => choice.default,
        };
        self.log(view, &format!("{}: {answer}", choice.prompt));
        answer
    }

    fn choose_effects_from_list(
        &mut self,
        view: &GameStateView,
        choice: &EffectChoice,
    ) -> Vec<usize> {
        let picked = match self.next_answer() {
            Some(ScriptedAnswer::Effects(indices)) => indices,
            Some(ScriptedAnswer::Pass) => Vec::new(),
            _ => (0..choice.min).collect(),
        };
        self.log(view, &format!("{}: options {picked:?}", choice.prompt));
        picked
    }

    fn choose_integer(&mut self, view: &GameStateView, choice: &IntegerChoice) -> i64 {
        let value = match self.next_answer() {
            Some(ScriptedAnswer::Integer(n)) => n,
            _ => choice.default,
        };
        self.log(view, &format!("{}: {value}", choice.prompt));
        value
    }
}

/// Parse a script: one answer per line or `;`-separated
///
/// ```text
/// card Village        # play or pick one card by name
/// cards Copper,Estate # several cards
/// pile Smithy         # buy or choose a supply pile
/// yes / no            # boolean prompts
/// effects 0,2         # option indices
/// int 3
/// pass
/// ```
///
/// `#` starts a comment; blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ScriptedAnswer>> {
    let mut answers = Vec::new();
    for raw in script.split(['\n', ';']) {
        let entry = raw.split('#').next().unwrap_or("").trim();
        if entry.is_empty() {
            continue;
        }
        let (keyword, rest) = match entry.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (entry, ""),
        };
        let list = || -> Vec<String> {
            rest.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        };
        let bad = || DominionError::InvalidSetup(format!("bad script entry {entry:?}"));

        let answer = match keyword.to_ascii_lowercase().as_str() {
            "card" if !rest.is_empty() => ScriptedAnswer::Card(rest.to_string()),
            "cards" => ScriptedAnswer::Cards(list()),
            "pile" | "buy" if !rest.is_empty() => ScriptedAnswer::Pile(rest.to_string()),
            "yes" | "true" => ScriptedAnswer::Bool(true),
            "no" | "false" => ScriptedAnswer::Bool(false),
            "effects" => ScriptedAnswer::Effects(
                list()
                    .iter()
                    .map(|s| s.parse().map_err(|_| bad()))
                    .collect::<Result<_>>()?,
            ),
            "int" => ScriptedAnswer::Integer(rest.parse().map_err(|_| bad())?),
            "pass" => ScriptedAnswer::Pass,
            _ => return Err(bad()),
        };
        answers.push(answer);
    }
    Ok(answers)
}
