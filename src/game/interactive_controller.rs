//! Interactive terminal controller for human players
//!
//! Prints numbered menus and reads answers line by line. Invalid input is
//! reported and asked again; end of input declines or takes the default.

use crate::core::{CardId, PlayerId};
use crate::game::controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};
use std::io::{self, BufRead, Write};

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Pass,
    All,
    /// Input closed
    Eof,
    Numbers(Vec<usize>),
    /// Informational command; show something and ask again
    Info(char),
    Invalid,
}

fn parse_answer(line: &str) -> Answer {
    let trimmed = line.trim();
    match trimmed {
        "" | "p" | "pass" => return Answer::Pass,
        "a" | "all" => return Answer::All,
        "?" | "h" | "s" => return Answer::Info(trimmed.chars().next().unwrap_or('?')),
        _ => {}
    }
    let numbers: Result<Vec<usize>, _> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect();
    match numbers {
        Ok(n) => Answer::Numbers(n),
        Err(_) => Answer::Invalid,
    }
}

/// A controller that prompts a human player for decisions
pub struct InteractiveController {
    player_id: PlayerId,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl InteractiveController {
    /// Controller reading stdin and writing stdout
    pub fn new(player_id: PlayerId) -> Self {
        Self::with_io(
            player_id,
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    pub fn with_io(player_id: PlayerId, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        InteractiveController {
            player_id,
            input,
            output,
        }
    }

    fn say(&mut self, text: &str) {
        // A closed terminal leaves nothing to report to
        let _ = writeln!(self.output, "{text}");
    }

    fn read_answer(&mut self, prompt: &str) -> Answer {
        let _ = write!(self.output, "{prompt} ");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Answer::Eof,
            Ok(_) => parse_answer(&line),
        }
    }

    /// Ask until the answer is a pass or `min..=max` distinct indices below `options`
    fn ask_indices(
        &mut self,
        view: &GameStateView,
        prompt: &str,
        options: usize,
        min: usize,
        max: usize,
    ) -> Option<Vec<usize>> {
        loop {
            match self.read_answer(prompt) {
                Answer::Eof => return None,
                Answer::Pass if min == 0 => return None,
                Answer::Pass => self.say(&format!("Choose at least {min}.")),
                Answer::Info('?') | Answer::Info('h') => self.display_help(),
                Answer::Info(_) => self.display_status(view),
                Answer::Numbers(n) => {
                    let distinct = n.iter().enumerate().all(|(i, x)| !n[..i].contains(x));
                    if distinct && n.iter().all(|&i| i < options) && (min..=max).contains(&n.len())
                    {
                        return Some(n);
                    }
                    self.say(&format!(
                        "Invalid choice. Enter {min} to {max} distinct numbers from 0-{}.",
                        options.saturating_sub(1)
                    ));
                }
                Answer::All | Answer::Invalid => self.say("Invalid input; '?' for help."),
            }
        }
    }

    fn display_help(&mut self) {
        self.say("Enter the number of an option, several separated by spaces,");
        self.say("'p' or an empty line to pass, 's' to show your status.");
    }

    fn display_status(&mut self, view: &GameStateView) {
        let hand: Vec<String> = view.hand().iter().map(|&c| view.card_name(c)).collect();
        let status = format!(
            "Turn {} ({}): {} action(s), {} buy(s), ${}; deck {}; hand: {}",
            view.turn(),
            view.phase(),
            view.actions(),
            view.buys(),
            view.money(),
            view.deck_size(),
            hand.join(", ")
        );
        self.say(&status);
    }

    fn display_cards(&mut self, view: &GameStateView, cards: &[CardId]) {
        for (idx, &card) in cards.iter().enumerate() {
            let cost = view.card_cost(card);
            self.say(&format!("  [{idx}] {} (${cost})", view.card_name(card)));
        }
    }
}

impl PlayerController for InteractiveController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn choose_action_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<CardId> {
        self.display_status(view);
        self.say("Actions you can play:");
        self.display_cards(view, playable);
        let prompt = "Play which action ('p' to stop)?";
        let picked = self.ask_indices(view, prompt, playable.len(), 0, 1)?;
        picked.first().map(|&i| playable[i])
    }

    fn choose_treasures_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<Vec<CardId>> {
        self.say("Treasures in hand:");
        self.display_cards(view, playable);
        loop {
            match self.read_answer("Play which treasures ('a' for all, 'p' for none)?") {
                Answer::Pass | Answer::Eof => return None,
                Answer::All => return Some(playable.to_vec()),
                Answer::Numbers(n) if n.iter().all(|&i| i < playable.len()) => {
                    return Some(n.into_iter().map(|i| playable[i]).collect())
                }
                Answer::Info(_) => self.display_status(view),
                _ => self.say("Invalid choice."),
            }
        }
    }

    fn choose_card_to_buy(&mut self, view: &GameStateView, buyable: &[String]) -> Option<String> {
        self.say(&format!(
            "You have ${} and {} buy(s). Supply:",
            view.money(),
            view.buys()
        ));
        for (idx, pile) in buyable.iter().enumerate() {
            let cost = view.pile_cost(pile).unwrap_or(0);
            let left = view.pile_count(pile);
            self.say(&format!("  [{idx}] {pile} (${cost}, {left} left)"));
        }
        let picked = self.ask_indices(view, "Buy which card ('p' to stop)?", buyable.len(), 0, 1)?;
        picked.first().map(|&i| buyable[i].clone())
    }

    fn choose_cards_from_list(&mut self, view: &GameStateView, choice: &CardChoice) -> Vec<CardId> {
        self.say(&choice.prompt);
        self.display_cards(view, &choice.cards);
        let prompt = format!("Choose {} to {}:", choice.min, choice.max);
        self.ask_indices(view, &prompt, choice.cards.len(), choice.min, choice.max)
            .unwrap_or_default()
            .into_iter()
            .map(|i| choice.cards[i])
            .collect()
    }

    fn choose_pile_from_supply(
        &mut self,
        view: &GameStateView,
        choice: &PileChoice,
    ) -> Option<String> {
        self.say(&choice.prompt);
        for (idx, pile) in choice.piles.iter().enumerate() {
            let cost = view.pile_cost(pile).unwrap_or(0);
            self.say(&format!("  [{idx}] {pile} (${cost})"));
        }
        let picked = self.ask_indices(view, "Which pile?", choice.piles.len(), 0, 1)?;
        picked.first().map(|&i| choice.piles[i].clone())
    }

    fn choose_boolean(&mut self, _view: &GameStateView, choice: &BooleanChoice) -> bool {
        let hint = if choice.default { "Y/n" } else { "y/N" };
        loop {
            let _ = write!(self.output, "{} [{hint}] ", choice.prompt);
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return choice.default,
                Ok(_) => {}
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "" => return choice.default,
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.say("Answer y or n."),
            }
        }
    }

    fn choose_effects_from_list(
        &mut self,
        view: &GameStateView,
        choice: &EffectChoice,
    ) -> Vec<usize> {
        self.say(&choice.prompt);
        for (idx, option) in choice.choices.iter().enumerate() {
            self.say(&format!("  [{idx}] {option}"));
        }
        let prompt = format!("Choose {} to {}, in order:", choice.min, choice.max);
        self.ask_indices(view, &prompt, choice.choices.len(), choice.min, choice.max)
            .unwrap_or_default()
    }

    fn choose_integer(&mut self, _view: &GameStateView, choice: &IntegerChoice) -> i64 {
        loop {
            let _ = write!(
                self.output,
                "{} ({}-{}, default {}) ",
                choice.prompt, choice.min, choice.max, choice.default
            );
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return choice.default,
                Ok(_) => {}
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return choice.default;
            }
            match trimmed.parse::<i64>() {
                Ok(n) if (choice.min..=choice.max).contains(&n) => return n,
                _ => self.say("Out of range."),
            }
        }
    }

    fn on_game_end(&mut self, view: &GameStateView, won: bool) {
        let outcome = if won { "You win" } else { "You lose" };
        self.say(&format!("{outcome} with {} VP.", view.victory_points()));
    }
}
