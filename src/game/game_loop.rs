//! Game loop implementation
//!
//! Drives turns: start of turn, action phase, treasures, buys, cleanup, and
//! checks the end condition once per completed turn.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating all format! allocations in the hot loop.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.game.state.logger.verbose(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::core::{CardId, PlayerId};
use crate::game::events::EventKind;
use crate::game::{Game, TurnPhase};
use crate::Result;

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome and warnings
    Minimal = 1,
    /// Normal - turns and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - draws, shuffles and controller choices
    Verbose = 3,
}

/// Final standing of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub name: String,
    pub victory_points: i32,
    pub turns: u32,
}

/// Result of running a game to completion
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Winners; several on a full tie, empty if the game didn't finish
    pub winners: Vec<PlayerId>,
    pub scores: Vec<PlayerScore>,
    /// Total number of turns played, all players together
    pub turns_played: u32,
    pub end_reason: GameEndReason,
}

/// Reason the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEndReason {
    /// The Province pile ran out
    ProvincesGone,
    /// Three or more supply piles ran out
    PilesEmptied(usize),
    /// Game reached maximum turn limit
    TurnLimit,
    /// `run_turns` finished its turns without the game ending
    Manual,
}

/// Game loop manager
pub struct GameLoop<'a> {
    pub game: &'a mut Game,
    /// Maximum turns before stopping the game
    max_turns: u32,
    turns_elapsed: u32,
}

impl<'a> GameLoop<'a> {
    pub fn new(game: &'a mut Game) -> Self {
        GameLoop {
            game,
            max_turns: 1000,
            turns_elapsed: 0,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set verbosity on the game's logger, which controllers also use
    pub fn with_verbosity(self, verbosity: VerbosityLevel) -> Self {
        self.game.state.logger.set_verbosity(verbosity);
        self
    }

    /// Run turns until the game ends or hits the turn limit
    pub fn run_game(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.run_turn_once()? {
                self.game.notify_game_end(&result.winners);
                return Ok(result);
            }
        }
    }

    /// Run up to `turns_to_run` turns, stopping early if the game ends
    pub fn run_turns(&mut self, turns_to_run: u32) -> Result<GameResult> {
        for _ in 0..turns_to_run {
            if let Some(result) = self.run_turn_once()? {
                return Ok(result);
            }
        }
        Ok(GameResult {
            winners: Vec::new(),
            scores: self.scores()?,
            turns_played: self.turns_elapsed,
            end_reason: GameEndReason::Manual,
        })
    }

    /// Play one full turn; Some(result) if the game is over afterwards
    pub fn run_turn_once(&mut self) -> Result<Option<GameResult>> {
        self.game.start_turn()?;
        self.action_phase()?;
        self.buy_phase()?;
        self.game.clean_up()?;
        self.turns_elapsed += 1;

        if self.game.is_game_finished() {
            let reason = if self.game.state.supply.count("Province") == 0
                && self.game.state.supply.pile("Province").is_some()
            {
                GameEndReason::ProvincesGone
            } else {
                GameEndReason::PilesEmptied(self.game.state.supply.empty_pile_count())
            };
            return self.finish(reason).map(Some);
        }
        if self.turns_elapsed >= self.max_turns {
            return self.finish(GameEndReason::TurnLimit).map(Some);
        }
        Ok(None)
    }

    fn action_phase(&mut self) -> Result<()> {
        let player = self.game.state.active_player_id();
        loop {
            let p = self.game.state.player(player)?;
            if p.actions == 0 {
                break;
            }
            let playable = self.cards_in_hand(player, |d| d.is_action())?;
            if playable.is_empty() {
                break;
            }
            let Some(card) = self.game.choose_action_to_play(player, &playable)? else {
                break;
            };
            self.game.state.player_mut(player)?.actions -= 1;
            self.game.play_card(card, player)?;
            self.game.resolve_card(card, player)?;
        }
        Ok(())
    }

    fn buy_phase(&mut self) -> Result<()> {
        let player = self.game.state.active_player_id();
        self.game.state.phase = TurnPhase::Buy;

        loop {
            let playable = self.cards_in_hand(player, |d| d.is_treasure())?;
            if playable.is_empty() {
                break;
            }
            let Some(treasures) = self.game.choose_treasures_to_play(player, &playable)? else {
                break;
            };
            if treasures.is_empty() {
                break;
            }
            for card in treasures {
                self.game.play_card(card, player)?;
                self.game.resolve_card(card, player)?;
            }
        }

        loop {
            let buyable = self.game.state.buyable_piles(player);
            if buyable.is_empty() {
                break;
            }
            let Some(pile) = self.game.choose_card_to_buy(player, &buyable)? else {
                break;
            };
            self.game.buy_card(&pile, player)?;
            let p = self.game.state.player(player)?;
            log_if_verbose!(self, "{player} has {} buy(s), ${} left", p.buys, p.money);
        }
        Ok(())
    }

    fn cards_in_hand(
        &self,
        player: PlayerId,
        pred: impl Fn(&crate::core::CardDefinition) -> bool,
    ) -> Result<Vec<CardId>> {
        let mut cards = Vec::new();
        for &id in self.game.state.player(player)?.hand() {
            if pred(&self.game.state.card(id)?.definition) {
                cards.push(id);
            }
        }
        Ok(cards)
    }

    fn scores(&self) -> Result<Vec<PlayerScore>> {
        let state = &self.game.state;
        let mut scores = Vec::with_capacity(state.players.len());
        for p in &state.players {
            scores.push(PlayerScore {
                player: p.id,
                name: p.name.clone(),
                victory_points: state.victory_points(p.id)?,
                turns: p.turns,
            });
        }
        Ok(scores)
    }

    fn finish(&mut self, end_reason: GameEndReason) -> Result<GameResult> {
        let winners = self.game.calculate_winners()?;
        let scores = self.scores()?;
        let first = winners.first().copied().unwrap_or(PlayerId::new(0));
        self.game.state.publish_event(
            first,
            EventKind::GameEnd {
                winners: winners.clone(),
                scores: scores.iter().map(|s| s.victory_points).collect(),
            },
        );
        Ok(GameResult {
            winners,
            scores,
            turns_played: self.turns_elapsed,
            end_reason,
        })
    }
}
