//! Game initialization from a registry and a game config
//!
//! Builds the supply, deals starting decks, draws opening hands and picks the
//! first player. Every random decision comes from the one seeded stream the game
//! keeps using afterwards.

use crate::core::{Card, CardPile, EntityStore, GameRng, Kingdom, Player, PlayerId, Supply};
use crate::game::{EventKind, GameState, OutputFormat, OutputMode, VerbosityLevel, HAND_SIZE};
use crate::loader::{CardRegistry, KingdomChoice};
use crate::{DominionError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

const STARTING_COPPERS: usize = 7;
const STARTING_ESTATES: usize = 3;
const KINGDOM_PILE_SIZE: usize = 10;

/// Everything needed to set up one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in table order
    pub players: Vec<String>,
    pub kingdom: KingdomChoice,
    /// Adds Platinum and Colony piles
    pub colony: bool,
    pub seed: u64,
    /// Logger settings, in force before the first event is published
    #[serde(default)]
    pub verbosity: VerbosityLevel,
    #[serde(default)]
    pub log_format: OutputFormat,
    #[serde(default)]
    pub log_output: OutputMode,
}

impl GameConfig {
    pub fn new(players: impl IntoIterator<Item = impl Into<String>>) -> Self {
        GameConfig {
            players: players.into_iter().map(Into::into).collect(),
            kingdom: KingdomChoice::default(),
            colony: false,
            seed: 0,
            verbosity: VerbosityLevel::default(),
            log_format: OutputFormat::default(),
            log_output: OutputMode::default(),
        }
    }

    pub fn with_kingdom(mut self, kingdom: KingdomChoice) -> Self {
        self.kingdom = kingdom;
        self
    }

    pub fn with_colony(mut self, colony: bool) -> Self {
        self.colony = colony;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_log_format(mut self, format: OutputFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_log_output(mut self, mode: OutputMode) -> Self {
        self.log_output = mode;
        self
    }
}

/// Pile sizes that depend on the player count
fn victory_pile_size(players: usize) -> usize {
    if players == 2 {
        8
    } else {
        12
    }
}

/// Game builder for initializing games from a card registry
pub struct GameInitializer<'a> {
    registry: &'a CardRegistry,
}

impl<'a> GameInitializer<'a> {
    pub fn new(registry: &'a CardRegistry) -> Self {
        GameInitializer { registry }
    }

    /// Set up a game ready for its first turn
    pub fn init_game(&self, config: &GameConfig) -> Result<GameState> {
        let n = config.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(DominionError::InvalidSetup(format!(
                "{n} players; a game needs {MIN_PLAYERS} to {MAX_PLAYERS}"
            )));
        }

        let mut rng = GameRng::new(config.seed);
        let kingdom_names = config.kingdom.card_names(self.registry, &mut rng)?;

        let mut cards = EntityStore::new();
        let supply = self.build_supply(&mut cards, n, config.colony, &kingdom_names)?;

        let mut players = Vec::with_capacity(n);
        for (index, name) in config.players.iter().enumerate() {
            let mut player = Player::new(PlayerId::new(index), name.clone());
            for (card, count) in [("Copper", STARTING_COPPERS), ("Estate", STARTING_ESTATES)] {
                for _ in 0..count {
                    let id = self.registry.new_instance(card, &mut cards)?;
                    player.zones.deck.add(id);
                }
            }
            rng.shuffle(&mut player.zones.deck.cards);
            players.push(player);
        }

        let mut state = GameState::new(cards, players, supply, config.seed);
        state.logger.set_verbosity(config.verbosity);
        state.logger.set_output_format(config.log_format);
        state.logger.set_output_mode(config.log_output);

        let first = rng.random_int(0, n as i64) as usize;
        state.rng = RefCell::new(rng);
        state.active_player = first;
        state.publish_event(
            PlayerId::new(first),
            EventKind::GameStart {
                kingdom: kingdom_names,
            },
        );

        for index in 0..n {
            state.draw_cards(PlayerId::new(index), HAND_SIZE)?;
        }
        Ok(state)
    }

    fn pile(
        &self,
        cards: &mut EntityStore<Card>,
        name: &str,
        size: usize,
    ) -> Result<CardPile> {
        let definition = self.registry.lookup(name)?.clone();
        let mut ids = Vec::with_capacity(size);
        for _ in 0..size {
            ids.push(self.registry.new_instance(name, cards)?);
        }
        Ok(CardPile::new(definition, ids))
    }

    fn build_supply(
        &self,
        cards: &mut EntityStore<Card>,
        players: usize,
        colony: bool,
        kingdom_names: &[String],
    ) -> Result<Supply> {
        let victory = victory_pile_size(players);
        let mut base = vec![
            self.pile(cards, "Copper", 60 - STARTING_COPPERS * players)?,
            self.pile(cards, "Silver", 40)?,
            self.pile(cards, "Gold", 30)?,
        ];
        if colony {
            base.push(self.pile(cards, "Platinum", 12)?);
        }
        base.push(self.pile(cards, "Estate", victory)?);
        base.push(self.pile(cards, "Duchy", victory)?);
        base.push(self.pile(cards, "Province", victory)?);
        if colony {
            base.push(self.pile(cards, "Colony", victory)?);
        }
        base.push(self.pile(cards, "Curse", 10 * (players - 1))?);

        let mut kingdom = Vec::with_capacity(kingdom_names.len());
        for name in kingdom_names {
            let size = if self.registry.lookup(name)?.is_victory() {
                victory
            } else {
                KINGDOM_PILE_SIZE
            };
            kingdom.push(self.pile(cards, name, size)?);
        }
        Supply::new(base, Kingdom::new(kingdom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CardRegistry {
        CardRegistry::with_catalog().unwrap()
    }

    #[test]
    fn test_two_player_setup() {
        let registry = registry();
        let state = GameInitializer::new(&registry)
            .init_game(&GameConfig::new(["Alice", "Bob"]).with_seed(42))
            .unwrap();

        assert_eq!(state.players.len(), 2);
        for player in &state.players {
            assert_eq!(player.hand().len(), 5);
            assert_eq!(player.zones.deck.len(), 5);
            assert_eq!(player.all_cards().len(), 10);
        }
        assert_eq!(state.supply.count("Copper"), 46);
        assert_eq!(state.supply.count("Province"), 8);
        assert_eq!(state.supply.count("Curse"), 10);
        assert!(state.supply.pile("Colony").is_none());
        assert_eq!(state.supply.kingdom_piles().len(), Kingdom::SIZE);
    }

    #[test]
    fn test_four_players_with_colony() {
        let registry = registry();
        let config = GameConfig::new(["A", "B", "C", "D"])
            .with_colony(true)
            .with_kingdom("big-money-test".parse().unwrap());
        let state = GameInitializer::new(&registry).init_game(&config).unwrap();

        assert_eq!(state.supply.count("Copper"), 32);
        assert_eq!(state.supply.count("Province"), 12);
        assert_eq!(state.supply.count("Colony"), 12);
        assert_eq!(state.supply.count("Platinum"), 12);
        assert_eq!(state.supply.count("Curse"), 30);
        // Gardens is a Victory kingdom card
        assert_eq!(state.supply.count("Gardens"), 12);
        assert_eq!(state.supply.count("Smithy"), 10);
    }

    #[test]
    fn test_player_count_validated() {
        let registry = registry();
        let init = GameInitializer::new(&registry);
        assert!(matches!(
            init.init_game(&GameConfig::new(["Solo"])),
            Err(DominionError::InvalidSetup(_))
        ));
        let seven: Vec<String> = (0..7).map(|i| format!("P{i}")).collect();
        assert!(init.init_game(&GameConfig::new(seven)).is_err());
    }

    #[test]
    fn test_same_seed_same_setup() {
        let registry = registry();
        let init = GameInitializer::new(&registry);
        let config = GameConfig::new(["Alice", "Bob", "Carol"])
            .with_kingdom(KingdomChoice::Random)
            .with_seed(7);
        let a = init.init_game(&config).unwrap();
        let b = init.init_game(&config).unwrap();
        assert_eq!(a.active_player, b.active_player);
        assert_eq!(a.events.events(), b.events.events());
        for (pa, pb) in a.players.iter().zip(&b.players) {
            let names = |s: &GameState, hand: &[crate::core::CardId]| {
                hand.iter().map(|&c| s.card_name(c)).collect::<Vec<_>>()
            };
            assert_eq!(names(&a, pa.hand()), names(&b, pb.hand()));
        }
    }

    #[test]
    fn test_game_start_precedes_opening_draws() {
        let registry = registry();
        let state = GameInitializer::new(&registry)
            .init_game(&GameConfig::new(["Alice", "Bob"]))
            .unwrap();
        let events = state.events.events();
        let first = &events[0];
        assert!(matches!(
            &first.kind,
            EventKind::GameStart { kingdom } if kingdom.len() == Kingdom::SIZE
        ));
        assert_eq!(first.player, PlayerId::new(state.active_player));
        let draws: Vec<_> = events[1..]
            .iter()
            .map(|e| (e.player.index(), e.kind.clone()))
            .collect();
        assert_eq!(
            draws,
            vec![
                (0, EventKind::DrawCards { count: HAND_SIZE as usize }),
                (1, EventKind::DrawCards { count: HAND_SIZE as usize }),
            ]
        );
    }

    #[test]
    fn test_logger_settings_apply_before_game_start() {
        let registry = registry();
        let config = GameConfig::new(["Alice", "Bob"])
            .with_verbosity(VerbosityLevel::Silent)
            .with_log_format(OutputFormat::Json)
            .with_log_output(OutputMode::Memory);
        let state = GameInitializer::new(&registry).init_game(&config).unwrap();

        assert_eq!(state.logger.verbosity(), VerbosityLevel::Silent);
        assert_eq!(state.logger.output_mode(), OutputMode::Memory);
        let logs = state.logger.logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].category.as_deref(), Some("event"));
        assert!(logs[0].message.contains("\"type\":\"GameStart\""));
    }

    #[test]
    fn test_default_config_does_not_capture() {
        let registry = registry();
        let state = GameInitializer::new(&registry)
            .init_game(&GameConfig::new(["Alice", "Bob"]).with_verbosity(VerbosityLevel::Silent))
            .unwrap();
        assert_eq!(state.logger.output_mode(), OutputMode::Stdout);
        assert!(state.logger.logs().is_empty());
    }
}
