//! Batch simulation: many AI-vs-AI games in parallel with aggregated statistics
//!
//! Games run on the rayon thread pool. Each game gets its own seed derived from
//! the base seed and the game index, so a batch is reproducible regardless of
//! how the pool schedules it.

use crate::core::PlayerId;
use crate::game::{
    Game, GameEndReason, GameLoop, GameResult, HeuristicController, PlayerController,
    RandomController, VerbosityLevel,
};
use crate::loader::{CardRegistry, GameConfig, GameInitializer, KingdomChoice};
use crate::Result;
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// AI controller kinds that can sit at a simulated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiType {
    Random,
    Heuristic,
}

impl AiType {
    fn controller(self, player: PlayerId) -> Box<dyn PlayerController> {
        match self {
            AiType::Random => Box::new(RandomController::new(player)),
            AiType::Heuristic => Box::new(HeuristicController::new(player)),
        }
    }
}

impl fmt::Display for AiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiType::Random => write!(f, "random"),
            AiType::Heuristic => write!(f, "heuristic"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// One AI per seat, in table order
    pub seats: Vec<AiType>,
    pub games: usize,
    pub seed: u64,
    pub kingdom: KingdomChoice,
    pub colony: bool,
    pub max_turns: u32,
}

impl SimulationConfig {
    pub fn new(seats: Vec<AiType>, games: usize) -> Self {
        SimulationConfig {
            seats,
            games,
            seed: 0,
            kingdom: KingdomChoice::default(),
            colony: false,
            max_turns: 1000,
        }
    }

    /// Seed of game `index`; spreads consecutive indices across the seed space
    pub fn game_seed(&self, index: usize) -> u64 {
        self.seed
            .wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Aggregated outcome of a batch
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub seats: Vec<AiType>,
    pub games: usize,
    /// Games that ended with an engine error
    pub failed: usize,
    /// Sole wins per seat
    pub wins: Vec<usize>,
    /// Games with more than one winner
    pub ties: usize,
    pub turn_limit_hits: usize,
    pub total_turns: u64,
    pub elapsed: Duration,
}

impl SimulationReport {
    fn completed(&self) -> usize {
        self.games - self.failed
    }

    pub fn win_rate(&self, seat: usize) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        self.wins.get(seat).copied().unwrap_or(0) as f64 / completed as f64
    }

    pub fn average_turns(&self) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        self.total_turns as f64 / completed as f64
    }

    fn record(&mut self, result: &GameResult) {
        if let [winner] = result.winners.as_slice() {
            if let Some(w) = self.wins.get_mut(winner.index()) {
                *w += 1;
            }
        } else if result.winners.len() > 1 {
            self.ties += 1;
        }
        if result.end_reason == GameEndReason::TurnLimit {
            self.turn_limit_hits += 1;
        }
        self.total_turns += result.turns_played as u64;
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Complete ===")?;
        writeln!(f, "Games: {} ({} failed)", self.games, self.failed)?;
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            writeln!(f, "Elapsed: {secs:.2}s ({:.1} games/s)", self.games as f64 / secs)?;
        }
        writeln!(f, "Average turns per game: {:.1}", self.average_turns())?;
        for (seat, ai) in self.seats.iter().enumerate() {
            writeln!(
                f,
                "  Seat {} ({ai}): {} wins ({:.1}%)",
                seat + 1,
                self.wins.get(seat).copied().unwrap_or(0),
                100.0 * self.win_rate(seat)
            )?;
        }
        writeln!(f, "Ties: {}", self.ties)?;
        if self.turn_limit_hits > 0 {
            writeln!(f, "Stopped at turn limit: {}", self.turn_limit_hits)?;
        }
        Ok(())
    }
}

/// Set up and play one silent game
pub fn run_one(
    registry: &CardRegistry,
    config: &SimulationConfig,
    index: usize,
) -> Result<GameResult> {
    let names: Vec<String> = (1..=config.seats.len())
        .map(|i| format!("Player {i}"))
        .collect();
    let game_config = GameConfig::new(names)
        .with_kingdom(config.kingdom.clone())
        .with_colony(config.colony)
        .with_seed(config.game_seed(index))
        .with_verbosity(VerbosityLevel::Silent);
    let state = GameInitializer::new(registry).init_game(&game_config)?;
    let controllers = config
        .seats
        .iter()
        .enumerate()
        .map(|(i, ai)| ai.controller(PlayerId::new(i)))
        .collect();
    let mut game = Game::new(state, controllers)?;
    GameLoop::new(&mut game)
        .with_max_turns(config.max_turns)
        .with_verbosity(VerbosityLevel::Silent)
        .run_game()
}

/// Run every game of the batch on the rayon pool
pub fn run_simulation(registry: &CardRegistry, config: &SimulationConfig) -> SimulationReport {
    let start = Instant::now();
    let results: Vec<Result<GameResult>> = (0..config.games)
        .into_par_iter()
        .map(|index| run_one(registry, config, index))
        .collect();

    let mut report = SimulationReport {
        seats: config.seats.clone(),
        games: config.games,
        wins: vec![0; config.seats.len()],
        ..Default::default()
    };
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(result) => report.record(result),
            Err(e) => {
                eprintln!("Warning: game {index} failed: {e}");
                report.failed += 1;
            }
        }
    }
    report.elapsed = start.elapsed();
    report
}
