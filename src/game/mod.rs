//! Game engine: state, turn structure, effect resolution and controllers

pub mod actions;
pub mod controller;
pub mod engine;
pub mod events;
pub mod game_loop;
pub mod heuristic_controller;
pub mod interactive_controller;
pub mod logger;
pub mod phase;
pub mod random_controller;
pub mod resolve;
pub mod scripted_controller;
pub mod state;

pub use actions::HAND_SIZE;
pub use controller::{
    BooleanChoice, CardChoice, EffectChoice, GameStateView, IntegerChoice, PileChoice,
    PlayerController,
};
pub use engine::Game;
pub use events::{EventKind, EventLog, GameEvent};
pub use game_loop::{GameEndReason, GameLoop, GameResult, PlayerScore, VerbosityLevel};
pub use heuristic_controller::HeuristicController;
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use phase::TurnPhase;
pub use random_controller::RandomController;
pub use scripted_controller::{parse_script, ScriptedAnswer, ScriptedController};
pub use state::{determine_winners, GameState};
