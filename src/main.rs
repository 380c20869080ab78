//! Dominion engine - Main Binary
//!
//! Play a game in the terminal, batch-simulate AI games, or list the card catalog

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use dominion_rs::{
    core::PlayerId,
    game::{
        Game, GameEndReason, GameLoop, HeuristicController, InteractiveController, OutputFormat,
        PlayerController, RandomController, ScriptedController, VerbosityLevel,
    },
    loader::{CardRegistry, GameConfig, GameInitializer, KingdomChoice, MAX_PLAYERS, MIN_PLAYERS},
    simulate::{run_simulation, AiType, SimulationConfig},
};

/// Controller type for each seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ControllerType {
    /// Big-money heuristic AI
    Heuristic,
    /// Makes random choices
    Random,
    /// Text UI controller for human play via stdin
    Tui,
    /// Predetermined answers (requires --script, one per scripted seat)
    Scripted,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "dominion")]
#[command(about = "Dominion-style deck-building game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game
    Play {
        /// Controller for each seat, in table order (2 to 6 seats)
        #[arg(long = "player", value_enum, default_values = ["tui", "heuristic"])]
        players: Vec<ControllerType>,

        /// Player names, comma separated (default: Player 1, Player 2, ...)
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Kingdom preset, 'random', or ten comma-separated card names
        #[arg(long, default_value = "first-game")]
        kingdom: String,

        /// Add Platinum and Colony to the supply
        #[arg(long)]
        colony: bool,

        /// Set random seed for deterministic games
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many turns
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        #[arg(long, value_enum, default_value = "text")]
        log_format: LogFormat,

        /// Answers for a scripted seat, e.g. "card Smithy; pass; pile Gold"; repeat per seat
        #[arg(long)]
        script: Vec<String>,
    },

    /// Run many AI games in parallel and report win rates
    Simulate {
        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// AI for each seat (heuristic or random)
        #[arg(long = "player", value_enum, default_values = ["heuristic", "heuristic"])]
        players: Vec<ControllerType>,

        #[arg(long, default_value = "first-game")]
        kingdom: String,

        #[arg(long)]
        colony: bool,

        /// Base seed; game i uses a seed derived from it
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 1000)]
        max_turns: u32,
    },

    /// List the card catalog
    Cards {
        /// Only list cards that can appear in a kingdom
        #[arg(long)]
        kingdom_only: bool,
    },
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

fn check_seat_count(seats: usize) -> anyhow::Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats) {
        bail!("{seats} seats given; a game needs {MIN_PLAYERS} to {MAX_PLAYERS} --player options");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let registry = CardRegistry::with_catalog().context("loading the card catalog")?;

    match cli.command {
        Commands::Play {
            players,
            names,
            kingdom,
            colony,
            seed,
            max_turns,
            verbosity,
            log_format,
            script,
        } => run_play(
            &registry,
            PlayOptions {
                players,
                names,
                kingdom,
                colony,
                seed: resolve_seed(seed),
                max_turns,
                verbosity: verbosity.0,
                log_format,
                scripts: script,
            },
        ),
        Commands::Simulate {
            games,
            players,
            kingdom,
            colony,
            seed,
            max_turns,
        } => {
            check_seat_count(players.len())?;
            let seats = players
                .into_iter()
                .map(|p| match p {
                    ControllerType::Heuristic => Ok(AiType::Heuristic),
                    ControllerType::Random => Ok(AiType::Random),
                    other => bail!("{other:?} players can't be simulated"),
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut config = SimulationConfig::new(seats, games);
            config.seed = seed;
            config.kingdom = kingdom.parse()?;
            config.colony = colony;
            config.max_turns = max_turns;
            println!("Running {games} games from seed {seed}...");
            print!("{}", run_simulation(&registry, &config));
            Ok(())
        }
        Commands::Cards { kingdom_only } => {
            list_cards(&registry, kingdom_only);
            Ok(())
        }
    }
}

struct PlayOptions {
    players: Vec<ControllerType>,
    names: Vec<String>,
    kingdom: String,
    colony: bool,
    seed: u64,
    max_turns: u32,
    verbosity: VerbosityLevel,
    log_format: LogFormat,
    scripts: Vec<String>,
}

fn run_play(registry: &CardRegistry, opts: PlayOptions) -> anyhow::Result<()> {
    check_seat_count(opts.players.len())?;
    let kingdom: KingdomChoice = opts.kingdom.parse()?;
    let names: Vec<String> = (0..opts.players.len())
        .map(|i| {
            opts.names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Player {}", i + 1))
        })
        .collect();

    let log_format = match opts.log_format {
        LogFormat::Text => OutputFormat::Text,
        LogFormat::Json => OutputFormat::Json,
    };
    let config = GameConfig::new(names)
        .with_kingdom(kingdom)
        .with_colony(opts.colony)
        .with_seed(opts.seed)
        .with_verbosity(opts.verbosity)
        .with_log_format(log_format);
    let state = GameInitializer::new(registry).init_game(&config)?;

    let mut scripts = opts.scripts.iter();
    let mut controllers: Vec<Box<dyn PlayerController>> = Vec::with_capacity(opts.players.len());
    for (i, kind) in opts.players.iter().enumerate() {
        let id = PlayerId::new(i);
        let controller: Box<dyn PlayerController> = match kind {
            ControllerType::Heuristic => Box::new(HeuristicController::new(id)),
            ControllerType::Random => Box::new(RandomController::new(id)),
            ControllerType::Tui => Box::new(InteractiveController::new(id)),
            ControllerType::Scripted => {
                let Some(script) = scripts.next() else {
                    bail!("seat {} is scripted but no --script is left for it", i + 1);
                };
                Box::new(ScriptedController::from_script(id, script)?)
            }
        };
        controllers.push(controller);
    }

    let mut game = Game::new(state, controllers)?;
    let result = GameLoop::new(&mut game)
        .with_max_turns(opts.max_turns)
        .with_verbosity(opts.verbosity)
        .run_game()?;

    if opts.verbosity >= VerbosityLevel::Minimal {
        println!("\n=== Game Over (seed {}) ===", opts.seed);
        match result.end_reason {
            GameEndReason::ProvincesGone => println!("The Provinces are gone."),
            GameEndReason::PilesEmptied(n) => println!("{n} supply piles are empty."),
            GameEndReason::TurnLimit => println!("Turn limit reached."),
            GameEndReason::Manual => {}
        }
        for score in &result.scores {
            let marker = if result.winners.contains(&score.player) { " *" } else { "" };
            println!(
                "  {}: {} VP in {} turns{marker}",
                score.name, score.victory_points, score.turns
            );
        }
    }
    Ok(())
}

fn list_cards(registry: &CardRegistry, kingdom_only: bool) {
    let kingdom = registry.kingdom_card_names();
    for def in registry.iter() {
        if kingdom_only && !kingdom.contains(&def.name) {
            continue;
        }
        println!("{:<16} ${:<2} {:<24} {}", def.name, def.cost, def.type_line(), def.text);
    }
}
