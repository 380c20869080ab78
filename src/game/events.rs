//! Append-only event log of state-changing occurrences

use crate::core::{CardId, GainDestination, PlayerId};
use crate::zones::Zone;
use serde::Serialize;
use std::fmt;

/// A published event; never mutated once logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEvent {
    /// Monotonic sequence number, starting at 1
    pub seq: u64,
    /// Game-wide turn number when the event happened (0 during setup)
    pub turn: u32,
    pub player: PlayerId,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum EventKind {
    GameStart {
        kingdom: Vec<String>,
    },
    StartTurn,
    PlayCard {
        card: CardId,
        name: String,
    },
    DrawCards {
        count: usize,
    },
    Shuffle {
        cards: usize,
    },
    GainCard {
        card: CardId,
        name: String,
        was_bought: bool,
        destination: GainDestination,
    },
    DiscardCard {
        card: CardId,
        name: String,
    },
    TrashCard {
        card: CardId,
        name: String,
    },
    RevealCards {
        cards: Vec<CardId>,
        names: Vec<String>,
    },
    MoveCard {
        card: CardId,
        name: String,
        from: Zone,
        to: Zone,
    },
    AttackBlocked {
        attack: String,
    },
    CleanUp,
    GameEnd {
        winners: Vec<PlayerId>,
        scores: Vec<i32>,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.player;
        match &self.kind {
            EventKind::GameStart { kingdom } => {
                write!(f, "Game start, {p} goes first. Kingdom: {}", kingdom.join(", "))
            }
            EventKind::StartTurn => write!(f, "Turn {}: {p}", self.turn),
            EventKind::PlayCard { name, .. } => write!(f, "{p} plays {name}"),
            EventKind::DrawCards { count } => write!(f, "{p} draws {count} card(s)"),
            EventKind::Shuffle { cards } => write!(f, "{p} shuffles {cards} card(s)"),
            EventKind::GainCard {
                name,
                was_bought,
                destination,
                ..
            } => {
                let verb = if *was_bought { "buys" } else { "gains" };
                match destination {
                    GainDestination::Discard => write!(f, "{p} {verb} {name}"),
                    other => write!(f, "{p} {verb} {name} to {}", other.zone()),
                }
            }
            EventKind::DiscardCard { name, .. } => write!(f, "{p} discards {name}"),
            EventKind::TrashCard { name, .. } => write!(f, "{p} trashes {name}"),
            EventKind::RevealCards { names, .. } => {
                write!(f, "{p} reveals {}", names.join(", "))
            }
            EventKind::MoveCard { name, from, to, .. } => {
                write!(f, "{p} moves {name} from {from} to {to}")
            }
            EventKind::AttackBlocked { attack } => write!(f, "{p} is unaffected by {attack}"),
            EventKind::CleanUp => write!(f, "{p} cleans up"),
            EventKind::GameEnd { winners, scores } => {
                let names: Vec<String> = winners.iter().map(|w| w.to_string()).collect();
                write!(f, "Game over. Winner(s): {} (scores {:?})", names.join(", "), scores)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog { events: Vec::new() }
    }

    /// Append an event and return its sequence number
    pub fn publish(&mut self, player: PlayerId, turn: u32, kind: EventKind) -> &GameEvent {
        let seq = self.events.len() as u64 + 1;
        self.events.push(GameEvent {
            seq,
            turn,
            player,
            kind,
        });
        &self.events[self.events.len() - 1]
    }

    /// Events with a sequence number strictly greater than `seq`
    pub fn events_after(&self, seq: u64) -> &[GameEvent] {
        let start = (seq as usize).min(self.events.len());
        &self.events[start..]
    }

    /// Sequence number of the newest event, 0 if none
    pub fn last_seq(&self) -> u64 {
        self.events.len() as u64
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
