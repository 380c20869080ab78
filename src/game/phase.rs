//! Turn phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a turn, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Action,
    Buy,
    CleanUp,
}

impl TurnPhase {
    /// Next phase within the same turn; None after cleanup
    pub fn next(&self) -> Option<TurnPhase> {
        match self {
            TurnPhase::Action => Some(TurnPhase::Buy),
            TurnPhase::Buy => Some(TurnPhase::CleanUp),
            TurnPhase::CleanUp => None,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnPhase::Action => write!(f, "Action"),
            TurnPhase::Buy => write!(f, "Buy"),
            TurnPhase::CleanUp => write!(f, "Clean-up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let mut phase = TurnPhase::default();
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            seen.push(next);
            phase = next;
        }
        assert_eq!(seen, vec![TurnPhase::Action, TurnPhase::Buy, TurnPhase::CleanUp]);
    }
}
