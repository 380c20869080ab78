//! Kingdom selection: named presets and random draws from the registry

use crate::core::{GameRng, Kingdom};
use crate::loader::CardRegistry;
use crate::{DominionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which ten kingdom cards a game uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KingdomChoice {
    Preset(String),
    /// Ten distinct cards drawn with the game's random source
    Random,
    Custom(Vec<String>),
}

impl Default for KingdomChoice {
    fn default() -> Self {
        KingdomChoice::Preset("first-game".into())
    }
}

impl FromStr for KingdomChoice {
    type Err = DominionError;

    /// `random`, a preset name, or a comma-separated list of card names
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            return Ok(KingdomChoice::Random);
        }
        if preset(s).is_some() {
            return Ok(KingdomChoice::Preset(s.to_ascii_lowercase()));
        }
        if s.contains(',') {
            let names = s
                .split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect();
            return Ok(KingdomChoice::Custom(names));
        }
        Err(DominionError::InvalidSetup(format!(
            "unknown kingdom preset '{s}' (expected one of {}, 'random' or a card list)",
            PRESETS.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ")
        )))
    }
}

impl fmt::Display for KingdomChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KingdomChoice::Preset(name) => write!(f, "{name}"),
            KingdomChoice::Random => write!(f, "random"),
            KingdomChoice::Custom(cards) => write!(f, "{}", cards.join(",")),
        }
    }
}

const PRESETS: &[(&str, [&str; Kingdom::SIZE])] = &[
    (
        "first-game",
        [
            "Cellar", "Market", "Merchant", "Militia", "Moat", "Remodel", "Smithy", "Village",
            "Workshop", "Feast",
        ],
    ),
    (
        "big-money-test",
        [
            "Smithy", "Laboratory", "Market", "Festival", "Council Room", "Moneylender",
            "Chapel", "Witch", "Gardens", "Grand Market",
        ],
    ),
    (
        "interaction",
        [
            "Moat", "Militia", "Witch", "Bureaucrat", "Watchtower", "Tunnel", "Royal Seal",
            "Treasury", "Border Village", "Throne Room",
        ],
    ),
    (
        "durations",
        [
            "Lighthouse", "Fishing Village", "Caravan", "Island", "Native Village", "Fortress",
            "Pawn", "Bridge", "Conspirator", "Peddler",
        ],
    ),
];

/// Card names of a preset, looked up case-insensitively
pub fn preset(name: &str) -> Option<&'static [&'static str; Kingdom::SIZE]> {
    PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, cards)| cards)
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(n, _)| *n)
}

/// Pick `Kingdom::SIZE` distinct kingdom cards from the registry
pub fn random_kingdom(registry: &CardRegistry, rng: &mut GameRng) -> Result<Vec<String>> {
    let mut names = registry.kingdom_card_names();
    if names.len() < Kingdom::SIZE {
        return Err(DominionError::InvalidSetup(format!(
            "registry has {} kingdom cards, need {}",
            names.len(),
            Kingdom::SIZE
        )));
    }
    rng.shuffle(&mut names);
    names.truncate(Kingdom::SIZE);
    Ok(names)
}

impl KingdomChoice {
    /// Resolve to card names, checking each against the registry
    pub fn card_names(&self, registry: &CardRegistry, rng: &mut GameRng) -> Result<Vec<String>> {
        let names: Vec<String> = match self {
            KingdomChoice::Preset(name) => preset(name)
                .ok_or_else(|| {
                    DominionError::InvalidSetup(format!("unknown kingdom preset '{name}'"))
                })?
                .iter()
                .map(|n| n.to_string())
                .collect(),
            KingdomChoice::Random => random_kingdom(registry, rng)?,
            KingdomChoice::Custom(names) => names.clone(),
        };
        if names.len() != Kingdom::SIZE {
            return Err(DominionError::InvalidSetup(format!(
                "a kingdom needs {} cards, got {}",
                Kingdom::SIZE,
                names.len()
            )));
        }
        let mut canonical = Vec::with_capacity(names.len());
        for name in &names {
            canonical.push(registry.lookup(name)?.name.clone());
        }
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_resolve_against_catalog() {
        let registry = CardRegistry::with_catalog().unwrap();
        let mut rng = GameRng::new(1);
        for name in preset_names() {
            let choice: KingdomChoice = name.parse().unwrap();
            let cards = choice.card_names(&registry, &mut rng).unwrap();
            assert_eq!(cards.len(), Kingdom::SIZE);
        }
    }

    #[test]
    fn test_random_kingdom_is_distinct_and_seeded() {
        let registry = CardRegistry::with_catalog().unwrap();
        let a = random_kingdom(&registry, &mut GameRng::new(9)).unwrap();
        let b = random_kingdom(&registry, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), Kingdom::SIZE);
    }

    #[test]
    fn test_parse_kingdom_choice() {
        assert_eq!("Random".parse::<KingdomChoice>().unwrap(), KingdomChoice::Random);
        assert_eq!(
            "Durations".parse::<KingdomChoice>().unwrap(),
            KingdomChoice::Preset("durations".into())
        );
        assert!(matches!(
            "Smithy, Village".parse::<KingdomChoice>().unwrap(),
            KingdomChoice::Custom(cards) if cards == vec!["Smithy", "Village"]
        ));
        assert!("nonsense".parse::<KingdomChoice>().is_err());
    }

    #[test]
    fn test_custom_kingdom_wrong_size_rejected() {
        let registry = CardRegistry::with_catalog().unwrap();
        let choice = KingdomChoice::Custom(vec!["Smithy".into()]);
        assert!(choice.card_names(&registry, &mut GameRng::new(0)).is_err());
    }
}
