//! Card effect data: the effect tree interpreted by the game executor,
//! plus the callback types for reactions, triggers, durations and modifiers

use crate::core::{CardDefinition, CardId, PlayerId};
use crate::game::{Game, GameState};
use crate::zones::{Zone, ZonePosition};
use crate::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Who is resolving which card
///
/// For attack and "each other player" effects, `player` is the affected
/// opponent while `card` stays the attacking card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectContext {
    pub card: CardId,
    pub player: PlayerId,
}

impl EffectContext {
    pub fn new(card: CardId, player: PlayerId) -> Self {
        EffectContext { card, player }
    }

    /// Same card, different affected player
    pub fn for_player(&self, player: PlayerId) -> Self {
        EffectContext {
            card: self.card,
            player,
        }
    }
}

pub type EffectFn = Arc<dyn Fn(&mut Game, &EffectContext) -> Result<()> + Send + Sync>;
/// Returns whether the duration effect stays attached
pub type DurationFn = Arc<dyn Fn(&mut Game, &EffectContext) -> Result<bool> + Send + Sync>;
pub type ReactionFn = Arc<dyn Fn(&mut Game, &ReactionContext) -> Result<()> + Send + Sync>;
pub type GainTriggerFn = Arc<dyn Fn(&mut Game, &GainInfo) -> Result<()> + Send + Sync>;
/// Returns whether the trigger stays registered for the rest of the turn
pub type PlayTriggerFn = Arc<dyn Fn(&mut Game, PlayerId, CardId) -> Result<bool> + Send + Sync>;
/// Turn-scoped adjustment applied to every card's cost
pub type CostModifierFn = Arc<dyn Fn(&CardDefinition) -> i32 + Send + Sync>;
/// A card's adjustment to its own cost, given the active player
pub type SelfCostFn = Arc<dyn Fn(&GameState, PlayerId) -> i32 + Send + Sync>;
pub type VictoryFn = Arc<dyn Fn(&GameState, PlayerId) -> i32 + Send + Sync>;
pub type BuyPredicate = Arc<dyn Fn(&GameState, PlayerId) -> bool + Send + Sync>;

/// Where a gained card lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GainDestination {
    #[default]
    Discard,
    DeckTop,
    Hand,
}

impl GainDestination {
    pub fn zone(&self) -> Zone {
        match self {
            GainDestination::Discard => Zone::Discard,
            GainDestination::DeckTop => Zone::Deck,
            GainDestination::Hand => Zone::Hand,
        }
    }

    pub fn position(&self) -> ZonePosition {
        ZonePosition::Top
    }
}

/// Details of one gain, handed to gain triggers and gain reactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainInfo {
    pub player: PlayerId,
    pub card: CardId,
    pub was_bought: bool,
    pub destination: GainDestination,
}

/// The event a reaction is responding to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionTrigger {
    Gain(GainInfo),
    Discard { player: PlayerId, card: CardId },
    StartTurn { player: PlayerId },
}

impl ReactionTrigger {
    pub fn kind(&self) -> ReactionKind {
        match self {
            ReactionTrigger::Gain(_) => ReactionKind::Gain,
            ReactionTrigger::Discard { .. } => ReactionKind::Discard,
            ReactionTrigger::StartTurn { .. } => ReactionKind::StartTurn,
        }
    }

    /// Player whose action provoked the reaction
    pub fn player(&self) -> PlayerId {
        match self {
            ReactionTrigger::Gain(info) => info.player,
            ReactionTrigger::Discard { player, .. } | ReactionTrigger::StartTurn { player } => {
                *player
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReactionContext {
    /// The reacting card
    pub card: CardId,
    /// Player holding the reacting card
    pub owner: PlayerId,
    pub trigger: ReactionTrigger,
}

impl ReactionContext {
    pub fn effect_context(&self) -> EffectContext {
        EffectContext::new(self.card, self.owner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Gain,
    Discard,
    StartTurn,
}

/// A reaction fires for every card of this kind sitting in `zone`
#[derive(Clone)]
pub struct Reaction {
    pub zone: Zone,
    pub effect: ReactionFn,
}

impl Reaction {
    pub fn new(
        zone: Zone,
        f: impl Fn(&mut Game, &ReactionContext) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Reaction {
            zone,
            effect: Arc::new(f),
        }
    }
}

impl fmt::Debug for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reaction").field("zone", &self.zone).finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReactionBundle {
    pub on_gain: Option<Reaction>,
    pub on_discard: Option<Reaction>,
    pub on_start_turn: Option<Reaction>,
}

impl ReactionBundle {
    pub fn get(&self, kind: ReactionKind) -> Option<&Reaction> {
        match kind {
            ReactionKind::Gain => self.on_gain.as_ref(),
            ReactionKind::Discard => self.on_discard.as_ref(),
            ReactionKind::StartTurn => self.on_start_turn.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_gain.is_none() && self.on_discard.is_none() && self.on_start_turn.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DurationTiming {
    StartOfTurn,
}

/// Callback attached to a card instance that keeps it in play across turns
#[derive(Clone)]
pub struct DurationEffect {
    pub timing: DurationTiming,
    pub callback: DurationFn,
}

impl DurationEffect {
    pub fn start_of_turn(
        f: impl Fn(&mut Game, &EffectContext) -> Result<bool> + Send + Sync + 'static,
    ) -> Self {
        DurationEffect {
            timing: DurationTiming::StartOfTurn,
            callback: Arc::new(f),
        }
    }
}

impl fmt::Debug for DurationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurationEffect")
            .field("timing", &self.timing)
            .finish()
    }
}

/// Card-specific logic that doesn't fit a built-in variant
#[derive(Clone)]
pub struct CustomEffect {
    pub label: &'static str,
    pub run: EffectFn,
}

impl fmt::Debug for CustomEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Custom({})", self.label)
    }
}

/// One step of a card's effect list
///
/// Steps run strictly in order; each finishes (prompts and reactions included)
/// before the next starts.
#[derive(Debug, Clone)]
pub enum Effect {
    DrawCards(u32),
    GainActions(u32),
    GainBuys(u32),
    GainMoney(u32),
    GainVictoryTokens(u32),
    /// Gain a card from the named pile if it has one
    GainCard {
        card: String,
        to: GainDestination,
    },
    Sequence(Vec<Effect>),
    /// Let the player pick between `min` and `max` options, run in the order picked
    Choose {
        prompt: String,
        choices: Vec<EffectConfig>,
        min: usize,
        max: usize,
    },
    /// Optional effect behind a yes/no prompt (default no)
    MayDo {
        prompt: String,
        effect: Box<Effect>,
    },
    /// Run against each opponent unless they are immune
    Attack(Box<Effect>),
    /// Run against each opponent, no immunity check
    EachOtherPlayer(Box<Effect>),
    Custom(CustomEffect),
}

impl Effect {
    pub fn custom(
        label: &'static str,
        f: impl Fn(&mut Game, &EffectContext) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Effect::Custom(CustomEffect {
            label,
            run: Arc::new(f),
        })
    }

    pub fn gain(card: impl Into<String>) -> Self {
        Effect::GainCard {
            card: card.into(),
            to: GainDestination::Discard,
        }
    }

    pub fn attack(effect: Effect) -> Self {
        Effect::Attack(Box::new(effect))
    }

    pub fn each_other_player(effect: Effect) -> Self {
        Effect::EachOtherPlayer(Box::new(effect))
    }

    pub fn may(prompt: impl Into<String>, effect: Effect) -> Self {
        Effect::MayDo {
            prompt: prompt.into(),
            effect: Box::new(effect),
        }
    }

    pub fn choose(
        prompt: impl Into<String>,
        choices: Vec<EffectConfig>,
        min: usize,
        max: usize,
    ) -> Self {
        Effect::Choose {
            prompt: prompt.into(),
            choices,
            min,
            max,
        }
    }

    /// Short human-readable form, used in choice menus and logs
    pub fn describe(&self) -> String {
        match self {
            Effect::DrawCards(n) => format!("+{n} Card{}", plural(*n)),
            Effect::GainActions(n) => format!("+{n} Action{}", plural(*n)),
            Effect::GainBuys(n) => format!("+{n} Buy{}", plural(*n)),
            Effect::GainMoney(n) => format!("+${n}"),
            Effect::GainVictoryTokens(n) => format!("+{n} VP"),
            Effect::GainCard { card, .. } => format!("gain a {card}"),
            Effect::Sequence(steps) => steps
                .iter()
                .map(Effect::describe)
                .collect::<Vec<_>>()
                .join(", "),
            Effect::Choose { prompt, .. } | Effect::MayDo { prompt, .. } => prompt.clone(),
            Effect::Attack(inner) => format!("attack: {}", inner.describe()),
            Effect::EachOtherPlayer(inner) => format!("each other player: {}", inner.describe()),
            Effect::Custom(custom) => custom.label.to_string(),
        }
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// A labelled option of a `Choose` effect
#[derive(Debug, Clone)]
pub struct EffectConfig {
    pub description: String,
    pub effect: Effect,
}

impl EffectConfig {
    pub fn new(description: impl Into<String>, effect: Effect) -> Self {
        EffectConfig {
            description: description.into(),
            effect,
        }
    }
}

impl From<Effect> for EffectConfig {
    fn from(effect: Effect) -> Self {
        EffectConfig {
            description: effect.describe(),
            effect,
        }
    }
}
