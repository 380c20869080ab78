//! Core game types: ids, cards, effects, players, piles and the random source

pub mod card;
pub mod effects;
pub mod entity;
pub mod player;
pub mod rng;
pub mod supply;

pub use card::{AttackImmunity, Card, CardDefinition, CardSet, CardType};
pub use effects::{
    DurationEffect, DurationTiming, Effect, EffectConfig, EffectContext, GainDestination,
    GainInfo, Reaction, ReactionBundle, ReactionContext, ReactionKind, ReactionTrigger,
};
pub use entity::{CardId, EntityId, EntityStore, PlayerId};
pub use player::Player;
pub use rng::GameRng;
pub use supply::{CardPile, Kingdom, Supply};
