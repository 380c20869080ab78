//! Error types for the Dominion engine

use crate::core::{CardId, PlayerId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DominionError {
    /// Gaining from an empty pile means an effect skipped its own emptiness check.
    #[error("Cannot gain from empty pile: {0}")]
    EmptyPile(String),

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("No such supply pile: {0}")]
    UnknownPile(String),

    #[error("Card already registered: {0}")]
    DuplicateCard(String),

    #[error("Supply already contains a pile named {0}")]
    DuplicatePile(String),

    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DominionError {
    fn from(err: serde_json::Error) -> Self {
        DominionError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DominionError>;
