//! Error types.

use thiserror::Error;

use crate::cards::{Card, DrawFilter, Suit};

/// Reasons a set of hand strings is rejected before simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No hands were supplied.
    #[error("At least one hand is required")]
    NoHands,

    /// A hand does not split into exactly six tokens.
    #[error("Hand '{hand}' must contain exactly 6 cards, found {found}")]
    WrongCardCount { hand: String, found: usize },

    /// A token is not a wildcard, a placeholder or a valid rank+suit.
    #[error("Invalid card format '{token}' in hand '{hand}'")]
    InvalidCardFormat { hand: String, token: String },

    /// A placeholder names a suit outside `h d c s`.
    #[error("Invalid suit placeholder '{token}' in hand '{hand}'")]
    InvalidSuitPlaceholder { hand: String, token: String },

    /// The same known card appears twice across all hands.
    #[error("Duplicate card '{card}' found in hand '{hand}'")]
    DuplicateCard { hand: String, card: Card },

    /// Placeholder demand for a suit exceeds the cards of that suit left.
    #[error("Not enough remaining cards of suit '{suit}' available. Need {needed} but only {available} remaining")]
    InsufficientSuitSupply {
        suit: Suit,
        needed: usize,
        available: usize,
    },

    /// The hands plus the board need more cards than the deck holds.
    #[error("{players} hands need {needed} cards with the board, but the deck holds 52")]
    TooManyPlayers { players: usize, needed: usize },
}

/// Internal failures while running trials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// No eligible card was left to draw. Unreachable for validated input.
    #[error("Deck exhausted while drawing {filter}")]
    DeckExhausted { filter: DrawFilter },
}

/// Errors from loading or checking a [`SimConfig`](crate::SimConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Trial count must be at least 1")]
    InvalidTrials,

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Any error surfaced by [`simulate`](crate::simulate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
