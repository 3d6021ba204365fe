//! Error type shared by both engines.
//!
//! These are domain-validation failures, not system faults. The board-game
//! errors are recoverable: the shell re-prompts and tries again. `EmptyDeck`
//! can only happen if round sequencing is broken.

use thiserror::Error;

/// Errors raised by the game engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board position outside 1..=9.
    #[error("position {0} is not on the board (expected 1-9)")]
    InvalidPosition(u8),

    /// Board position already carries a marker.
    #[error("position {0} is already marked")]
    PositionOccupied(u8),

    /// A card was requested from an exhausted deck.
    #[error("deck is empty")]
    EmptyDeck,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A move was submitted after the round ended.
    #[error("round is already over")]
    RoundOver,
}

impl GameError {
    /// Whether the caller should simply re-prompt for a new input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidPosition(_) | GameError::PositionOccupied(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
