//! Game configuration types.
//!
//! Each engine is configured at construction:
//! - `TwentyOneConfig`: dealer stand threshold and dealer name roster
//! - `TicTacToeConfig`: match win score, first-mover policy, computer roster
//!
//! Configs are plain serde data with `with_*` builders. Call `validate()`
//! before use; the game constructors do this for you.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::participant::NameSource;

/// Highest hand total that is not a bust.
pub const BUST_LIMIT: u32 = 21;

/// Default dealer roster.
pub const DEALER_NAMES: &[&str] = &["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// Default Tic-Tac-Toe opponent roster.
pub const COMPUTER_NAMES: &[&str] = &[
    "Jon", "Arya", "Sansa", "Robb", "Ned", "Caitlyn", "Bran", "Daenerys", "Rickon",
];

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Twenty-One configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyOneConfig {
    /// The dealer keeps drawing while its total is below this (default: 17).
    pub dealer_stand_threshold: u32,

    /// Names the dealer is drawn from.
    pub dealer_names: Vec<String>,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            dealer_stand_threshold: 17,
            dealer_names: roster(DEALER_NAMES),
        }
    }
}

impl TwentyOneConfig {
    /// Set the dealer stand threshold.
    #[must_use]
    pub fn with_stand_threshold(mut self, threshold: u32) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }

    /// Replace the dealer roster.
    #[must_use]
    pub fn with_dealer_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.dealer_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Name source for the dealer.
    #[must_use]
    pub fn dealer_name_source(&self) -> NameSource {
        NameSource::Roster(self.dealer_names.clone())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=BUST_LIMIT).contains(&self.dealer_stand_threshold) {
            return Err(GameError::InvalidConfig(format!(
                "dealer_stand_threshold must be 1-{BUST_LIMIT}, got {}",
                self.dealer_stand_threshold
            )));
        }
        if self.dealer_names.is_empty() {
            return Err(GameError::InvalidConfig("dealer_names is empty".to_string()));
        }
        Ok(())
    }
}

/// Who moves first in each Tic-Tac-Toe match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMoverPolicy {
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
    /// Ask the shell at the start of every match.
    #[default]
    Choose,
}

/// Tic-Tac-Toe configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    /// Round wins needed to take the match (default: 5).
    pub win_score: u32,

    /// How the first mover is decided.
    pub first_mover: FirstMoverPolicy,

    /// Names the computer opponent is drawn from.
    pub computer_names: Vec<String>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            win_score: 5,
            first_mover: FirstMoverPolicy::default(),
            computer_names: roster(COMPUTER_NAMES),
        }
    }
}

impl TicTacToeConfig {
    /// Set the match win score.
    #[must_use]
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    /// Set the first-mover policy.
    #[must_use]
    pub fn with_first_mover(mut self, policy: FirstMoverPolicy) -> Self {
        self.first_mover = policy;
        self
    }

    /// Replace the computer roster.
    #[must_use]
    pub fn with_computer_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.computer_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Name source for the computer opponent.
    #[must_use]
    pub fn computer_name_source(&self) -> NameSource {
        NameSource::Roster(self.computer_names.clone())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.win_score == 0 {
            return Err(GameError::InvalidConfig("win_score must be at least 1".to_string()));
        }
        if self.computer_names.is_empty() {
            return Err(GameError::InvalidConfig("computer_names is empty".to_string()));
        }
        Ok(())
    }
}
