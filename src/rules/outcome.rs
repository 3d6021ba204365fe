//! Round outcome shared by both games.

use serde::{Deserialize, Serialize};

use crate::core::seat::Seat;

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Single winner.
    Winner(Seat),
    /// Nobody won.
    Tie,
}

impl RoundOutcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, RoundOutcome::Winner(s) if *s == seat)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Winner(seat) => Some(*seat),
            RoundOutcome::Tie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_is_winner() {
        let result = RoundOutcome::Winner(Seat::Computer);
        assert!(!result.is_winner(Seat::Human));
        assert!(result.is_winner(Seat::Computer));
        assert_eq!(result.winner(), Some(Seat::Computer));

        let tie = RoundOutcome::Tie;
        assert!(!tie.is_winner(Seat::Human));
        assert!(!tie.is_winner(Seat::Computer));
        assert_eq!(tie.winner(), None);
    }
}
