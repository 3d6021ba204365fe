//! Dealer drawing policy.
//!
//! Two states: `Drawing` while the total is below the stand threshold and
//! not busted, `Standing` otherwise. Standing is terminal for the round.
//! The state is a pure function of the hand.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::Result;

use super::deck::Deck;
use super::hand::Hand;

/// Where the dealer is in its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerState {
    Drawing,
    Standing,
}

/// Fixed draw-to-threshold policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealerPolicy {
    pub stand_threshold: u32,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self { stand_threshold: 17 }
    }
}

impl DealerPolicy {
    #[must_use]
    pub const fn new(stand_threshold: u32) -> Self {
        Self { stand_threshold }
    }

    /// Evaluate the policy for a hand.
    #[must_use]
    pub fn state(&self, hand: &Hand) -> DealerState {
        if hand.total() < self.stand_threshold && !hand.is_busted() {
            DealerState::Drawing
        } else {
            DealerState::Standing
        }
    }

    /// Draw until standing. Returns the number of cards drawn.
    ///
    /// Bounded by the deck: running out of cards surfaces as `EmptyDeck`.
    pub fn play(&self, hand: &mut Hand, deck: &mut Deck) -> Result<usize> {
        let mut draws = 0;
        while self.state(hand) == DealerState::Drawing {
            let card = deck.deal_one()?;
            trace!(%card, total = hand.total(), "dealer draws");
            hand.add_card(card);
            draws += 1;
        }
        Ok(draws)
    }
}
