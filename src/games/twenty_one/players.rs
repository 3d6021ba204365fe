//! The two hand-holding participants of a Twenty-One table.

use crate::core::participant::Participant;

use super::card::Card;
use super::hand::{Hand, HasHand};

/// Human player: decisions come from the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub participant: Participant,
    hand: Hand,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            participant: Participant::human(name),
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.participant.name
    }
}

impl HasHand for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Computer dealer: decisions come from the dealer policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dealer {
    pub participant: Participant,
    hand: Hand,
}

impl Dealer {
    #[must_use]
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.participant.name
    }

    /// The face-up card shown during the flop.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }
}

impl HasHand for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
