//! Hands and hand scoring.
//!
//! ## Scoring
//!
//! Every ace starts at 11, face cards are 10, pip cards their value. Then,
//! once per ace, if the total is above 21 the ace is softened to 1 (minus 10).
//! The total is recomputed on every call and never cached, so it only depends
//! on which cards are in the hand, not their order.
//!
//! ```
//! use table_games::games::twenty_one::{Card, Hand, Rank, Suit};
//!
//! let mut hand = Hand::new();
//! hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
//! hand.add_card(Card::new(Suit::Spades, Rank::Ace));
//! hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
//! assert_eq!(hand.total(), 21);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::BUST_LIMIT;

use super::card::Card;

/// Cards held by one participant. Append-only during a round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    // 21 is reachable with at most 11 cards; 8 covers nearly every real hand.
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discard every card (between rounds only).
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Hand total with aces softened as needed.
    #[must_use]
    pub fn total(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(Card::base_value).sum();

        for _ in self.cards.iter().filter(|card| card.is_ace()) {
            if total <= BUST_LIMIT {
                break;
            }
            total -= 10;
        }

        total
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BUST_LIMIT
    }
}

/// Capability shared by everything that holds a hand.
pub trait HasHand {
    fn hand(&self) -> &Hand;

    fn hand_mut(&mut self) -> &mut Hand;

    fn add_card(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    fn total(&self) -> u32 {
        self.hand().total()
    }

    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }
}
