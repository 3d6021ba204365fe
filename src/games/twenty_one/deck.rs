//! The 52-card deck owned by a single round.
//!
//! Cards are dealt from the top until the round ends; the deck is then
//! discarded and a fresh one is built. The top of the deck is the end of the
//! backing vector so a deal is a `pop`.

use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

use super::card::{Card, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of unique cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a fresh, uniformly shuffled 52-card deck.
    pub fn build(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// All 52 cards in suit-then-rank construction order, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A deck that deals exactly `deal_order`, first element first.
    ///
    /// Used to script rounds. Uniqueness is the caller's responsibility.
    #[must_use]
    pub fn stacked(deal_order: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = deal_order.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Remove and return the top card.
    ///
    /// `EmptyDeck` means round sequencing is broken; normal play never draws
    /// more than a fraction of the deck.
    pub fn deal_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_deck_is_complete_and_unique() {
        let deck = Deck::build(&mut GameRng::new(42));
        assert_eq!(deck.remaining(), DECK_SIZE);

        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_build_is_shuffled_and_deterministic() {
        let a = Deck::build(&mut GameRng::new(7));
        let b = Deck::build(&mut GameRng::new(7));
        let c = Deck::build(&mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::ordered());
    }

    #[test]
    fn test_deal_removes_cards() {
        let mut deck = Deck::build(&mut GameRng::new(3));
        let mut dealt = Vec::new();

        for k in 1..=10 {
            dealt.push(deck.deal_one().unwrap());
            assert_eq!(deck.remaining(), DECK_SIZE - k);
        }

        for card in &dealt {
            assert!(!deck.contains(card));
        }
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = Deck::ordered();
        for _ in 0..DECK_SIZE {
            deck.deal_one().unwrap();
        }
        assert!(deck.is_empty());
        assert_eq!(deck.deal_one(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_stacked_deal_order() {
        let first = Card::new(Suit::Hearts, Rank::Ace);
        let second = Card::new(Suit::Clubs, Rank::Nine);
        let mut deck = Deck::stacked([first, second]);

        assert_eq!(deck.deal_one().unwrap(), first);
        assert_eq!(deck.deal_one().unwrap(), second);
        assert!(deck.deal_one().is_err());
    }

    proptest! {
        #[test]
        fn prop_deal_accounting(k in 0..=DECK_SIZE, seed in any::<u64>()) {
            let mut deck = Deck::build(&mut GameRng::new(seed));
            let dealt: Vec<Card> = (0..k).map(|_| deck.deal_one().unwrap()).collect();

            prop_assert_eq!(deck.remaining(), DECK_SIZE - k);
            for card in &dealt {
                prop_assert!(!deck.contains(card));
            }
        }
    }
}
