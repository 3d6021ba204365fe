//! Twenty-One: a human player against a computer dealer.
//!
//! Layers, leaves first:
//! - `card`, `deck`: the 52 cards and the per-round deck
//! - `hand`, `dealer`: hand scoring with ace softening, dealer draw policy
//! - `round`, `game`: the round controller and the multi-round session

mod card;
mod dealer;
mod deck;
mod game;
mod hand;
mod players;
mod round;

pub use card::{Card, Rank, Suit};
pub use dealer::{DealerPolicy, DealerState};
pub use deck::{Deck, DECK_SIZE};
pub use game::{SessionSummary, TwentyOneGame};
pub use hand::{Hand, HasHand};
pub use players::{Dealer, Player};
pub use round::{Phase, Resolution, RoundReport, TableView, TwentyOneRound};
