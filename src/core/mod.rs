//! Core engine types: seats, participants, RNG, configuration, errors.
//!
//! This module contains the building blocks both games share. Neither
//! engine reaches for randomness or configuration anywhere else.

pub mod config;
pub mod error;
pub mod participant;
pub mod rng;
pub mod seat;

pub use config::{FirstMoverPolicy, TicTacToeConfig, TwentyOneConfig, BUST_LIMIT};
pub use error::{GameError, Result};
pub use participant::{NameSource, Participant, ParticipantKind};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap};
