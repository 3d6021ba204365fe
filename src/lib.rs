//! # table-games
//!
//! Deterministic rule engines for two turn-based games against a computer
//! opponent: Twenty-One (a Blackjack-style card game) and Tic-Tac-Toe.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the engines**: prompting, printing, and input validation
//!    belong to a shell. The engines call out through the traits in
//!    [`shell`] at exactly the points where a human decision is needed.
//!
//! 2. **Injected randomness**: every shuffle, name pick, and random move
//!    goes through a seeded [`GameRng`], so whole sessions replay exactly.
//!
//! 3. **Fixed policies**: the dealer draws to a threshold and the
//!    Tic-Tac-Toe opponent follows offense, defense, center, random. Both
//!    are pure functions of the visible state.
//!
//! ## Modules
//!
//! - `core`: seats, participants, RNG, configuration, errors
//! - `rules`: round outcomes shared by both games
//! - `games`: the Twenty-One and Tic-Tac-Toe engines
//! - `shell`: the request/report seams to the interactive layer

pub mod core;
pub mod games;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    FirstMoverPolicy, GameError, GameRng, GameRngState, NameSource, Participant, ParticipantKind,
    Result, Seat, SeatMap, TicTacToeConfig, TwentyOneConfig,
};

pub use crate::rules::RoundOutcome;

pub use crate::games::twenty_one::{
    Card, Deck, Hand, HasHand, Rank, RoundReport, Suit, TableView, TwentyOneGame, TwentyOneRound,
};

pub use crate::games::tictactoe::{
    choose_move, Board, BoardView, Marker, Match, RoundSummary, Square, TicTacToeGame,
};

pub use crate::shell::{Continuation, Decision, FirstMover, TicTacToeShell, TwentyOneShell};
