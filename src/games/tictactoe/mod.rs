//! Tic-Tac-Toe: a human against a fixed-priority heuristic opponent.
//!
//! Layers, leaves first:
//! - `board`: squares, markers, the eight winning lines
//! - `heuristic`: offense, defense, center, random
//! - `game`: round, match, and session control

mod board;
mod game;
mod heuristic;

pub use board::{Board, Marker, Square, CENTER, WINNING_LINES};
pub use game::{BoardView, Match, MatchRecord, RoundSummary, TicTacToeGame, TurnOutcome};
pub use heuristic::choose_move;
