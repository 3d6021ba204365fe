//! Seams to the interactive shell.
//!
//! The engines never prompt or print. Every point where a human decision is
//! needed is a blocking `request_*` call on one of these traits, and every
//! state change is pushed out through a `report_*` call. A shell implements
//! the trait for its game; tests implement it with scripted answers.
//!
//! ## In-domain inputs
//!
//! Shells are expected to re-prompt on malformed text themselves and only
//! hand the engine values of the answer types below. The one answer the
//! engine re-validates is the square number: `request_square` may return any
//! `u8`, and a value outside 1..=9 or an occupied square is rejected through
//! `report_rejected` followed by another `request_square`.

use crate::core::error::GameError;
use crate::games::tictactoe::{BoardView, Marker, RoundSummary};
use crate::games::twenty_one::{RoundReport, TableView};

/// Player's choice during the Twenty-One player turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stay,
}

/// Answer to "who moves first?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMover {
    Human,
    Computer,
    /// Let the engine pick with its RNG.
    Random,
}

/// Which yes/no continuation question is being asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Play another round of the current match.
    NextRound,
    /// Start a new match with scores reset.
    NewMatch,
}

/// Shell for the card game.
pub trait TwentyOneShell {
    fn request_hit_or_stay(&mut self) -> Decision;

    /// Play another round?
    fn request_continue(&mut self) -> bool;

    /// Called after the deal and after every player hit (dealer's hole card
    /// hidden), and once more with the full table before the result.
    fn report_state(&mut self, view: &TableView);

    fn report_result(&mut self, report: &RoundReport);
}

/// Shell for the board game.
pub trait TicTacToeShell {
    fn request_marker_choice(&mut self) -> Marker;

    /// Only asked when the config's first-mover policy is `Choose`.
    fn request_first_mover(&mut self) -> FirstMover;

    fn request_square(&mut self, view: &BoardView) -> u8;

    fn request_continue(&mut self, question: Continuation) -> bool;

    /// Called at the start of every round and after every placed move.
    fn report_state(&mut self, view: &BoardView);

    fn report_result(&mut self, summary: &RoundSummary);

    /// A submitted square was refused; the next call is `request_square`.
    fn report_rejected(&mut self, _error: &GameError) {}
}
