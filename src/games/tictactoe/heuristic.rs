//! Fixed-priority computer opponent.
//!
//! 1. Offense: complete a line holding two of our markers.
//! 2. Defense: block a line holding two of the opponent's markers.
//! 3. Take the center if it is open.
//! 4. Otherwise pick a uniformly random open square.
//!
//! Steps 1 and 2 take the first qualifying line in `WINNING_LINES` order.

use crate::core::rng::GameRng;

use super::board::{Board, Marker, CENTER};

/// Pick the computer's square. `None` only when the board is full.
pub fn choose_move(board: &Board, own: Marker, opponent: Marker, rng: &mut GameRng) -> Option<u8> {
    board
        .find_at_risk_square(own)
        .or_else(|| board.find_at_risk_square(opponent))
        .or_else(|| board.is_unmarked(CENTER).then_some(CENTER))
        .or_else(|| rng.choose(&board.unmarked_positions()).copied())
}
