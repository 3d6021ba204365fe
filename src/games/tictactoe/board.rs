//! The 3x3 board and win-line detection.
//!
//! Positions are numbered 1-9, row by row:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```
//!
//! A marked square stays marked until the whole board is reset between
//! rounds.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// A player's marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The other marker.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Unmarked,
    Marked(Marker),
}

impl Square {
    #[must_use]
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Square::Unmarked => None,
            Square::Marked(marker) => Some(marker),
        }
    }

    #[must_use]
    pub const fn is_marked(self) -> bool {
        matches!(self, Square::Marked(_))
    }
}

/// Rows, then columns, then diagonals. Scan order matters: the heuristic
/// opponent takes the first qualifying line.
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9], // rows
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9], // columns
    [1, 5, 9],
    [3, 5, 7], // diagonals
];

/// The center square.
pub const CENTER: u8 = 5;

/// Nine squares keyed by position 1-9.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(position: u8) -> Result<usize> {
        if (1..=9).contains(&position) {
            Ok(usize::from(position - 1))
        } else {
            Err(GameError::InvalidPosition(position))
        }
    }

    /// Square at `position`.
    pub fn get(&self, position: u8) -> Result<Square> {
        Ok(self.squares[Self::index(position)?])
    }

    /// Mark an unmarked square.
    pub fn place(&mut self, position: u8, marker: Marker) -> Result<()> {
        let idx = Self::index(position)?;
        if self.squares[idx].is_marked() {
            return Err(GameError::PositionOccupied(position));
        }
        self.squares[idx] = Square::Marked(marker);
        Ok(())
    }

    /// Clear every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Unmarked; 9];
    }

    /// Unmarked positions in ascending order.
    #[must_use]
    pub fn unmarked_positions(&self) -> Vec<u8> {
        (1..=9u8)
            .filter(|&pos| !self.squares[usize::from(pos - 1)].is_marked())
            .collect()
    }

    #[must_use]
    pub fn is_unmarked(&self, position: u8) -> bool {
        matches!(self.get(position), Ok(Square::Unmarked))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| square.is_marked())
    }

    fn line(&self, line: [u8; 3]) -> [Square; 3] {
        line.map(|pos| self.squares[usize::from(pos - 1)])
    }

    /// Marker owning a complete line, scanning in `WINNING_LINES` order.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        WINNING_LINES.iter().find_map(|line| match self.line(*line) {
            [Square::Marked(a), Square::Marked(b), Square::Marked(c)] if a == b && b == c => Some(a),
            _ => None,
        })
    }

    /// Win or full board. A win on the last square is still a win.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// The open square of the first line holding exactly two `marker`s and
    /// one unmarked square.
    #[must_use]
    pub fn find_at_risk_square(&self, marker: Marker) -> Option<u8> {
        WINNING_LINES.iter().find_map(|line| {
            let squares = self.line(*line);
            let owned = squares.iter().filter(|sq| sq.marker() == Some(marker)).count();
            let open = squares.iter().filter(|sq| !sq.is_marked()).count();
            if owned == 2 && open == 1 {
                line.iter().copied().find(|&pos| self.is_unmarked(pos))
            } else {
                None
            }
        })
    }

    /// Display snapshot, row-major.
    #[must_use]
    pub fn squares(&self) -> [Square; 9] {
        self.squares
    }
}
