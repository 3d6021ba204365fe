//! The two game engines.
//!
//! Each engine is self-contained: an entity layer (cards, board), a rules
//! layer (hand scoring, win lines, opponent policy), and a controller that
//! sequences turns through a shell from [`crate::shell`].

pub mod tictactoe;
pub mod twenty_one;
