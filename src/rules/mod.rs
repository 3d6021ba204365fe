//! Rule-level types shared by both engines.
//!
//! Each game owns its own rules (hand scoring, win-line detection); this
//! module only holds what the round controllers report back to the shell.

pub mod outcome;

pub use outcome::RoundOutcome;
