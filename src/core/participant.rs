//! Participant identity.
//!
//! A participant is a name plus a kind. The kind decides where moves come
//! from: the external shell for a human, a fixed policy for the computer.
//! Names are either entered by the human (validated by the shell) or sampled
//! from a roster with the injected RNG.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::rng::GameRng;
use super::seat::Seat;

/// Where a participant's moves come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Moves are requested from the external shell.
    Human,
    /// Moves are computed by the engine's policy.
    Computer,
}

impl ParticipantKind {
    /// The seat this kind of participant occupies.
    #[must_use]
    pub const fn seat(self) -> Seat {
        match self {
            ParticipantKind::Human => Seat::Human,
            ParticipantKind::Computer => Seat::Computer,
        }
    }
}

/// How a participant's name is obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSource {
    /// Name supplied by the shell.
    Entered(String),
    /// Name sampled uniformly from a fixed roster.
    Roster(Vec<String>),
}

impl NameSource {
    /// Resolve to a concrete name.
    ///
    /// Fails with `InvalidConfig` on an empty roster.
    pub fn resolve(&self, rng: &mut GameRng) -> Result<String> {
        match self {
            NameSource::Entered(name) => Ok(name.clone()),
            NameSource::Roster(names) => rng
                .choose(names)
                .cloned()
                .ok_or_else(|| GameError::InvalidConfig("name roster is empty".to_string())),
        }
    }
}

/// A named participant of a known kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    pub name: String,
    /// Move source.
    pub kind: ParticipantKind,
}

impl Participant {
    /// Create a human participant with an already-validated name.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::Human,
        }
    }

    /// Create a computer participant named from `source`.
    pub fn computer(source: &NameSource, rng: &mut GameRng) -> Result<Self> {
        Ok(Self {
            name: source.resolve(rng)?,
            kind: ParticipantKind::Computer,
        })
    }

    /// The seat this participant occupies.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.kind.seat()
    }

    /// Whether moves come from the shell.
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == ParticipantKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> NameSource {
        NameSource::Roster(vec!["Hal".into(), "Sonny".into(), "Chappie".into()])
    }

    #[test]
    fn test_entered_name_is_kept() {
        let mut rng = GameRng::new(1);
        let name = NameSource::Entered("Ada".into()).resolve(&mut rng).unwrap();
        assert_eq!(name, "Ada");
    }

    #[test]
    fn test_roster_name_is_from_roster() {
        let mut rng = GameRng::new(7);
        let computer = Participant::computer(&roster(), &mut rng).unwrap();
        assert!(["Hal", "Sonny", "Chappie"].contains(&computer.name.as_str()));
        assert_eq!(computer.seat(), Seat::Computer);
        assert!(!computer.is_human());
    }

    #[test]
    fn test_roster_pick_is_deterministic() {
        let a = Participant::computer(&roster(), &mut GameRng::new(99)).unwrap();
        let b = Participant::computer(&roster(), &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let mut rng = GameRng::new(1);
        let err = Participant::computer(&NameSource::Roster(vec![]), &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_human_participant() {
        let human = Participant::human("Ada");
        assert!(human.is_human());
        assert_eq!(human.seat(), Seat::Human);
    }
}
