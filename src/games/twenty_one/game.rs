//! Twenty-One session: rounds until the human stops.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::TwentyOneConfig;
use crate::core::error::Result;
use crate::core::participant::Participant;
use crate::core::rng::{GameRng, DECK_STREAM, NAMES_STREAM};
use crate::core::seat::SeatMap;
use crate::rules::RoundOutcome;
use crate::shell::TwentyOneShell;

use super::dealer::DealerPolicy;
use super::deck::Deck;
use super::players::{Dealer, Player};
use super::round::{Phase, RoundReport, TwentyOneRound};

/// Tally of a finished session. Reporting only; rounds have no threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: SeatMap<u32>,
    pub ties: u32,
}

impl SessionSummary {
    fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        match report.outcome {
            RoundOutcome::Winner(seat) => self.wins[seat] += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
    }
}

/// A human against a named dealer, one fresh deck per round.
#[derive(Clone, Debug)]
pub struct TwentyOneGame {
    round: TwentyOneRound,
    deck_rng: GameRng,
}

impl TwentyOneGame {
    /// Set up the table. The dealer's name is drawn from the config roster.
    pub fn new(config: TwentyOneConfig, player_name: impl Into<String>, rng: &GameRng) -> Result<Self> {
        config.validate()?;

        let mut names = rng.for_context(NAMES_STREAM);
        let dealer = Dealer::new(Participant::computer(&config.dealer_name_source(), &mut names)?);
        let mut deck_rng = rng.for_context(DECK_STREAM);
        let deck = Deck::build(&mut deck_rng);
        let policy = DealerPolicy::new(config.dealer_stand_threshold);

        Ok(Self {
            round: TwentyOneRound::new(Player::new(player_name), dealer, policy, deck),
            deck_rng,
        })
    }

    /// The round in progress (or the one about to be dealt).
    #[must_use]
    pub fn round(&self) -> &TwentyOneRound {
        &self.round
    }

    /// Play rounds until the shell declines to continue.
    ///
    /// A table left finished by an earlier session is reshuffled first.
    pub fn play<S: TwentyOneShell + ?Sized>(&mut self, shell: &mut S) -> Result<SessionSummary> {
        if self.round.phase() != Phase::Dealing {
            self.round.reset(Deck::build(&mut self.deck_rng));
        }
        let mut summary = SessionSummary::default();

        loop {
            let report = self.round.play(shell)?;
            summary.record(&report);

            if !shell.request_continue() {
                break;
            }
            self.round.reset(Deck::build(&mut self.deck_rng));
        }

        debug!(rounds = summary.rounds, ties = summary.ties, "session over");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;
    use crate::core::seat::Seat;
    use crate::games::twenty_one::TableView;
    use crate::shell::Decision;

    /// Always stays, plays a fixed number of rounds.
    struct Stayer {
        rounds_left: u32,
        results: Vec<RoundOutcome>,
    }

    impl TwentyOneShell for Stayer {
        fn request_hit_or_stay(&mut self) -> Decision {
            Decision::Stay
        }

        fn request_continue(&mut self) -> bool {
            self.rounds_left -= 1;
            self.rounds_left > 0
        }

        fn report_state(&mut self, _view: &TableView) {}

        fn report_result(&mut self, report: &RoundReport) {
            self.results.push(report.outcome);
        }
    }

    #[test]
    fn test_dealer_name_from_roster() {
        let config = TwentyOneConfig::default().with_dealer_names(["Robby", "Bender"]);
        let game = TwentyOneGame::new(config, "Ada", &GameRng::new(1)).unwrap();
        assert!(["Robby", "Bender"].contains(&game.round().dealer().name()));
        assert_eq!(game.round().player().name(), "Ada");
        assert_eq!(game.round().phase(), Phase::Dealing);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TwentyOneConfig::default().with_stand_threshold(30);
        let err = TwentyOneGame::new(config, "Ada", &GameRng::new(1)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_session_tally() {
        let mut game = TwentyOneGame::new(TwentyOneConfig::default(), "Ada", &GameRng::new(5)).unwrap();
        let mut shell = Stayer {
            rounds_left: 4,
            results: Vec::new(),
        };

        let summary = game.play(&mut shell).unwrap();

        assert_eq!(summary.rounds, 4);
        assert_eq!(shell.results.len(), 4);
        assert_eq!(summary.wins[Seat::Human] + summary.wins[Seat::Computer] + summary.ties, 4);
    }

    #[test]
    fn test_session_is_reproducible() {
        let play = |seed| {
            let mut game = TwentyOneGame::new(TwentyOneConfig::default(), "Ada", &GameRng::new(seed)).unwrap();
            let mut shell = Stayer {
                rounds_left: 6,
                results: Vec::new(),
            };
            game.play(&mut shell).unwrap();
            shell.results
        };

        assert_eq!(play(11), play(11));
    }

    #[test]
    fn test_back_to_back_sessions() {
        let mut game = TwentyOneGame::new(TwentyOneConfig::default(), "Ada", &GameRng::new(9)).unwrap();
        let mut shell = Stayer {
            rounds_left: 1,
            results: Vec::new(),
        };
        assert_eq!(game.play(&mut shell).unwrap().rounds, 1);
        assert_eq!(game.round().phase(), Phase::Finished);

        shell.rounds_left = 2;
        let second = game.play(&mut shell).unwrap();

        assert_eq!(second.rounds, 2);
        assert_eq!(shell.results.len(), 3);
    }
}
