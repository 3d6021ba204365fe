//! Round controller for Twenty-One.
//!
//! A round runs through four phases:
//!
//! 1. `Dealing`: two cards each, player first, alternating
//! 2. `PlayerTurn`: hit until stay or bust
//! 3. `DealerTurn`: dealer policy until standing or bust
//! 4. `Finished`: the outcome can be resolved
//!
//! A player bust skips the dealer turn entirely. The step methods (`hit`,
//! `stay`, ...) can be driven directly; `play` drives them through a shell.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::error::{GameError, Result};
use crate::core::seat::Seat;
use crate::rules::RoundOutcome;
use crate::shell::{Decision, TwentyOneShell};

use super::card::Card;
use super::dealer::DealerPolicy;
use super::deck::Deck;
use super::hand::{Hand, HasHand};
use super::players::{Dealer, Player};

/// Where a round currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Finished,
}

/// Why the round ended the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    PlayerBusted,
    DealerBusted,
    /// Neither busted; totals were compared.
    Totals,
}

/// Snapshot of the table for display.
///
/// During the flop only the dealer's up card is listed and `dealer_total`
/// is that card's value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub player_name: String,
    pub player_cards: Vec<Card>,
    pub player_total: u32,
    pub dealer_name: String,
    pub dealer_cards: Vec<Card>,
    /// Dealer cards dealt but not shown.
    pub dealer_hidden: usize,
    pub dealer_total: u32,
}

/// Final result of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub resolution: Resolution,
    /// Fully revealed table.
    pub view: TableView,
}

/// One round of Twenty-One. Owns the deck and both hands.
#[derive(Clone, Debug)]
pub struct TwentyOneRound {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    policy: DealerPolicy,
    phase: Phase,
}

impl TwentyOneRound {
    #[must_use]
    pub fn new(player: Player, dealer: Dealer, policy: DealerPolicy, deck: Deck) -> Self {
        Self {
            deck,
            player,
            dealer,
            policy,
            phase: Phase::Dealing,
        }
    }

    /// Discard both hands and start over with a fresh deck.
    pub fn reset(&mut self, deck: Deck) {
        self.deck = deck;
        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.phase = Phase::Dealing;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn expect_phase(&self, phase: Phase) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::RoundOver)
        }
    }

    /// Deal two cards each, alternating player and dealer.
    pub fn deal_initial(&mut self) -> Result<()> {
        self.expect_phase(Phase::Dealing)?;
        for _ in 0..2 {
            let card = self.deck.deal_one()?;
            self.player.add_card(card);
            let card = self.deck.deal_one()?;
            self.dealer.add_card(card);
        }
        debug!(
            player_total = self.player.total(),
            up_card = ?self.dealer.up_card(),
            "initial deal"
        );
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Draw one card for the player. A bust ends the round.
    pub fn hit(&mut self) -> Result<Card> {
        self.expect_phase(Phase::PlayerTurn)?;
        let card = self.deck.deal_one()?;
        self.player.add_card(card);
        trace!(%card, total = self.player.total(), "player hits");

        if self.player.is_busted() {
            debug!(total = self.player.total(), "player busted");
            self.phase = Phase::Finished;
        }
        Ok(card)
    }

    /// End the player turn.
    pub fn stay(&mut self) -> Result<()> {
        self.expect_phase(Phase::PlayerTurn)?;
        trace!(total = self.player.total(), "player stays");
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Run the dealer policy to completion. Returns the number of draws.
    pub fn dealer_turn(&mut self) -> Result<usize> {
        self.expect_phase(Phase::DealerTurn)?;
        let draws = self.policy.play(self.dealer.hand_mut(), &mut self.deck)?;
        debug!(draws, total = self.dealer.total(), "dealer stands");
        self.phase = Phase::Finished;
        Ok(draws)
    }

    /// Outcome of a finished round, `None` while play continues.
    #[must_use]
    pub fn resolve(&self) -> Option<RoundReport> {
        if self.phase != Phase::Finished {
            return None;
        }

        let (outcome, resolution) = if self.player.is_busted() {
            (RoundOutcome::Winner(Seat::Computer), Resolution::PlayerBusted)
        } else if self.dealer.is_busted() {
            (RoundOutcome::Winner(Seat::Human), Resolution::DealerBusted)
        } else {
            let outcome = match self.player.total().cmp(&self.dealer.total()) {
                std::cmp::Ordering::Greater => RoundOutcome::Winner(Seat::Human),
                std::cmp::Ordering::Less => RoundOutcome::Winner(Seat::Computer),
                std::cmp::Ordering::Equal => RoundOutcome::Tie,
            };
            (outcome, Resolution::Totals)
        };

        Some(RoundReport {
            outcome,
            resolution,
            view: self.full_view(),
        })
    }

    /// Table with the dealer's hole card hidden.
    #[must_use]
    pub fn flop_view(&self) -> TableView {
        let shown: Vec<Card> = self.dealer.up_card().into_iter().collect();
        let dealer_total = Hand::from_cards(shown.iter().copied()).total();
        TableView {
            dealer_hidden: self.dealer.hand().len() - shown.len(),
            dealer_cards: shown,
            dealer_total,
            ..self.full_view()
        }
    }

    /// Table with every card face up.
    #[must_use]
    pub fn full_view(&self) -> TableView {
        TableView {
            player_name: self.player.name().to_string(),
            player_cards: self.player.hand().cards().to_vec(),
            player_total: self.player.total(),
            dealer_name: self.dealer.name().to_string(),
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_hidden: 0,
            dealer_total: self.dealer.total(),
        }
    }

    /// Play the round from the deal to the result through `shell`.
    pub fn play<S: TwentyOneShell + ?Sized>(&mut self, shell: &mut S) -> Result<RoundReport> {
        self.deal_initial()?;
        shell.report_state(&self.flop_view());

        while self.phase == Phase::PlayerTurn {
            match shell.request_hit_or_stay() {
                Decision::Hit => {
                    self.hit()?;
                    shell.report_state(&self.flop_view());
                }
                Decision::Stay => self.stay()?,
            }
        }

        if self.phase == Phase::DealerTurn {
            self.dealer_turn()?;
        }

        let report = self.resolve().ok_or(GameError::RoundOver)?;
        debug!(
            player_won = report.outcome.is_winner(Seat::Human),
            outcome = ?report.outcome,
            resolution = ?report.resolution,
            "round over"
        );
        shell.report_state(&report.view);
        shell.report_result(&report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::participant::{Participant, ParticipantKind};
    use crate::games::twenty_one::card::{Rank, Suit};

    fn c(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    fn round(deal_order: Vec<Card>) -> TwentyOneRound {
        let dealer = Dealer::new(Participant {
            name: "Hal".into(),
            kind: ParticipantKind::Computer,
        });
        TwentyOneRound::new(Player::new("Ada"), dealer, DealerPolicy::default(), Deck::stacked(deal_order))
    }

    #[test]
    fn test_initial_deal_alternates() {
        // player, dealer, player, dealer
        let mut r = round(vec![c(Rank::Two), c(Rank::Three), c(Rank::Four), c(Rank::Five)]);
        r.deal_initial().unwrap();

        assert_eq!(r.player().hand().cards(), &[c(Rank::Two), c(Rank::Four)]);
        assert_eq!(r.dealer().hand().cards(), &[c(Rank::Three), c(Rank::Five)]);
        assert_eq!(r.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn test_flop_hides_hole_card() {
        let mut r = round(vec![c(Rank::Ten), c(Rank::Ace), c(Rank::Nine), c(Rank::King)]);
        r.deal_initial().unwrap();

        let flop = r.flop_view();
        assert_eq!(flop.player_total, 19);
        assert_eq!(flop.dealer_cards, vec![c(Rank::Ace)]);
        assert_eq!(flop.dealer_hidden, 1);
        assert_eq!(flop.dealer_total, 11);

        let full = r.full_view();
        assert_eq!(full.dealer_cards.len(), 2);
        assert_eq!(full.dealer_total, 21);
    }

    #[test]
    fn test_player_bust_skips_dealer() {
        let mut r = round(vec![
            c(Rank::Ten),
            c(Rank::Two),
            c(Rank::Nine),
            c(Rank::Three),
            c(Rank::Five),
        ]);
        r.deal_initial().unwrap();
        r.hit().unwrap();

        assert_eq!(r.phase(), Phase::Finished);
        assert_eq!(r.dealer_turn(), Err(GameError::RoundOver));

        let report = r.resolve().unwrap();
        assert_eq!(report.outcome, RoundOutcome::Winner(Seat::Computer));
        assert_eq!(report.resolution, Resolution::PlayerBusted);
        assert_eq!(report.view.dealer_cards.len(), 2);
    }

    #[test]
    fn test_dealer_bust() {
        let mut r = round(vec![
            c(Rank::Ten),
            c(Rank::Ten),
            c(Rank::Eight),
            c(Rank::Six),
            c(Rank::King),
        ]);
        r.deal_initial().unwrap();
        r.stay().unwrap();
        assert_eq!(r.dealer_turn().unwrap(), 1);

        let report = r.resolve().unwrap();
        assert_eq!(report.outcome, RoundOutcome::Winner(Seat::Human));
        assert_eq!(report.resolution, Resolution::DealerBusted);
    }

    #[test]
    fn test_totals_compared() {
        let mut r = round(vec![c(Rank::Ten), c(Rank::Ten), c(Rank::Nine), c(Rank::Seven)]);
        r.deal_initial().unwrap();
        r.stay().unwrap();
        r.dealer_turn().unwrap();

        let report = r.resolve().unwrap();
        assert_eq!(report.outcome, RoundOutcome::Winner(Seat::Human));
        assert_eq!(report.resolution, Resolution::Totals);
    }

    #[test]
    fn test_equal_totals_tie() {
        let mut r = round(vec![c(Rank::Ten), c(Rank::Jack), c(Rank::Eight), c(Rank::Eight)]);
        r.deal_initial().unwrap();
        r.stay().unwrap();
        r.dealer_turn().unwrap();

        assert_eq!(r.resolve().unwrap().outcome, RoundOutcome::Tie);
    }

    #[test]
    fn test_steps_out_of_order() {
        let mut r = round(vec![c(Rank::Ten), c(Rank::Jack), c(Rank::Eight), c(Rank::Eight)]);
        assert_eq!(r.hit(), Err(GameError::RoundOver));
        assert!(r.resolve().is_none());

        r.deal_initial().unwrap();
        assert_eq!(r.deal_initial(), Err(GameError::RoundOver));
        assert_eq!(r.dealer_turn(), Err(GameError::RoundOver));
    }

    #[test]
    fn test_reset_clears_hands() {
        let mut r = round(vec![c(Rank::Ten), c(Rank::Jack), c(Rank::Eight), c(Rank::Eight)]);
        r.deal_initial().unwrap();
        r.reset(Deck::ordered());

        assert_eq!(r.phase(), Phase::Dealing);
        assert!(r.player().hand().is_empty());
        assert!(r.dealer().hand().is_empty());
        assert_eq!(r.deck().remaining(), 52);
    }
}
