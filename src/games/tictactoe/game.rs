//! Round and match controller for Tic-Tac-Toe.
//!
//! ## Structure
//!
//! - A **round** fills one board. Turns alternate by marker: the current
//!   marker flips after every placed move.
//! - A **match** is a run of rounds that ends when either seat's score
//!   reaches the configured win score. Every round restarts with the
//!   match's original first mover.
//! - A **session** is a run of matches. Each new match resets the scores,
//!   draws a new opponent name and asks for markers and first mover again.
//!
//! Declining the next round ends the whole session, not just the match.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::config::{FirstMoverPolicy, TicTacToeConfig};
use crate::core::error::{GameError, Result};
use crate::core::participant::Participant;
use crate::core::rng::{GameRng, FIRST_MOVER_STREAM, HEURISTIC_STREAM, NAMES_STREAM};
use crate::core::seat::{Seat, SeatMap};
use crate::rules::RoundOutcome;
use crate::shell::{Continuation, FirstMover, TicTacToeShell};

use super::board::{Board, Marker, Square};
use super::heuristic::choose_move;

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The other marker moves next.
    Continue,
    /// The move ended the round; scores are already updated.
    RoundOver(RoundOutcome),
}

/// Snapshot of a match for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub squares: [Square; 9],
    pub open_squares: Vec<u8>,
    pub human_name: String,
    pub human_marker: Marker,
    pub computer_name: String,
    pub computer_marker: Marker,
    pub current_marker: Marker,
    pub scores: SeatMap<u32>,
    pub win_score: u32,
}

/// What the shell is told after each round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    pub winning_marker: Option<Marker>,
    /// Set when this round decided the match.
    pub match_winner: Option<Seat>,
    pub view: BoardView,
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub opponent: String,
    pub scores: SeatMap<u32>,
    /// `None` if the session was stopped before anyone reached the win score.
    pub winner: Option<Seat>,
}

/// State of one match: the board, the markers, and the scores.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    human: Participant,
    computer: Participant,
    human_marker: Marker,
    first_marker: Marker,
    current_marker: Marker,
    scores: SeatMap<u32>,
    win_score: u32,
}

impl Match {
    /// Start a match with an empty board and zeroed scores.
    #[must_use]
    pub fn new(
        human: Participant,
        computer: Participant,
        human_marker: Marker,
        first_mover: Seat,
        win_score: u32,
    ) -> Self {
        let first_marker = match first_mover {
            Seat::Human => human_marker,
            Seat::Computer => human_marker.opponent(),
        };
        Self {
            board: Board::new(),
            human,
            computer,
            human_marker,
            first_marker,
            current_marker: first_marker,
            scores: SeatMap::default(),
            win_score,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn scores(&self) -> &SeatMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    #[must_use]
    pub fn marker_of(&self, seat: Seat) -> Marker {
        match seat {
            Seat::Human => self.human_marker,
            Seat::Computer => self.human_marker.opponent(),
        }
    }

    #[must_use]
    pub fn seat_of(&self, marker: Marker) -> Seat {
        if marker == self.human_marker {
            Seat::Human
        } else {
            Seat::Computer
        }
    }

    #[must_use]
    pub fn current_marker(&self) -> Marker {
        self.current_marker
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.seat_of(self.current_marker)
    }

    /// Outcome of the current board, `None` while the round is live.
    #[must_use]
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        match self.board.winner() {
            Some(marker) => Some(RoundOutcome::Winner(self.seat_of(marker))),
            None if self.board.is_full() => Some(RoundOutcome::Tie),
            None => None,
        }
    }

    /// Seat that has reached the win score, if any.
    #[must_use]
    pub fn match_winner(&self) -> Option<Seat> {
        self.scores
            .iter()
            .find(|&(_, &score)| score >= self.win_score)
            .map(|(seat, _)| seat)
    }

    /// Place the current marker at `position` and flip the turn.
    ///
    /// Invalid or occupied squares leave the match untouched. When the move
    /// ends the round the winner's score is incremented.
    pub fn apply_move(&mut self, position: u8) -> Result<TurnOutcome> {
        if self.board.is_terminal() {
            return Err(GameError::RoundOver);
        }

        let marker = self.current_marker;
        self.board.place(position, marker)?;
        trace!(position, %marker, "square marked");
        self.current_marker = marker.opponent();

        match self.round_outcome() {
            Some(outcome) => {
                if let RoundOutcome::Winner(seat) = outcome {
                    self.scores[seat] += 1;
                }
                Ok(TurnOutcome::RoundOver(outcome))
            }
            None => Ok(TurnOutcome::Continue),
        }
    }

    /// The heuristic opponent's square for the current board.
    pub fn computer_move(&self, rng: &mut GameRng) -> Option<u8> {
        let own = self.marker_of(Seat::Computer);
        choose_move(&self.board, own, own.opponent(), rng)
    }

    /// Clear the board and hand the first move back to the original mover.
    pub fn next_round(&mut self) {
        self.board.reset();
        self.current_marker = self.first_marker;
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            squares: self.board.squares(),
            open_squares: self.board.unmarked_positions(),
            human_name: self.participant(Seat::Human).name.clone(),
            human_marker: self.human_marker,
            computer_name: self.participant(Seat::Computer).name.clone(),
            computer_marker: self.marker_of(Seat::Computer),
            current_marker: self.current_marker,
            scores: self.scores.clone(),
            win_score: self.win_score,
        }
    }

    fn record(&self) -> MatchRecord {
        MatchRecord {
            opponent: self.participant(Seat::Computer).name.clone(),
            scores: self.scores.clone(),
            winner: self.match_winner(),
        }
    }
}

/// A human against the heuristic opponent, for as many matches as wanted.
#[derive(Clone, Debug)]
pub struct TicTacToeGame {
    config: TicTacToeConfig,
    human: Participant,
    names_rng: GameRng,
    heuristic_rng: GameRng,
    first_mover_rng: GameRng,
}

impl TicTacToeGame {
    pub fn new(config: TicTacToeConfig, human_name: impl Into<String>, rng: &GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            human: Participant::human(human_name),
            names_rng: rng.for_context(NAMES_STREAM),
            heuristic_rng: rng.for_context(HEURISTIC_STREAM),
            first_mover_rng: rng.for_context(FIRST_MOVER_STREAM),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }

    fn resolve_first_mover<S: TicTacToeShell + ?Sized>(&mut self, shell: &mut S) -> Seat {
        let answer = match self.config.first_mover {
            FirstMoverPolicy::Human => FirstMover::Human,
            FirstMoverPolicy::Computer => FirstMover::Computer,
            FirstMoverPolicy::Choose => shell.request_first_mover(),
        };
        match answer {
            FirstMover::Human => Seat::Human,
            FirstMover::Computer => Seat::Computer,
            FirstMover::Random => Seat::ALL[self.first_mover_rng.gen_range_usize(0..Seat::ALL.len())],
        }
    }

    /// Name the opponent, pick markers and the first mover.
    pub fn start_match<S: TicTacToeShell + ?Sized>(&mut self, shell: &mut S) -> Result<Match> {
        let computer = Participant::computer(&self.config.computer_name_source(), &mut self.names_rng)?;
        let human_marker = shell.request_marker_choice();
        let first_mover = self.resolve_first_mover(shell);

        debug!(
            opponent = %computer.name,
            %human_marker,
            %first_mover,
            "match started"
        );
        Ok(Match::new(
            self.human.clone(),
            computer,
            human_marker,
            first_mover,
            self.config.win_score,
        ))
    }

    /// Ask the shell for a square until one is accepted.
    fn human_turn<S: TicTacToeShell + ?Sized>(&mut self, game: &mut Match, shell: &mut S) -> Result<TurnOutcome> {
        loop {
            let position = shell.request_square(&game.view());
            match game.apply_move(position) {
                Err(err) if err.is_recoverable() => {
                    warn!(position, %err, "square rejected");
                    shell.report_rejected(&err);
                }
                result => return result,
            }
        }
    }

    fn computer_turn(&mut self, game: &mut Match) -> Result<TurnOutcome> {
        let position = game
            .computer_move(&mut self.heuristic_rng)
            .ok_or(GameError::RoundOver)?;
        game.apply_move(position)
    }

    /// Play one round on `game` to completion.
    pub fn play_round<S: TicTacToeShell + ?Sized>(&mut self, game: &mut Match, shell: &mut S) -> Result<RoundSummary> {
        shell.report_state(&game.view());

        loop {
            let turn = match game.current_seat() {
                Seat::Human => self.human_turn(game, shell)?,
                Seat::Computer => self.computer_turn(game)?,
            };
            shell.report_state(&game.view());

            if let TurnOutcome::RoundOver(outcome) = turn {
                let summary = RoundSummary {
                    outcome,
                    winning_marker: game.board().winner(),
                    match_winner: game.match_winner(),
                    view: game.view(),
                };
                debug!(
                    ?outcome,
                    human = game.scores()[Seat::Human],
                    computer = game.scores()[Seat::Computer],
                    "round over"
                );
                shell.report_result(&summary);
                return Ok(summary);
            }
        }
    }

    /// Play matches until the shell stops.
    pub fn play<S: TicTacToeShell + ?Sized>(&mut self, shell: &mut S) -> Result<Vec<MatchRecord>> {
        let mut records = Vec::new();

        'session: loop {
            let mut game = self.start_match(shell)?;

            loop {
                let summary = self.play_round(&mut game, shell)?;
                if summary.match_winner.is_some() {
                    break;
                }
                if !shell.request_continue(Continuation::NextRound) {
                    records.push(game.record());
                    break 'session;
                }
                game.next_round();
            }

            records.push(game.record());
            if !shell.request_continue(Continuation::NewMatch) {
                break;
            }
        }

        debug!(matches = records.len(), "session over");
        Ok(records)
    }
}
