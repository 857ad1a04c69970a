//! Turn scheduling: who responds, guesses, and directs each question.
//!
//! Assignments are a pure function of the 0-based count of completed
//! questions and the mode configuration:
//!
//! - **Two-player**: alternation with period 2, no director.
//! - **Three-player**: a fixed 6-cycle in which every player holds each role
//!   exactly twice and the three roles are always distinct.
//! - **Team**: 1-based question parity selects the guessing team (even →
//!   team A, odd → team B); the responder comes from the guessing team's own
//!   roster, cycled by `(question_number / 2) mod roster_len`; the other
//!   team directs collectively.

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, TeamSide};

/// The three-player role cycle: (responder, guesser, director) player
/// indices, indexed by `questions_asked % 6`.
pub const THREE_PLAYER_CYCLE: [(usize, usize, usize); 6] = [
    (0, 2, 1),
    (1, 2, 0),
    (2, 1, 0),
    (0, 1, 2),
    (1, 0, 2),
    (2, 0, 1),
];

/// Role assignment for one question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    /// Two-player: indices into the player list.
    TwoPlayer { responder: usize, guesser: usize },
    /// Three-player: indices into the player list, all distinct.
    ThreePlayer {
        responder: usize,
        guesser: usize,
        director: usize,
    },
    /// Team: the guessing side, the index of the responder within the
    /// guessing side's roster, and the directing side.
    Team {
        guessing: TeamSide,
        responder_index: usize,
        directing: TeamSide,
    },
}

/// Per-session scheduler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScheduler {
    mode: GameMode,
    roster_a: usize,
    roster_b: usize,
}

impl TurnScheduler {
    /// Scheduler for two-player mode.
    #[must_use]
    pub fn two_player() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            roster_a: 0,
            roster_b: 0,
        }
    }

    /// Scheduler for three-player mode.
    #[must_use]
    pub fn three_player() -> Self {
        Self {
            mode: GameMode::ThreePlayer,
            roster_a: 0,
            roster_b: 0,
        }
    }

    /// Scheduler for team mode with the given roster sizes.
    #[must_use]
    pub fn team(roster_a: usize, roster_b: usize) -> Self {
        assert!(roster_a > 0 && roster_b > 0, "team rosters must be non-empty");
        Self {
            mode: GameMode::Team,
            roster_a,
            roster_b,
        }
    }

    /// The mode this scheduler serves.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Questions per round: 2 (two-player), 6 (three-player),
    /// `2 × max(|A|, |B|)` (team).
    #[must_use]
    pub fn questions_per_round(&self) -> u32 {
        match self.mode {
            GameMode::TwoPlayer => 2,
            GameMode::ThreePlayer => 6,
            GameMode::Team => 2 * self.roster_a.max(self.roster_b) as u32,
        }
    }

    /// Role assignment for the next question, given the 0-based count of
    /// completed questions.
    #[must_use]
    pub fn assign(&self, questions_asked: u32) -> RoleAssignment {
        match self.mode {
            GameMode::TwoPlayer => {
                if questions_asked % 2 == 0 {
                    RoleAssignment::TwoPlayer {
                        responder: 0,
                        guesser: 1,
                    }
                } else {
                    RoleAssignment::TwoPlayer {
                        responder: 1,
                        guesser: 0,
                    }
                }
            }
            GameMode::ThreePlayer => {
                let (responder, guesser, director) =
                    THREE_PLAYER_CYCLE[(questions_asked % 6) as usize];
                RoleAssignment::ThreePlayer {
                    responder,
                    guesser,
                    director,
                }
            }
            GameMode::Team => {
                let question_number = questions_asked + 1;
                let guessing = if question_number % 2 == 0 {
                    TeamSide::A
                } else {
                    TeamSide::B
                };
                let roster = match guessing {
                    TeamSide::A => self.roster_a,
                    TeamSide::B => self.roster_b,
                };
                RoleAssignment::Team {
                    guessing,
                    responder_index: (question_number / 2) as usize % roster,
                    directing: guessing.other(),
                }
            }
        }
    }
}
