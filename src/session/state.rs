//! Session state: everything one play-through owns.
//!
//! A `SessionState` is created when a mode is selected and destroyed only by
//! an explicit end-game action. There are no hidden globals: the session
//! object owns the whole value.

use std::collections::BTreeSet;

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::ledger::{ResultsLedger, Scoreboard};
use crate::board::VirtualBoard;
use crate::core::{Category, GameMode, Question, QuestionId, ScoringPath, Team};

/// Top-level steps of the session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// No session exists yet; a mode is being chosen.
    ModeSelect,
    /// Collecting player/team names.
    Setup,
    /// Choosing question categories.
    Categories,
    /// The question loop.
    Game,
    /// Terminal for the round, not for the process.
    End,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::ModeSelect => f.write_str("ModeSelect"),
            Step::Setup => f.write_str("Setup"),
            Step::Categories => f.write_str("Categories"),
            Step::Game => f.write_str("Game"),
            Step::End => f.write_str("End"),
        }
    }
}

/// Who is playing, per mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participants {
    /// Named players for the two- and three-player modes, in turn order.
    Players(Vec<String>),
    /// The two teams.
    Teams { team_a: Team, team_b: Team },
}

/// Complete state of one session.
///
/// Invariants:
/// - `used_question_ids` only grows within a session.
/// - Scoreboard totals only increase.
/// - `questions_asked` counts completed questions (0-based).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current step. Never `ModeSelect`: that step is represented by the
    /// absence of a session.
    pub step: Step,

    /// Mode, fixed at creation.
    pub mode: GameMode,

    /// Scoring path, fixed at creation.
    pub scoring: ScoringPath,

    /// Players or teams; empty until setup is submitted.
    pub participants: Option<Participants>,

    /// Categories selected for this session; defines the active pool.
    pub chosen_categories: BTreeSet<Category>,

    /// Ids already drawn. Monotonic: never shrinks within a session.
    pub used_question_ids: ImHashSet<QuestionId>,

    /// The question currently on the table.
    pub current_question: Option<Question>,

    /// Count of completed questions.
    pub questions_asked: u32,

    /// Running totals per scoring entity.
    pub scoreboard: Scoreboard,

    /// Raised at round boundaries; cleared by the continuation decision.
    pub ask_continue: bool,

    /// Pending manual guesser selection (manual path only).
    pub pending_guesser_points: Option<u8>,

    /// Pending manual director selection (manual path, director modes only).
    pub pending_extra_points: Option<u8>,

    /// Virtual board sub-state (geometric path only, but always present so
    /// the sub-machine's gating is uniform).
    pub board: VirtualBoard,

    /// Per-question result records.
    pub ledger: ResultsLedger,

    /// Whether a remote archive upload has been attempted. Never reset
    /// within a session.
    pub uploaded: bool,
}

impl SessionState {
    /// Create a blank session for the given mode and scoring path, at the
    /// `Setup` step.
    #[must_use]
    pub fn new(mode: GameMode, scoring: ScoringPath) -> Self {
        Self {
            step: Step::Setup,
            mode,
            scoring,
            participants: None,
            chosen_categories: BTreeSet::new(),
            used_question_ids: ImHashSet::new(),
            current_question: None,
            questions_asked: 0,
            scoreboard: Scoreboard::new(),
            ask_continue: false,
            pending_guesser_points: None,
            pending_extra_points: None,
            board: VirtualBoard::new(mode.has_director()),
            ledger: ResultsLedger::new(),
            uploaded: false,
        }
    }

    /// Roster sizes (team A, team B). Zeroes outside team mode or before
    /// setup.
    #[must_use]
    pub fn roster_sizes(&self) -> (usize, usize) {
        match &self.participants {
            Some(Participants::Teams { team_a, team_b }) => (team_a.len(), team_b.len()),
            _ => (0, 0),
        }
    }

    /// Clear the transient per-question selections.
    ///
    /// Required after score application to prevent double-counting on
    /// repeated confirmation actions.
    pub fn clear_transient(&mut self) {
        self.pending_guesser_points = None;
        self.pending_extra_points = None;
        self.board.reset();
    }
}
