//! # spectrum-engine
//!
//! Engine for a turn-based party guessing game built around a hidden-dial
//! board: a responder secretly places an answer on a -100..=100 slider, a
//! guesser tries to land on it, and (in the larger modes) a director calls
//! which side the guess fell on.
//!
//! ## Design Principles
//!
//! 1. **Interface-Free Core**: No rendering, no spreadsheet writing, no
//!    network transport. Those live behind the `export` traits.
//!
//! 2. **One Event Surface**: Every input is a `SessionAction` consumed by
//!    `GameSession::apply`; scoring, recording, and transient resets happen
//!    atomically so replayed confirmations cannot double-count.
//!
//! 3. **Deterministic Draws**: Question selection runs on a seeded ChaCha8
//!    RNG, so a fixed bank, seed, and action sequence replays exactly.
//!
//! ## Modules
//!
//! - `core`: Questions, categories, players, teams, modes, RNG
//! - `board`: Virtual-board geometry and the answer/guess/direction sub-machine
//! - `scoring`: Point bands, director bonus, manual and geometric paths
//! - `schedule`: Role rotation per mode
//! - `session`: The session state machine, results ledger, scoreboard
//! - `export`: Question bank, tabular export, and remote archive boundaries
//! - `error`: The crate-wide error type

pub mod board;
pub mod core;
pub mod error;
pub mod export;
pub mod schedule;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Category, GameMode, GameRng, GameRngState, Player, Question, QuestionId, ScoringPath,
    SetupWarning, Team, TeamSide,
};

pub use crate::board::{BoardStep, DirectorChoice, VirtualBoard, Wedge};

pub use crate::scoring::{ScoreBreakdown, GUESSER_POINT_VALUES};

pub use crate::schedule::{RoleAssignment, TurnScheduler};

pub use crate::session::{
    GameSession, Participants, ResultRecord, ResultsLedger, RoleNames, Scoreboard, SessionAction,
    SessionState, SetupInput, Step, UploadOutcome,
};

pub use crate::export::{
    archive_filename, InMemoryQuestionBank, QuestionBank, RemoteArchive, ResultsExport,
};

pub use crate::error::GameError;
