//! Core types: questions, participants, modes, RNG.
//!
//! These are the game-agnostic building blocks shared by the board, scoring,
//! scheduling, and session layers.

pub mod mode;
pub mod question;
pub mod rng;
pub mod roster;

pub use mode::{GameMode, ScoringPath};
pub use question::{Category, Question, QuestionId};
pub use rng::{GameRng, GameRngState};
pub use roster::{
    validate_player_names, validate_teams, Player, SetupWarning, Team, TeamSide, MAX_TEAM_SIZE,
    MIN_TEAM_SIZE,
};
