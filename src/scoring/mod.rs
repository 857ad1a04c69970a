//! Scoring engine: pure, role-independent point computation.

pub mod engine;

pub use engine::{
    director_bonus, guesser_points_from_diff, responder_base_points, score_geometric,
    score_manual, validate_extra_points, ScoreBreakdown, GUESSER_POINT_VALUES,
};
