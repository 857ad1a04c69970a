//! Game modes and the per-session scoring path.

use serde::{Deserialize, Serialize};

/// The three play modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two players alternating responder/guesser. No director.
    TwoPlayer,
    /// Three players rotating through all three roles on a fixed 6-cycle.
    ThreePlayer,
    /// Two teams; the guessing team supplies the responder, the other team
    /// directs collectively.
    Team,
}

impl GameMode {
    /// Whether this mode has a director role.
    #[must_use]
    pub const fn has_director(self) -> bool {
        !matches!(self, GameMode::TwoPlayer)
    }

    /// Number of individually named players, where fixed.
    ///
    /// `None` for team mode, where rosters are sized at setup.
    #[must_use]
    pub const fn fixed_player_count(self) -> Option<usize> {
        match self {
            GameMode::TwoPlayer => Some(2),
            GameMode::ThreePlayer => Some(3),
            GameMode::Team => None,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("two-player"),
            GameMode::ThreePlayer => f.write_str("three-player"),
            GameMode::Team => f.write_str("team"),
        }
    }
}

/// How points are collected for each question.
///
/// Chosen once at mode selection and fixed for the whole session; there is
/// no transition between the two paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPath {
    /// Guesser (and director) points are selected directly from their
    /// enumerations.
    Manual,
    /// Points are derived from slider geometry on the virtual board.
    VirtualBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_presence() {
        assert!(!GameMode::TwoPlayer.has_director());
        assert!(GameMode::ThreePlayer.has_director());
        assert!(GameMode::Team.has_director());
    }

    #[test]
    fn test_fixed_player_count() {
        assert_eq!(GameMode::TwoPlayer.fixed_player_count(), Some(2));
        assert_eq!(GameMode::ThreePlayer.fixed_player_count(), Some(3));
        assert_eq!(GameMode::Team.fixed_player_count(), None);
    }
}
