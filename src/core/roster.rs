//! Players, teams, and setup validation.
//!
//! ## Validation tiers
//!
//! - Hard errors (`GameError::Configuration`) block advancing past setup:
//!   blank names, roster size outside [2, 7], team imbalance above one.
//! - Soft warnings (`SetupWarning`) never block: an imbalance of exactly one
//!   is reported but the user may proceed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GameError;

/// Minimum players per team.
pub const MIN_TEAM_SIZE: usize = 2;

/// Maximum players per team.
pub const MAX_TEAM_SIZE: usize = 7;

/// A participating player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One of the two sides in team mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::A => f.write_str("Team A"),
            TeamSide::B => f.write_str("Team B"),
        }
    }
}

/// A team: a name and an ordered roster of 2-7 players.
///
/// Roster order matters: the responder rotation cycles through it by index.
/// SmallVec keeps the bounded roster inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team name, used as a scoring entity.
    pub name: String,

    /// Ordered roster.
    pub roster: SmallVec<[Player; 7]>,
}

impl Team {
    /// Create a team with an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: SmallVec::new(),
        }
    }

    /// Create a team with the given player names.
    pub fn with_players<I, S>(name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            roster: players.into_iter().map(Player::new).collect(),
        }
    }

    /// Roster size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Scoring-entity key for the roster member at `index`.
    ///
    /// Uses the qualified `"{player}_{team}"` form so player entities stay
    /// unique across teams and export rows stay self-describing.
    #[must_use]
    pub fn qualified_name(&self, index: usize) -> String {
        format!("{}_{}", self.roster[index].name, self.name)
    }

    /// Qualified scoring-entity keys for the whole roster, in order.
    pub fn qualified_names(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.roster.len()).map(|i| self.qualified_name(i))
    }
}

/// Soft setup issue: reported, never blocking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupWarning {
    /// Teams differ by exactly one player.
    UnevenTeams {
        /// Side with the larger roster.
        larger: TeamSide,
    },
}

impl std::fmt::Display for SetupWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupWarning::UnevenTeams { larger } => {
                write!(f, "teams are uneven: {larger} has one more player")
            }
        }
    }
}

/// Validate individual player names for the 2/3-player modes.
///
/// Names must be non-blank after trimming.
pub fn validate_player_names(names: &[String]) -> Result<(), GameError> {
    for (i, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(GameError::configuration(format!(
                "player {} has a blank name",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Validate team composition for team mode.
///
/// Returns soft warnings on success. Hard failures: blank names, roster size
/// outside [2, 7], imbalance greater than one.
pub fn validate_teams(team_a: &Team, team_b: &Team) -> Result<Vec<SetupWarning>, GameError> {
    for team in [team_a, team_b] {
        if team.name.trim().is_empty() {
            return Err(GameError::configuration("team has a blank name"));
        }
        for player in &team.roster {
            if player.name.trim().is_empty() {
                return Err(GameError::configuration(format!(
                    "team {} has a player with a blank name",
                    team.name
                )));
            }
        }
        if team.len() < MIN_TEAM_SIZE || team.len() > MAX_TEAM_SIZE {
            return Err(GameError::configuration(format!(
                "team {} must have {MIN_TEAM_SIZE}-{MAX_TEAM_SIZE} players, has {}",
                team.name,
                team.len()
            )));
        }
    }

    let diff = team_a.len() as i64 - team_b.len() as i64;
    if diff.abs() > 1 {
        return Err(GameError::configuration(format!(
            "teams differ by {} players; at most 1 allowed",
            diff.abs()
        )));
    }

    let mut warnings = Vec::new();
    if diff != 0 {
        warnings.push(SetupWarning::UnevenTeams {
            larger: if diff > 0 { TeamSide::A } else { TeamSide::B },
        });
    }
    Ok(warnings)
}
