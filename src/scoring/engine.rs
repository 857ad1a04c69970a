//! Pure point computation.
//!
//! Two award paths per question, selected once per session:
//!
//! - **Manual**: the guesser's points are picked directly from {0, 2, 3, 4}
//!   and, in modes with a director, the bonus from {0, 1}.
//! - **Geometric**: points are derived from the committed board sliders.
//!
//! Both paths share the responder banding table. Everything here is
//! side-effect-free; score application lives in the session.

use serde::{Deserialize, Serialize};

use crate::board::DirectorChoice;
use crate::error::GameError;

/// The legal guesser point values.
pub const GUESSER_POINT_VALUES: [u8; 4] = [0, 2, 3, 4];

/// Guesser points from the raw slider difference.
///
/// A function of `|diff|` only: ≤3 → 4, ≤9 → 3, ≤15 → 2, otherwise 0.
#[must_use]
pub fn guesser_points_from_diff(diff: i32) -> u8 {
    match diff.abs() {
        0..=3 => 4,
        4..=9 => 3,
        10..=15 => 2,
        _ => 0,
    }
}

/// Responder base points from the guesser's points.
///
/// Banding: 0 → 0, 2 → 1, 3 → 1, 4 → 2. Any other input is rejected.
pub fn responder_base_points(guesser_points: u8) -> Result<u8, GameError> {
    match guesser_points {
        0 => Ok(0),
        2 | 3 => Ok(1),
        4 => Ok(2),
        other => Err(GameError::invalid_input(format!(
            "guesser points must be one of 0, 2, 3, 4; got {other}"
        ))),
    }
}

/// Reject a director bonus outside {0, 1}.
pub fn validate_extra_points(extra: u8) -> Result<(), GameError> {
    if extra <= 1 {
        Ok(())
    } else {
        Err(GameError::invalid_input(format!(
            "extra points must be 0 or 1; got {extra}"
        )))
    }
}

/// Director bonus from the slider difference and the director's call.
///
/// 1 iff the call names the band the diff actually fell in:
/// left for diff ≤ -4, right for diff ≥ 4, perfect for |diff| ≤ 3.
#[must_use]
pub fn director_bonus(diff: i32, choice: DirectorChoice) -> u8 {
    let hit = match choice {
        DirectorChoice::Left => diff <= -4,
        DirectorChoice::Right => diff >= 4,
        DirectorChoice::Perfect => diff.abs() <= 3,
    };
    u8::from(hit)
}

/// Points awarded for one question, by role.
///
/// `responder` already includes the director bonus where one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Points for the guessing role.
    pub guesser: u8,

    /// Total points for the responder (base + extra).
    pub responder: u8,

    /// Responder points earned from the guesser's accuracy alone.
    pub responder_base: u8,

    /// Director bonus (0 in two-player mode).
    pub extra: u8,
}

/// Score via the manual path.
///
/// `extra` must be `Some` exactly when the mode has a director; both inputs
/// are re-validated here even when the caller constrains them upstream.
pub fn score_manual(guesser_points: u8, extra: Option<u8>) -> Result<ScoreBreakdown, GameError> {
    let responder_base = responder_base_points(guesser_points)?;
    let extra = match extra {
        Some(e) => {
            validate_extra_points(e)?;
            e
        }
        None => 0,
    };
    Ok(ScoreBreakdown {
        guesser: guesser_points,
        responder: responder_base + extra,
        responder_base,
        extra,
    })
}

/// Score via the geometric path.
///
/// `director_choice` is `None` in two-player mode or when the director made
/// no call that matters; the bonus is 0 in that case.
pub fn score_geometric(
    diff: i32,
    director_choice: Option<DirectorChoice>,
) -> Result<ScoreBreakdown, GameError> {
    let guesser = guesser_points_from_diff(diff);
    let responder_base = responder_base_points(guesser)?;
    let extra = director_choice.map_or(0, |choice| director_bonus(diff, choice));
    Ok(ScoreBreakdown {
        guesser,
        responder: responder_base + extra,
        responder_base,
        extra,
    })
}
