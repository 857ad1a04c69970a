//! Dial geometry: slider-to-angle mapping and wedge layout.
//!
//! The dial is a semicircle spanning 0°-180°. Two continuous slider inputs
//! in [-100, 100] drive it: the responder's hidden answer and the guesser's
//! indicator. Angles here are for rendering only; points are derived from
//! raw slider units (see [`slider_diff`] and the scoring engine).
//!
//! The guess indicator uses two slightly different constant pairs (3°/177°
//! for the standard and score views, 2.5°/177.5° for the direction view).
//! Both are preserved exactly as observed in the source dial.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Lowest slider position.
pub const SLIDER_MIN: i32 = -100;

/// Highest slider position.
pub const SLIDER_MAX: i32 = 100;

/// Offset of the wedge fan's center from the answer angle.
pub const WEDGE_CENTER_BASE: f64 = 3.0;

/// Half of the total wedge fan width (26° across five wedges).
pub const WEDGE_HALF_SPAN: f64 = 13.0;

/// The five wedges: (point band, angular width in degrees).
///
/// Laid out sequentially from the fan's start angle; widths sum to 26.
pub const WEDGE_SEQUENCE: [(u8, f64); 5] = [(2, 5.0), (3, 5.0), (4, 6.0), (3, 5.0), (2, 5.0)];

/// Reject slider values outside [-100, 100].
pub fn check_slider(value: i32) -> Result<(), GameError> {
    if (SLIDER_MIN..=SLIDER_MAX).contains(&value) {
        Ok(())
    } else {
        Err(GameError::invalid_input(format!(
            "slider value {value} outside [{SLIDER_MIN}, {SLIDER_MAX}]"
        )))
    }
}

/// Answer dial angle: slider -100 maps to 174°, +100 to 0°.
#[must_use]
pub fn answer_angle(slider: i32) -> f64 {
    174.0 - f64::from(slider + 100) * 174.0 / 200.0
}

/// Guess indicator angle for the guess and score views: -100 → 177°, +100 → 3°.
#[must_use]
pub fn guess_angle(slider: i32) -> f64 {
    177.0 - f64::from(slider + 100) / 200.0 * (177.0 - 3.0)
}

/// Guess indicator angle for the direction view: -100 → 177.5°, +100 → 2.5°.
#[must_use]
pub fn guess_angle_direction(slider: i32) -> f64 {
    177.5 - f64::from(slider + 100) / 200.0 * (177.5 - 2.5)
}

/// Raw accuracy difference in slider units, answer minus guess.
///
/// Range is -200..=200. The scoring bands operate on this value, not on
/// degrees.
#[must_use]
pub fn slider_diff(answer_slider: i32, guess_slider: i32) -> i32 {
    answer_slider - guess_slider
}

/// One angular scoring zone around the answer angle. Visual only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    /// Point band this wedge represents (2, 3, or 4).
    pub band: u8,

    /// Start angle in degrees, unclipped.
    pub start_deg: f64,

    /// End angle in degrees, unclipped.
    pub end_deg: f64,
}

impl Wedge {
    /// Center angle of the wedge.
    #[must_use]
    pub fn center_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }

    /// Wedge extent clipped to the visible semicircle [0°, 180°].
    ///
    /// `None` if the wedge lies entirely off the dial.
    #[must_use]
    pub fn clipped(&self) -> Option<(f64, f64)> {
        let start = self.start_deg.max(0.0);
        let end = self.end_deg.min(180.0);
        if start >= end {
            None
        } else {
            Some((start, end))
        }
    }
}

/// Lay out the five wedges for the given answer slider position.
///
/// The fan starts at `3 - 13 + answer_angle` and wedges follow sequentially
/// by cumulative width.
#[must_use]
pub fn wedge_layout(answer_slider: i32) -> [Wedge; 5] {
    let start = WEDGE_CENTER_BASE - WEDGE_HALF_SPAN + answer_angle(answer_slider);

    let mut wedges = [Wedge {
        band: 0,
        start_deg: 0.0,
        end_deg: 0.0,
    }; 5];
    let mut running = start;
    for (i, (band, width)) in WEDGE_SEQUENCE.iter().enumerate() {
        wedges[i] = Wedge {
            band: *band,
            start_deg: running,
            end_deg: running + width,
        };
        running += width;
    }
    wedges
}
