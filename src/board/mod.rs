//! Virtual board: dial geometry and the confirmation-gated sub-machine.
//!
//! ## Key Types
//!
//! - [`VirtualBoard`]: per-question sub-state machine (Answer → Guess →
//!   Direction → Score)
//! - [`Wedge`] / [`wedge_layout`]: the five visual point-band zones
//! - [`DirectorChoice`]: the director's left/perfect/right call

pub mod geometry;
pub mod state;

pub use geometry::{
    answer_angle, check_slider, guess_angle, guess_angle_direction, slider_diff, wedge_layout,
    Wedge, SLIDER_MAX, SLIDER_MIN, WEDGE_CENTER_BASE, WEDGE_HALF_SPAN, WEDGE_SEQUENCE,
};
pub use state::{BoardStep, DirectorChoice, VirtualBoard};
