//! The virtual board sub-state machine.
//!
//! Flow: `Answer → Guess → (Direction, only when a director role exists) →
//! Score → reset back to Answer`. Every transition is gated by an explicit
//! confirmation action; there are no implicit timeouts. The machine can be
//! abandoned at any sub-step, which returns it to `Answer` with sliders
//! zeroed and the director choice cleared.
//!
//! Slider values are committed at confirmation time, not while moving, so an
//! uncommitted drag never affects scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geometry::{check_slider, slider_diff};
use crate::error::GameError;

/// Sub-steps of the virtual board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStep {
    /// Responder places the hidden answer.
    Answer,
    /// Guesser places the indicator.
    Guess,
    /// Director calls left/perfect/right (modes with a director only).
    Direction,
    /// Both inputs committed; points can be derived and applied.
    Score,
}

impl std::fmt::Display for BoardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardStep::Answer => f.write_str("Answer"),
            BoardStep::Guess => f.write_str("Guess"),
            BoardStep::Direction => f.write_str("Direction"),
            BoardStep::Score => f.write_str("Score"),
        }
    }
}

/// The director's directional call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorChoice {
    /// Awarded when diff ≤ -4.
    Left,
    /// Awarded when |diff| ≤ 3.
    Perfect,
    /// Awarded when diff ≥ 4.
    Right,
}

/// Virtual board state for one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualBoard {
    answer_slider: i32,
    guess_slider: i32,
    director_choice: Option<DirectorChoice>,
    step: BoardStep,
    has_director: bool,
}

impl VirtualBoard {
    /// Create a fresh board at the `Answer` sub-step.
    ///
    /// `has_director` controls whether the `Direction` sub-step exists;
    /// it is false only in two-player mode.
    #[must_use]
    pub fn new(has_director: bool) -> Self {
        Self {
            answer_slider: 0,
            guess_slider: 0,
            director_choice: None,
            step: BoardStep::Answer,
            has_director,
        }
    }

    /// Current sub-step.
    #[must_use]
    pub fn step(&self) -> BoardStep {
        self.step
    }

    /// Committed answer slider value.
    #[must_use]
    pub fn answer_slider(&self) -> i32 {
        self.answer_slider
    }

    /// Committed guess slider value.
    #[must_use]
    pub fn guess_slider(&self) -> i32 {
        self.guess_slider
    }

    /// The director's committed call, if any.
    #[must_use]
    pub fn director_choice(&self) -> Option<DirectorChoice> {
        self.director_choice
    }

    /// Whether this board includes the direction sub-step.
    #[must_use]
    pub fn has_director(&self) -> bool {
        self.has_director
    }

    /// Raw accuracy difference (answer minus guess) in slider units.
    #[must_use]
    pub fn diff(&self) -> i32 {
        slider_diff(self.answer_slider, self.guess_slider)
    }

    /// Commit the responder's answer and advance to `Guess`.
    pub fn confirm_answer(&mut self, slider: i32) -> Result<(), GameError> {
        self.expect_step(BoardStep::Answer, "confirm answer")?;
        check_slider(slider)?;
        self.answer_slider = slider;
        self.step = BoardStep::Guess;
        debug!(slider, "answer committed");
        Ok(())
    }

    /// Commit the guesser's placement and advance to `Direction` (when a
    /// director exists) or straight to `Score`.
    pub fn confirm_guess(&mut self, slider: i32) -> Result<(), GameError> {
        self.expect_step(BoardStep::Guess, "confirm guess")?;
        check_slider(slider)?;
        self.guess_slider = slider;
        self.step = if self.has_director {
            BoardStep::Direction
        } else {
            BoardStep::Score
        };
        debug!(slider, next = %self.step, "guess committed");
        Ok(())
    }

    /// Record (or change) the director's call. Legal only at `Direction`.
    pub fn choose_direction(&mut self, choice: DirectorChoice) -> Result<(), GameError> {
        self.expect_step(BoardStep::Direction, "choose direction")?;
        self.director_choice = Some(choice);
        Ok(())
    }

    /// Confirm the director's call and advance to `Score`.
    ///
    /// Requires a prior [`choose_direction`](Self::choose_direction).
    pub fn confirm_direction(&mut self) -> Result<(), GameError> {
        self.expect_step(BoardStep::Direction, "confirm direction")?;
        if self.director_choice.is_none() {
            return Err(GameError::illegal_action(
                self.step,
                "no direction chosen yet",
            ));
        }
        self.step = BoardStep::Score;
        Ok(())
    }

    /// Reset to the initial sub-step: sliders zeroed, choice cleared.
    ///
    /// Called after score application and by explicit abandonment. This
    /// clearing is what makes a replayed score confirmation inert.
    pub fn reset(&mut self) {
        self.answer_slider = 0;
        self.guess_slider = 0;
        self.director_choice = None;
        self.step = BoardStep::Answer;
    }

    /// Abandon the current sub-step, discarding all committed input.
    pub fn abandon(&mut self) {
        debug!(from = %self.step, "board abandoned");
        self.reset();
    }

    fn expect_step(&self, expected: BoardStep, what: &str) -> Result<(), GameError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(GameError::illegal_action(
                self.step,
                format!("cannot {what} here"),
            ))
        }
    }
}
