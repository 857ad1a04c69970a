//! Crate-wide error type.
//!
//! Pool exhaustion is deliberately not represented here: running out of
//! questions is a normal session ending, not a failure. Soft setup issues
//! (team imbalance of exactly one) surface as `SetupWarning` values from the
//! session, not as errors.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// Hard setup violation: roster size out of bounds, imbalance above one,
    /// blank participant names.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A scoring input outside its enumeration, or a slider outside
    /// [-100, 100]. The presentation layer is expected to constrain these
    /// upstream; the engine rejects them anyway.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An action that is not legal in the current step or sub-step.
    #[error("illegal action in {step}: {message}")]
    IllegalAction { step: String, message: String },

    /// Failure reported by an external collaborator (archive upload).
    /// Non-fatal: the session catches and downgrades this to a warning.
    #[error("external collaborator failure: {message}")]
    External { message: String },
}

impl GameError {
    /// Build a `Configuration` error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Build an `IllegalAction` error for the given step.
    pub fn illegal_action(step: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self::IllegalAction {
            step: step.to_string(),
            message: message.into(),
        }
    }

    /// Build an `External` error.
    pub fn external(message: impl Into<String>) -> Self {
        Self::External {
            message: message.into(),
        }
    }
}
