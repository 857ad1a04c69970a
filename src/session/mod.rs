//! Session layer: state machine, per-question records, and running totals.
//!
//! [`GameSession`] is the single entry point for driving a game: it owns the
//! question bank, the deterministic RNG, and the optional [`SessionState`],
//! and consumes [`SessionAction`] events one at a time.

mod ledger;
mod machine;
mod state;

pub use ledger::{ResultRecord, ResultsLedger, Scoreboard};
pub use machine::{GameSession, RoleNames, SessionAction, SetupInput, UploadOutcome};
pub use state::{Participants, SessionState, Step};
