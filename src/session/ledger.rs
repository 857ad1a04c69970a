//! Results ledger and scoreboard.
//!
//! ## ResultRecord
//!
//! One immutable record per completed question, a tagged variant per mode
//! (the export row schema differs between the modes). All variants share the
//! common accessor surface {round, question number, category, text,
//! points-by-role} plus per-mode column names and cells so an exporter needs
//! no mode-specific logic.
//!
//! ## Scoreboard
//!
//! Entity-name → points, non-negative and monotonically non-decreasing, with
//! insertion order preserved for stable ranking tie-breaks.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::error::GameError;

/// Per-question result record. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultRecord {
    /// Two-player question.
    TwoPlayer {
        round: u32,
        question_number: u32,
        category: Category,
        text: String,
        responder: String,
        guesser: String,
        responder_points: u8,
        guesser_points: u8,
    },
    /// Three-player question.
    ThreePlayer {
        round: u32,
        question_number: u32,
        category: Category,
        text: String,
        responder: String,
        guesser: String,
        director: String,
        responder_points: u8,
        guesser_points: u8,
        director_points: u8,
    },
    /// Team question. `responder` is the qualified `"{name}_{team}"` key.
    Team {
        round: u32,
        question_number: u32,
        category: Category,
        text: String,
        responder: String,
        guessing_team: String,
        directing_team: String,
        responder_points: u8,
        guesser_points: u8,
        director_points: u8,
    },
}

impl ResultRecord {
    /// Round this question belonged to (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        match self {
            ResultRecord::TwoPlayer { round, .. }
            | ResultRecord::ThreePlayer { round, .. }
            | ResultRecord::Team { round, .. } => *round,
        }
    }

    /// Question number within the session (1-based).
    #[must_use]
    pub fn question_number(&self) -> u32 {
        match self {
            ResultRecord::TwoPlayer {
                question_number, ..
            }
            | ResultRecord::ThreePlayer {
                question_number, ..
            }
            | ResultRecord::Team {
                question_number, ..
            } => *question_number,
        }
    }

    /// Question category.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            ResultRecord::TwoPlayer { category, .. }
            | ResultRecord::ThreePlayer { category, .. }
            | ResultRecord::Team { category, .. } => *category,
        }
    }

    /// Question text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ResultRecord::TwoPlayer { text, .. }
            | ResultRecord::ThreePlayer { text, .. }
            | ResultRecord::Team { text, .. } => text,
        }
    }

    /// Points awarded this question, as (entity name, points) pairs in
    /// responder, guesser, director order.
    #[must_use]
    pub fn points_by_role(&self) -> Vec<(&str, u8)> {
        match self {
            ResultRecord::TwoPlayer {
                responder,
                guesser,
                responder_points,
                guesser_points,
                ..
            } => vec![
                (responder.as_str(), *responder_points),
                (guesser.as_str(), *guesser_points),
            ],
            ResultRecord::ThreePlayer {
                responder,
                guesser,
                director,
                responder_points,
                guesser_points,
                director_points,
                ..
            }
            | ResultRecord::Team {
                responder,
                guessing_team: guesser,
                directing_team: director,
                responder_points,
                guesser_points,
                director_points,
                ..
            } => vec![
                (responder.as_str(), *responder_points),
                (guesser.as_str(), *guesser_points),
                (director.as_str(), *director_points),
            ],
        }
    }

    /// Column names for this record's export row.
    ///
    /// Entity-named point columns follow the fixed descriptive columns, so
    /// the sheet header shows who earned what.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        match self {
            ResultRecord::TwoPlayer {
                responder, guesser, ..
            } => vec![
                "round".into(),
                "question".into(),
                "category".into(),
                "text".into(),
                "responder".into(),
                "guesser".into(),
                responder.clone(),
                guesser.clone(),
            ],
            ResultRecord::ThreePlayer {
                responder,
                guesser,
                director,
                ..
            } => vec![
                "round".into(),
                "question".into(),
                "category".into(),
                "text".into(),
                "responder".into(),
                "guesser".into(),
                "director".into(),
                responder.clone(),
                guesser.clone(),
                director.clone(),
            ],
            ResultRecord::Team {
                guessing_team,
                directing_team,
                ..
            } => vec![
                "round".into(),
                "question".into(),
                "category".into(),
                "text".into(),
                "responder".into(),
                "guessing_team".into(),
                "directing_team".into(),
                "responder_points".into(),
                guessing_team.clone(),
                directing_team.clone(),
            ],
        }
    }

    /// Cell values matching [`column_names`](Self::column_names).
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        match self {
            ResultRecord::TwoPlayer {
                round,
                question_number,
                category,
                text,
                responder,
                guesser,
                responder_points,
                guesser_points,
            } => vec![
                round.to_string(),
                question_number.to_string(),
                category.to_string(),
                text.clone(),
                responder.clone(),
                guesser.clone(),
                responder_points.to_string(),
                guesser_points.to_string(),
            ],
            ResultRecord::ThreePlayer {
                round,
                question_number,
                category,
                text,
                responder,
                guesser,
                director,
                responder_points,
                guesser_points,
                director_points,
            } => vec![
                round.to_string(),
                question_number.to_string(),
                category.to_string(),
                text.clone(),
                responder.clone(),
                guesser.clone(),
                director.clone(),
                responder_points.to_string(),
                guesser_points.to_string(),
                director_points.to_string(),
            ],
            ResultRecord::Team {
                round,
                question_number,
                category,
                text,
                responder,
                guessing_team,
                directing_team,
                responder_points,
                guesser_points,
                director_points,
            } => vec![
                round.to_string(),
                question_number.to_string(),
                category.to_string(),
                text.clone(),
                responder.clone(),
                guessing_team.clone(),
                directing_team.clone(),
                responder_points.to_string(),
                guesser_points.to_string(),
                director_points.to_string(),
            ],
        }
    }
}

/// Ordered, append-only record of completed questions.
///
/// Backed by a persistent vector so `End`-state consumers (export, archive)
/// get O(1) snapshots without cloning every record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsLedger {
    records: Vector<ResultRecord>,
}

impl ResultsLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: ResultRecord) {
        self.records.push_back(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in question order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter()
    }

    /// O(1) snapshot of the full ledger.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Collect the records into a plain vector for export collaborators.
    #[must_use]
    pub fn to_rows(&self) -> Vec<ResultRecord> {
        self.records.iter().cloned().collect()
    }
}

/// Insertion-ordered scoreboard with monotone non-negative totals.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Entity names in registration order.
    order: Vec<String>,
    /// Name → index into `order` / `points`.
    #[serde(skip)]
    index: FxHashMap<String, usize>,
    /// Totals, parallel to `order`.
    points: Vec<u32>,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity at zero points. Idempotent.
    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.index.contains_key(&name) {
            self.index.insert(name.clone(), self.order.len());
            self.order.push(name);
            self.points.push(0);
        }
    }

    /// Award points to a registered entity.
    ///
    /// Totals only ever increase; awarding to an unknown entity is a
    /// configuration error.
    pub fn award(&mut self, name: &str, points: u8) -> Result<(), GameError> {
        match self.index.get(name) {
            Some(&i) => {
                self.points[i] += u32::from(points);
                Ok(())
            }
            None => Err(GameError::configuration(format!(
                "unknown scoring entity: {name}"
            ))),
        }
    }

    /// Current total for an entity, zero if unregistered.
    #[must_use]
    pub fn get(&self, name: &str) -> u32 {
        self.index.get(name).map_or(0, |&i| self.points[i])
    }

    /// Whether an entity is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.order
            .iter()
            .zip(self.points.iter())
            .map(|(n, &p)| (n.as_str(), p))
    }

    /// Descending ranking; ties keep registration order (stable sort).
    #[must_use]
    pub fn ranking(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .entries()
            .map(|(n, p)| (n.to_string(), p))
            .collect();
        ranked.sort_by_key(|(_, p)| std::cmp::Reverse(*p));
        ranked
    }

    /// Rebuild the name index after deserialization.
    ///
    /// The index is skipped by serde; call this on a deserialized value.
    pub fn rebuild_index(&mut self) {
        self.index = self
            .order
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
    }
}

impl PartialEq for Scoreboard {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.points == other.points
    }
}

impl Eq for Scoreboard {}
