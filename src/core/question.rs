//! Question identity and categories.
//!
//! Questions are immutable and owned by the external `QuestionBank`. The
//! engine only ever borrows or clones them; `QuestionId` uniqueness across
//! the whole bank is part of the bank's contract.

use serde::{Deserialize, Serialize};

/// Unique question identifier.
///
/// Unique across the entire question bank, stable for a session's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// The eight question categories.
///
/// A closed set: the bank indexes questions by category and sessions select
/// a subset of these before play begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Funny,
    Worldview,
    Relationship,
    Spicy,
    Casual,
    Past,
    WouldYouRather,
    Dilemmas,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::Funny,
        Category::Worldview,
        Category::Relationship,
        Category::Spicy,
        Category::Casual,
        Category::Past,
        Category::WouldYouRather,
        Category::Dilemmas,
    ];

    /// Human-readable category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Funny => "Funny",
            Category::Worldview => "Worldview",
            Category::Relationship => "Relationship",
            Category::Spicy => "Spicy",
            Category::Casual => "Casual",
            Category::Past => "Past",
            Category::WouldYouRather => "Would You Rather",
            Category::Dilemmas => "Dilemmas",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: QuestionId,

    /// Category this question belongs to.
    pub category: Category,

    /// Question text.
    pub text: String,
}

impl Question {
    /// Create a new question.
    pub fn new(id: QuestionId, category: Category, text: impl Into<String>) -> Self {
        Self {
            id,
            category,
            text: text.into(),
        }
    }
}
