//! External collaborator boundaries: question bank, tabular export, and
//! remote archive.
//!
//! Rendering, spreadsheet serialization, and network transport are owned by
//! the collaborators behind these traits; the engine only defines the
//! contracts and the archive filename sequencing.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Category, Question, QuestionId};
use crate::error::GameError;
use crate::session::ResultRecord;

/// Source of questions, indexed by category.
///
/// Contract: `id` is unique across the entire bank and the bank's contents
/// are stable for a session's lifetime.
pub trait QuestionBank {
    /// All questions in the given category.
    fn questions_by_category(&self, category: Category) -> &[Question];
}

/// In-memory question bank.
///
/// ## Example
///
/// ```
/// use spectrum_engine::core::{Category, Question, QuestionId};
/// use spectrum_engine::export::{InMemoryQuestionBank, QuestionBank};
///
/// let mut bank = InMemoryQuestionBank::new();
/// bank.add(Question::new(QuestionId::new(1), Category::Funny, "Ever laughed at a funeral?"));
///
/// assert_eq!(bank.questions_by_category(Category::Funny).len(), 1);
/// assert_eq!(bank.questions_by_category(Category::Spicy).len(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryQuestionBank {
    by_category: FxHashMap<Category, Vec<Question>>,
    ids: FxHashSet<QuestionId>,
}

impl InMemoryQuestionBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question.
    ///
    /// Panics if a question with the same ID already exists; global ID
    /// uniqueness is part of the bank contract.
    pub fn add(&mut self, question: Question) {
        if !self.ids.insert(question.id) {
            panic!("question with ID {:?} already in bank", question.id);
        }
        self.by_category
            .entry(question.category)
            .or_default()
            .push(question);
    }

    /// Total number of questions across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl QuestionBank for InMemoryQuestionBank {
    fn questions_by_category(&self, category: Category) -> &[Question] {
        self.by_category
            .get(&category)
            .map_or(&[], |v| v.as_slice())
    }
}

impl FromIterator<Question> for InMemoryQuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut bank = Self::new();
        for q in iter {
            bank.add(q);
        }
        bank
    }
}

/// Serializes the ordered results into one tabular sheet, one row per
/// question. The row schema varies per mode; records expose their own
/// column names and cells.
pub trait ResultsExport {
    /// Serialize the records to a byte blob (e.g. an XLSX workbook).
    fn export(&mut self, records: &[ResultRecord]) -> Result<Vec<u8>, GameError>;
}

/// Optional remote storage for finished-game exports.
pub trait RemoteArchive {
    /// Names of entries already archived for the given date.
    fn existing_names(&self, date: NaiveDate) -> Result<Vec<String>, GameError>;

    /// Store a blob under the given filename.
    fn upload(&mut self, filename: &str, bytes: &[u8]) -> Result<(), GameError>;
}

/// Archive filename for a date: `{ISO-date}_gra{3-digit}.xlsx`.
///
/// The sequence is the smallest unused 3-digit number for that date among
/// the existing entries, so gaps are filled before the count grows.
#[must_use]
pub fn archive_filename(date: NaiveDate, existing: &[String]) -> String {
    let existing: FxHashSet<&str> = existing.iter().map(String::as_str).collect();
    let name = |n: u32| format!("{}_gra{n:03}.xlsx", date.format("%Y-%m-%d"));
    let seq = (1..=999u32)
        .find(|&n| !existing.contains(name(n).as_str()))
        .unwrap_or(999);
    name(seq)
}
