//! Repository contract for questions and categories

use crate::error::Result;
use crate::types::{Category, CategoryId, Question, QuestionDraft, QuestionId};

/// Storage interface the service depends on.
///
/// All question listings are ordered by id. Reads return already-
/// materialized collections; no method holds state between calls.
pub trait TriviaRepository {
    /// All questions, ordered by id
    fn list_questions(&self) -> Result<Vec<Question>>;

    /// One question by id, if present
    fn find_question(&self, id: QuestionId) -> Result<Option<Question>>;

    /// All questions in one category, ordered by id
    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>>;

    /// Questions whose text contains the term as a case-insensitive
    /// substring, ordered by id
    fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Insert a question and return its assigned id
    fn insert_question(&self, draft: &QuestionDraft) -> Result<QuestionId>;

    /// Delete a question by id; returns whether a row was removed
    fn delete_question(&self, id: QuestionId) -> Result<bool>;

    /// All categories, ordered by id
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// One category by id, if present
    fn find_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// Insert a category and return its assigned id
    fn insert_category(&self, kind: &str) -> Result<CategoryId>;
}
