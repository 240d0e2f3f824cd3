//! Service view types
//!
//! Read models returned by the service, one per boundary operation.
//! Transport-free: the HTTP layer decides the wire envelope.

use crate::types::{CategoryId, Question, QuestionId};
use std::collections::BTreeMap;

/// All categories as an ordered id → label mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    /// Ordered mapping of category id to display label
    pub categories: BTreeMap<CategoryId, String>,
    /// Total number of categories
    pub total: usize,
}

/// One page of the full question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// Questions on the requested page, ordered by id
    pub questions: Vec<Question>,
    /// Total questions in the store
    pub total: usize,
    /// Ordered mapping of category id to display label
    pub categories: BTreeMap<CategoryId, String>,
}

/// Outcome of a delete, with the refreshed listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionView {
    /// Id of the removed question
    pub deleted: QuestionId,
    /// Questions on the requested page after the delete
    pub questions: Vec<Question>,
    /// Total questions remaining
    pub total: usize,
}

/// Outcome of a create, with the refreshed listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationView {
    /// Id assigned to the new question
    pub created: QuestionId,
    /// First page of the refreshed listing
    pub questions: Vec<Question>,
    /// Total questions after the insert
    pub total: usize,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// Matching questions on the requested page
    pub questions: Vec<Question>,
    /// Total matching questions
    pub total: usize,
}

/// One page of a category's questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestionsView {
    /// Questions on the requested page, ordered by id
    pub questions: Vec<Question>,
    /// Total questions in the category
    pub total: usize,
    /// Display label of the category
    pub current_category: String,
}
