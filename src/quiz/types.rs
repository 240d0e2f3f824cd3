//! Quiz request types

use crate::types::CategoryId;

/// Category scope of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Draw from every known question
    All,
    /// Draw only from questions in one category
    Category(CategoryId),
}

impl QuizScope {
    /// Build a scope from the wire-level category selector.
    ///
    /// Selector `0` means "no category filter".
    pub fn from_selector(id: CategoryId) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}
