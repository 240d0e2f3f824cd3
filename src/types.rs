//! Common types used throughout the trivia API
//!
//! This module contains the domain entities and the type aliases
//! shared across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Stable identifier of a question, assigned by the store at insert
pub type QuestionId = i64;

/// Stable identifier of a category, assigned by the store at insert
pub type CategoryId = i64;

// ============================================================================
// Question
// ============================================================================

/// A trivia question as fetched from the store.
///
/// Immutable once fetched. Serializes to the flat field map the API
/// returns for a formatted question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable question id
    pub id: QuestionId,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Category id this question belongs to (weak reference)
    pub category: CategoryId,
    /// Difficulty score
    pub difficulty: i32,
}

/// Input for creating a question. Presence-checked at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Category id the question belongs to
    pub category: CategoryId,
    /// Difficulty score
    pub difficulty: i32,
}

// ============================================================================
// Category
// ============================================================================

/// A question category.
///
/// The display label is stored in the `type` column and keeps that name
/// on the wire; `kind` avoids the Rust keyword in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category id
    pub id: CategoryId,
    /// Display label (e.g. "Science")
    #[serde(rename = "type")]
    pub kind: String,
}
