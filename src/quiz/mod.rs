//! Quiz selection module
//!
//! Picks one not-yet-served question from a category-scoped pool, or
//! reports that the pool is exhausted.
//!
//! # Overview
//!
//! Selection filters the pool against the history set first, then samples
//! uniformly at random from the remainder exactly once. The filter-then-
//! sample order guarantees termination in O(pool size); there is no
//! retry loop against a shrinking candidate set. An empty remainder is
//! the `Exhausted` terminal state of a quiz, not an error.

mod selector;
mod types;

pub use selector::next_question;
pub use types::QuizScope;

#[cfg(test)]
mod tests;
