//! Quiz question selection

use crate::types::{Question, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Select one not-yet-served question from the pool.
///
/// Computes the set difference `pool \ history` and samples uniformly at
/// random from the remainder exactly once. Returns `None` when every
/// question in the pool (including an empty pool) is already in the
/// history — the quiz is exhausted.
pub fn next_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    history: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question> {
    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|question| !history.contains(&question.id))
        .collect();

    remaining.choose(rng).copied()
}
