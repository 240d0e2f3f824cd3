//! Tests for the quiz selection module

use super::*;
use crate::types::Question;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn question(id: i64, category: i64) -> Question {
    Question {
        id,
        question: format!("question {id}"),
        answer: format!("answer {id}"),
        category,
        difficulty: 1,
    }
}

fn pool(ids: &[i64]) -> Vec<Question> {
    ids.iter().map(|&id| question(id, 1)).collect()
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selects_from_full_pool() {
    let pool = pool(&[1, 2, 3]);
    let history = HashSet::new();
    let mut rng = StdRng::seed_from_u64(7);

    let picked = next_question(&pool, &history, &mut rng).expect("pool is not empty");
    assert!([1, 2, 3].contains(&picked.id));
}

#[test]
fn test_never_returns_a_question_in_history() {
    let pool = pool(&[1, 2, 3, 4, 5]);
    let history: HashSet<i64> = [2, 4].into_iter().collect();

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let picked = next_question(&pool, &history, &mut rng).expect("three remain");
        assert!(!history.contains(&picked.id));
    }
}

#[test]
fn test_every_remaining_question_is_reachable() {
    let pool = pool(&[1, 2, 3]);
    let history = HashSet::new();

    let mut rng = StdRng::seed_from_u64(42);
    let mut seen: HashSet<i64> = HashSet::new();
    for _ in 0..300 {
        seen.insert(next_question(&pool, &history, &mut rng).unwrap().id);
    }
    assert_eq!(seen, [1, 2, 3].into_iter().collect());
}

#[test]
fn test_single_candidate_is_deterministic() {
    let pool = pool(&[1, 2, 3]);
    let history: HashSet<i64> = [1, 3].into_iter().collect();

    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..20 {
        let picked = next_question(&pool, &history, &mut rng).unwrap();
        assert_eq!(picked.id, 2);
    }
}

// ============================================================================
// Exhaustion Tests
// ============================================================================

#[test]
fn test_exhausted_when_history_covers_pool() {
    let pool = pool(&[1, 2]);
    let history: HashSet<i64> = [1, 2].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(5);

    assert!(next_question(&pool, &history, &mut rng).is_none());
}

#[test]
fn test_exhausted_on_empty_pool() {
    let pool: Vec<Question> = Vec::new();
    let history = HashSet::new();
    let mut rng = StdRng::seed_from_u64(5);

    assert!(next_question(&pool, &history, &mut rng).is_none());
}

#[test]
fn test_not_exhausted_while_any_candidate_remains() {
    let pool = pool(&[1, 2, 3]);
    // History may contain ids outside the pool; only membership matters
    let history: HashSet<i64> = [1, 2, 99].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(9);

    let picked = next_question(&pool, &history, &mut rng);
    assert_eq!(picked.map(|q| q.id), Some(3));
}

#[test]
fn test_play_through_terminates_without_repeats() {
    // Simulate a full quiz session: draw until exhausted, recording history
    let pool = pool(&[1, 2, 3, 4, 5, 6, 7]);
    let mut history = HashSet::new();
    let mut rng = StdRng::seed_from_u64(13);

    let mut draws = 0;
    while let Some(picked) = next_question(&pool, &history, &mut rng) {
        assert!(history.insert(picked.id), "question {} repeated", picked.id);
        draws += 1;
        assert!(draws <= pool.len(), "selector failed to terminate");
    }
    assert_eq!(draws, pool.len());
}
