//! Tests for the trivia service

use super::*;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::store::{seed_defaults, DuckDbStore};
use pretty_assertions::assert_eq;

fn service() -> TriviaService<DuckDbStore> {
    let store = DuckDbStore::open_in_memory().unwrap();
    seed_defaults(&store).unwrap();
    TriviaService::new(store, DEFAULT_PAGE_SIZE)
}

fn empty_service() -> TriviaService<DuckDbStore> {
    let store = DuckDbStore::open_in_memory().unwrap();
    TriviaService::new(store, DEFAULT_PAGE_SIZE)
}

fn draft(question: &str, answer: &str, category: i64, difficulty: i32) -> QuestionDraft {
    QuestionDraft {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

// ============================================================================
// Category Listing Tests
// ============================================================================

#[test]
fn test_list_categories_ordered_mapping() {
    let service = service();
    let listing = service.list_categories().unwrap();

    assert_eq!(listing.total, 6);
    let labels: Vec<&str> = listing.categories.values().map(String::as_str).collect();
    assert_eq!(
        labels,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
}

#[test]
fn test_category_detail() {
    let service = service();
    let first = *service.list_categories().unwrap().categories.keys().next().unwrap();

    let category = service.category_detail(first).unwrap();
    assert_eq!(category.kind, "Science");

    let err = service.category_detail(999).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Question Page Tests
// ============================================================================

#[test]
fn test_question_page_has_total_and_categories() {
    let service = service();
    let view = service.question_page(service.page(1)).unwrap();

    assert_eq!(view.questions.len(), DEFAULT_PAGE_SIZE);
    assert_eq!(view.total, 15);
    assert_eq!(view.categories.len(), 6);
}

#[test]
fn test_question_page_last_page_is_partial() {
    let service = service();
    let view = service.question_page(service.page(2)).unwrap();
    assert_eq!(view.questions.len(), 5);
}

#[test]
fn test_question_page_past_the_end_is_not_found() {
    let service = service();
    let err = service.question_page(service.page(3)).unwrap_err();
    assert_eq!(err.status_code(), 404);

    // An empty store has no page 1 either
    let err = empty_service().question_page(PageRequest::first()).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Create / Delete Tests
// ============================================================================

#[test]
fn test_create_question_returns_id_and_refreshed_listing() {
    let service = service();
    let category = *service.list_categories().unwrap().categories.keys().next().unwrap();

    let view = service
        .create_question(draft("Who wrote the Principia?", "Isaac Newton", category, 3))
        .unwrap();

    assert_eq!(view.total, 16);
    assert_eq!(view.questions.len(), DEFAULT_PAGE_SIZE);
    let created = service.repository().find_question(view.created).unwrap().unwrap();
    assert_eq!(created.answer, "Isaac Newton");
}

#[test]
fn test_create_question_presence_checks() {
    let service = service();

    let err = service.create_question(draft("", "answer", 1, 1)).unwrap_err();
    assert_eq!(err.status_code(), 422);

    let err = service.create_question(draft("question?", "  ", 1, 1)).unwrap_err();
    assert_eq!(err.status_code(), 422);
}

#[test]
fn test_delete_question() {
    let service = service();
    let id = service.question_page(service.page(1)).unwrap().questions[0].id;

    let view = service.delete_question(id, service.page(1)).unwrap();
    assert_eq!(view.deleted, id);
    assert_eq!(view.total, 14);
    assert!(view.questions.iter().all(|q| q.id != id));
}

#[test]
fn test_delete_missing_question_is_not_found() {
    let service = service();
    let err = service.delete_question(999, service.page(1)).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_matches_mixed_case_substring() {
    let service = service();
    // Seeded text contains "Taj Mahal"; the term is lowercased
    let view = service.search_questions("taj", service.page(1)).unwrap();

    assert_eq!(view.total, 1);
    assert!(view.questions[0].question.contains("Taj Mahal"));
}

#[test]
fn test_search_no_match_is_not_found() {
    let service = service();
    let err = service.search_questions("zzzz", service.page(1)).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_search_page_past_matches_is_valid_and_empty() {
    let service = service();
    let view = service.search_questions("the", service.page(50)).unwrap();
    assert!(view.questions.is_empty());
    assert!(view.total >= 1);
}

// ============================================================================
// Category-Scoped Listing Tests
// ============================================================================

#[test]
fn test_questions_in_category() {
    let service = service();
    let listing = service.list_categories().unwrap();
    let science = *listing
        .categories
        .iter()
        .find(|(_, label)| label.as_str() == "Science")
        .unwrap()
        .0;

    let view = service.questions_in_category(science, service.page(1)).unwrap();
    assert_eq!(view.current_category, "Science");
    assert_eq!(view.total, 3);
    assert!(view.questions.iter().all(|q| q.category == science));
}

#[test]
fn test_questions_in_unknown_category_is_not_found() {
    let service = service();
    let err = service.questions_in_category(999, service.page(1)).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_empty_category_is_valid() {
    let service = service();
    let empty = service.repository().insert_category("Mythology").unwrap();

    let view = service.questions_in_category(empty, service.page(1)).unwrap();
    assert_eq!(view.current_category, "Mythology");
    assert_eq!(view.total, 0);
    assert!(view.questions.is_empty());
}

// ============================================================================
// Quiz Tests
// ============================================================================

#[test]
fn test_quiz_scoped_to_category_never_repeats() {
    let service = service();
    let listing = service.list_categories().unwrap();
    let art = *listing
        .categories
        .iter()
        .find(|(_, label)| label.as_str() == "Art")
        .unwrap()
        .0;

    let mut history = std::collections::HashSet::new();
    let mut served = 0;
    while let Some(question) = service
        .next_quiz_question(QuizScope::Category(art), &history)
        .unwrap()
    {
        assert_eq!(question.category, art);
        assert!(history.insert(question.id));
        served += 1;
        assert!(served <= 3, "art has exactly three seeded questions");
    }
    assert_eq!(served, 3);
}

#[test]
fn test_quiz_all_scope_exhausts_whole_store() {
    let service = service();
    let mut history = std::collections::HashSet::new();

    while let Some(question) = service.next_quiz_question(QuizScope::All, &history).unwrap() {
        assert!(history.insert(question.id));
    }
    assert_eq!(history.len(), 15);
}

#[test]
fn test_quiz_unknown_category_is_exhausted_not_error() {
    let service = service();
    let history = std::collections::HashSet::new();

    let outcome = service
        .next_quiz_question(QuizScope::Category(999), &history)
        .unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_quiz_empty_store_is_exhausted() {
    let service = empty_service();
    let history = std::collections::HashSet::new();

    let outcome = service.next_quiz_question(QuizScope::All, &history).unwrap();
    assert!(outcome.is_none());
}
