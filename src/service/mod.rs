//! Trivia service module
//!
//! The boundary between transport and storage.
//!
//! # Overview
//!
//! `TriviaService` holds the repository and implements every API
//! operation: category/question listings, create/delete, search, and
//! quiz selection. It owns the error-taxonomy mapping — storage faults
//! on the read path fold into `BadRequest`, faults on the write path
//! into `Unprocessable` — so callers only ever see classified errors.
//! Quiz exhaustion is the `None` arm of selection, never an error.

mod types;

pub use types::{
    CategoryListing, CategoryQuestionsView, CreationView, DeletionView, QuestionPage, SearchView,
};

use crate::error::{Error, Result};
use crate::pagination::{paginate, PageRequest};
use crate::quiz::{next_question, QuizScope};
use crate::store::TriviaRepository;
use crate::types::{Category, CategoryId, Question, QuestionDraft, QuestionId};
use std::collections::{BTreeMap, HashSet};

/// Service object implementing the API boundary over a repository
pub struct TriviaService<R> {
    repo: R,
    page_size: usize,
}

impl<R: TriviaRepository> TriviaService<R> {
    /// Create a service over a repository with the given page size
    pub fn new(repo: R, page_size: usize) -> Self {
        Self { repo, page_size }
    }

    /// Page request for a 1-based page number at the configured size
    pub fn page(&self, page: usize) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn category_map(&self) -> Result<BTreeMap<CategoryId, String>> {
        let categories = self.repo.list_categories().map_err(Error::into_read_fault)?;
        Ok(categories
            .into_iter()
            .map(|category| (category.id, category.kind))
            .collect())
    }

    /// All categories as an ordered id → label mapping, with total count
    pub fn list_categories(&self) -> Result<CategoryListing> {
        let categories = self.category_map()?;
        let total = categories.len();
        Ok(CategoryListing { categories, total })
    }

    /// One category by id; not-found when absent
    pub fn category_detail(&self, id: CategoryId) -> Result<Category> {
        self.repo
            .find_category(id)
            .map_err(Error::into_read_fault)?
            .ok_or_else(|| Error::not_found(format!("category {id}")))
    }

    /// One page of all questions, with total count and the category map.
    ///
    /// An empty page is a not-found condition at this boundary; the
    /// pagination component itself treats it as valid output.
    pub fn question_page(&self, page: PageRequest) -> Result<QuestionPage> {
        let all = self.repo.list_questions().map_err(Error::into_read_fault)?;
        let current = paginate(&all, page);
        if current.is_empty() {
            return Err(Error::not_found(format!("question page {}", page.page)));
        }

        Ok(QuestionPage {
            questions: current.to_vec(),
            total: all.len(),
            categories: self.category_map()?,
        })
    }

    /// Delete one question and return the refreshed listing page
    pub fn delete_question(&self, id: QuestionId, page: PageRequest) -> Result<DeletionView> {
        let removed = self.repo.delete_question(id).map_err(Error::into_write_fault)?;
        if !removed {
            return Err(Error::not_found(format!("question {id}")));
        }

        let all = self.repo.list_questions().map_err(Error::into_read_fault)?;
        Ok(DeletionView {
            deleted: id,
            questions: paginate(&all, page).to_vec(),
            total: all.len(),
        })
    }

    /// Create one question and return its id plus the refreshed first page
    pub fn create_question(&self, draft: QuestionDraft) -> Result<CreationView> {
        if draft.question.trim().is_empty() {
            return Err(Error::unprocessable("question text is required"));
        }
        if draft.answer.trim().is_empty() {
            return Err(Error::unprocessable("answer text is required"));
        }

        let created = self
            .repo
            .insert_question(&draft)
            .map_err(Error::into_write_fault)?;

        let all = self.repo.list_questions().map_err(Error::into_read_fault)?;
        Ok(CreationView {
            created,
            questions: paginate(&all, self.page(1)).to_vec(),
            total: all.len(),
        })
    }

    /// Questions whose text contains the term, paginated.
    ///
    /// Zero total matches is a not-found condition; a page past the end
    /// of a non-empty match set is a valid empty page.
    pub fn search_questions(&self, term: &str, page: PageRequest) -> Result<SearchView> {
        let matches = self
            .repo
            .search_questions(term)
            .map_err(Error::into_read_fault)?;
        if matches.is_empty() {
            return Err(Error::not_found(format!("questions matching '{term}'")));
        }

        Ok(SearchView {
            questions: paginate(&matches, page).to_vec(),
            total: matches.len(),
        })
    }

    /// One page of a category's questions; not-found when the category
    /// itself does not exist (an empty question list is valid)
    pub fn questions_in_category(
        &self,
        id: CategoryId,
        page: PageRequest,
    ) -> Result<CategoryQuestionsView> {
        let category = self.category_detail(id)?;
        let scoped = self
            .repo
            .questions_in_category(id)
            .map_err(Error::into_read_fault)?;

        Ok(CategoryQuestionsView {
            questions: paginate(&scoped, page).to_vec(),
            total: scoped.len(),
            current_category: category.kind,
        })
    }

    /// Draw one unseen quiz question from the scoped pool.
    ///
    /// `None` means the quiz is complete: every scoped question is in the
    /// history, the category has no questions, or the category is
    /// unknown. All of those are normal terminal states.
    pub fn next_quiz_question(
        &self,
        scope: QuizScope,
        history: &HashSet<QuestionId>,
    ) -> Result<Option<Question>> {
        let pool = match scope {
            QuizScope::All => self.repo.list_questions(),
            QuizScope::Category(id) => self.repo.questions_in_category(id),
        }
        .map_err(Error::into_read_fault)?;

        let mut rng = rand::thread_rng();
        Ok(next_question(&pool, history, &mut rng).cloned())
    }
}

#[cfg(test)]
mod tests;
