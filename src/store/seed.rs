//! Seed data loading
//!
//! Populates a fresh store with the built-in starter set, or with
//! categories and questions from a user-supplied JSON file. Seeding
//! appends; it does not deduplicate.

use crate::error::{Error, Result};
use crate::store::repository::TriviaRepository;
use crate::types::{CategoryId, QuestionDraft};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in category labels, inserted in this order
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Built-in starter questions: (text, answer, 1-based category index, difficulty)
const DEFAULT_QUESTIONS: [(&str, &str, usize, i32); 15] = [
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        "Which Dutch graphic artist-initials M C was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
];

/// Seed file layout: category labels plus question drafts whose
/// `category` field is a 1-based index into the `categories` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    /// Category labels, inserted in order
    #[serde(default)]
    pub categories: Vec<String>,
    /// Questions referencing categories by 1-based index
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// One question entry in a seed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// 1-based index into the seed file's category list
    pub category: usize,
    /// Difficulty score
    pub difficulty: i32,
}

/// Parse a seed file from disk
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<SeedFile> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let seed: SeedFile = serde_json::from_str(&contents)?;
    Ok(seed)
}

/// Insert the built-in starter set; returns `(categories, questions)` inserted
pub fn seed_defaults<R: TriviaRepository>(repo: &R) -> Result<(usize, usize)> {
    let seed = SeedFile {
        categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        questions: DEFAULT_QUESTIONS
            .iter()
            .map(|&(question, answer, category, difficulty)| SeedQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .collect(),
    };
    apply_seed(repo, &seed)
}

/// Insert every category and question of a seed set; returns
/// `(categories, questions)` inserted
pub fn apply_seed<R: TriviaRepository>(repo: &R, seed: &SeedFile) -> Result<(usize, usize)> {
    let mut category_ids: Vec<CategoryId> = Vec::with_capacity(seed.categories.len());
    for kind in &seed.categories {
        category_ids.push(repo.insert_category(kind)?);
    }

    for entry in &seed.questions {
        let category = entry
            .category
            .checked_sub(1)
            .and_then(|index| category_ids.get(index))
            .copied()
            .ok_or_else(|| {
                Error::config(format!(
                    "seed question '{}' references unknown category index {}",
                    entry.question, entry.category
                ))
            })?;

        repo.insert_question(&QuestionDraft {
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            category,
            difficulty: entry.difficulty,
        })?;
    }

    tracing::info!(
        "Seeded {} categories and {} questions",
        seed.categories.len(),
        seed.questions.len()
    );
    Ok((seed.categories.len(), seed.questions.len()))
}
