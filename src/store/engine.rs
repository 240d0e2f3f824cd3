//! DuckDB-backed store implementation
//!
//! Owns one embedded DuckDB connection behind a mutex so a single store
//! value can be shared across request handlers.

use crate::error::{Error, Result};
use crate::store::repository::TriviaRepository;
use crate::types::{Category, CategoryId, Question, QuestionDraft, QuestionId};
use duckdb::{params, Connection, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Relational schema, created idempotently at open.
///
/// Ids come from sequences so they stay stable across deletes; the
/// question→category reference is a weak foreign key by design of the
/// data model and is not enforced here.
const SCHEMA_SQL: &str = "
CREATE SEQUENCE IF NOT EXISTS categories_id_seq;
CREATE SEQUENCE IF NOT EXISTS questions_id_seq;
CREATE TABLE IF NOT EXISTS categories (
    id   BIGINT PRIMARY KEY DEFAULT nextval('categories_id_seq'),
    type VARCHAR NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id         BIGINT PRIMARY KEY DEFAULT nextval('questions_id_seq'),
    question   VARCHAR NOT NULL,
    answer     VARCHAR NOT NULL,
    category   BIGINT  NOT NULL,
    difficulty INTEGER NOT NULL
);
";

/// DuckDB-backed question/category store
pub struct DuckDbStore {
    conn: Mutex<Connection>,
}

impl DuckDbStore {
    /// Open (or create) a database file and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| Error::config(format!("Failed to open database: {e}")))?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (used by tests and `check`)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::config(format!("Failed to create DuckDB connection: {e}")))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::config(format!("Failed to create schema: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::other("database connection lock poisoned"))
    }

    /// Verify the store answers queries
    pub fn check_connection(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("SELECT 1", [])
            .map_err(|e| Error::config(format!("Connection check failed: {e}")))?;
        Ok(())
    }

    /// Row counts for `(questions, categories)`, used by the CLI
    pub fn counts(&self) -> Result<(usize, usize)> {
        let conn = self.conn()?;
        let questions: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| {
            row.get(0)
        })?;
        let categories: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| {
            row.get(0)
        })?;
        Ok((questions as usize, categories as usize))
    }

    fn question_from_row(row: &Row<'_>) -> duckdb::Result<Question> {
        Ok(Question {
            id: row.get(0)?,
            question: row.get(1)?,
            answer: row.get(2)?,
            category: row.get(3)?,
            difficulty: row.get(4)?,
        })
    }

    fn query_questions(&self, sql: &str, params: &[&dyn duckdb::ToSql]) -> Result<Vec<Question>> {
        tracing::debug!("Executing query: {}", sql);
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| Self::question_from_row(row))?;
        let mut questions = Vec::new();
        for row in rows {
            questions.push(row?);
        }
        Ok(questions)
    }
}

impl TriviaRepository for DuckDbStore {
    fn list_questions(&self) -> Result<Vec<Question>> {
        self.query_questions(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
            &[],
        )
    }

    fn find_question(&self, id: QuestionId) -> Result<Option<Question>> {
        let mut found = self.query_questions(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
            &[&id],
        )?;
        Ok(found.pop())
    }

    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        self.query_questions(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ? ORDER BY id",
            &[&category],
        )
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.query_questions(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question ILIKE '%' || ? || '%' ORDER BY id",
            &[&term],
        )
    }

    fn insert_question(&self, draft: &QuestionDraft) -> Result<QuestionId> {
        let conn = self.conn()?;
        let id = conn.query_row(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?) RETURNING id",
            params![draft.question, draft.answer, draft.category, draft.difficulty],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    fn delete_question(&self, id: QuestionId) -> Result<bool> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM questions WHERE id = ?", params![id])?;
        Ok(removed > 0)
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                kind: row.get(1)?,
            })
        })?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    fn find_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories WHERE id = ?")?;
        let rows = stmt.query_map(params![id], |row| {
            Ok(Category {
                id: row.get(0)?,
                kind: row.get(1)?,
            })
        })?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories.pop())
    }

    fn insert_category(&self, kind: &str) -> Result<CategoryId> {
        let conn = self.conn()?;
        let id = conn.query_row(
            "INSERT INTO categories (type) VALUES (?) RETURNING id",
            params![kind],
            |row| row.get(0),
        )?;
        Ok(id)
    }
}
