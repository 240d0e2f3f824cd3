// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Trivia API
//!
//! A small trivia-question API: CRUD endpoints over a relational store of
//! questions and categories, with pagination, keyword search, and a quiz
//! picker that never repeats a question within a session.
//!
//! ## Features
//!
//! - **Question CRUD**: Create, list, and delete questions over HTTP
//! - **Pagination**: Fixed-size pages over every listing
//! - **Search**: Case-insensitive substring search on question text
//! - **Quiz Selection**: Filter-then-sample-once draw with a
//!   non-repetition guarantee and a clean exhaustion signal
//! - **Embedded Storage**: Single-file DuckDB database, no external server
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trivia_api::service::TriviaService;
//! use trivia_api::store::{seed_defaults, DuckDbStore};
//!
//! fn main() -> trivia_api::Result<()> {
//!     let store = DuckDbStore::open("trivia.duckdb")?;
//!     seed_defaults(&store)?;
//!
//!     let service = TriviaService::new(store, 10);
//!     let page = service.question_page(service.page(1))?;
//!     println!("{} questions total", page.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        HTTP layer (axum)                        │
//! │   route table → handlers → {success, ...} / {success: false}   │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  │
//! ┌────────────────────────────────┴────────────────────────────────┐
//! │                          TriviaService                          │
//! │   listings · create/delete · search · quiz draw · error fold    │
//! └──────────┬──────────────────────┬──────────────────────┬────────┘
//!            │                      │                      │
//! ┌──────────┴────────┐  ┌──────────┴─────────┐  ┌─────────┴───────┐
//! │     Pagination    │  │    Quiz Selector   │  │ TriviaRepository│
//! │  window + clip    │  │ filter, then one   │  │  (DuckDB store) │
//! │                   │  │  uniform sample    │  │                 │
//! └───────────────────┘  └────────────────────┘  └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the API
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination over ordered collections
pub mod pagination;

/// Quiz question selection
pub mod quiz;

/// Question/category persistence
pub mod store;

/// Boundary service over the repository
pub mod service;

/// Application configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
