//! Persistent question/category store backed by DuckDB
//!
//! This module owns the relational schema and every SQL statement in the
//! crate. The rest of the crate depends only on the [`TriviaRepository`]
//! trait, never on the concrete engine.

mod engine;
mod repository;
mod seed;

pub use engine::DuckDbStore;
pub use repository::TriviaRepository;
pub use seed::{apply_seed, load_seed_file, seed_defaults, SeedFile, SeedQuestion};
