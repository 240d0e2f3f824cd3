//! CLI module
//!
//! Command-line interface for running the trivia API.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `seed` - Create the schema and load seed data
//! - `check` - Verify the database answers queries

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve, AppState};
