//! Error types for the trivia API
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the trivia API
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Boundary Errors (mapped to HTTP statuses)
    // ============================================================================
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unprocessable resource: {message}")]
    Unprocessable { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a not-found error for a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an unprocessable error
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Fold an infrastructure fault raised while assembling a read into the
    /// boundary taxonomy. Already-classified errors pass through unchanged.
    pub fn into_read_fault(self) -> Self {
        match self {
            e @ (Self::NotFound { .. } | Self::BadRequest { .. } | Self::Unprocessable { .. }) => e,
            other => Self::BadRequest {
                message: format!("failed to assemble listing: {other}"),
            },
        }
    }

    /// Fold an infrastructure fault raised during a write into the boundary
    /// taxonomy. Already-classified errors pass through unchanged.
    pub fn into_write_fault(self) -> Self {
        match self {
            e @ (Self::NotFound { .. } | Self::BadRequest { .. } | Self::Unprocessable { .. }) => e,
            other => Self::Unprocessable {
                message: format!("write could not be completed: {other}"),
            },
        }
    }

    /// HTTP status code this error maps to at the transport boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::BadRequest { .. } => 400,
            Self::Unprocessable { .. } => 422,
            _ => 500,
        }
    }
}

/// Result type alias for the trivia API
pub type Result<T> = std::result::Result<T, Error>;
