//! Pagination module
//!
//! Slices an ordered collection into fixed-size pages given a 1-based
//! page number.
//!
//! # Overview
//!
//! The pagination component is a pure function over in-memory collections:
//! it computes a window from the page request and clips it to the
//! available length. Requesting a page past the end is not an error —
//! the result is simply empty, and the caller decides whether that
//! constitutes a not-found condition.

mod types;

pub use types::{paginate, PageRequest, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
