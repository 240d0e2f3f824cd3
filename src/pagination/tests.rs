//! Tests for the pagination module

use super::*;
use test_case::test_case;

fn items(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page, 1);
    assert_eq!(request.size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_request_builders() {
    let request = PageRequest::with_page(3);
    assert_eq!(request.page, 3);
    assert_eq!(request.size, DEFAULT_PAGE_SIZE);

    let request = PageRequest::with_page(2).with_size(25);
    assert_eq!(request.page, 2);
    assert_eq!(request.size, 25);
}

#[test]
fn test_window_arithmetic() {
    assert_eq!(PageRequest::new(1, 10).window(), (0, 10));
    assert_eq!(PageRequest::new(3, 10).window(), (20, 30));
    assert_eq!(PageRequest::new(2, 25).window(), (25, 50));
}

#[test]
fn test_window_page_zero_is_page_one() {
    assert_eq!(PageRequest::new(0, 10).window(), (0, 10));
}

// ============================================================================
// paginate Tests
// ============================================================================

#[test]
fn test_paginate_first_page() {
    let all = items(25);
    let page = paginate(&all, PageRequest::new(1, 10));
    assert_eq!(page, &all[0..10]);
}

#[test]
fn test_paginate_last_partial_page() {
    // 25 items at size 10: page 3 holds exactly the final 5
    let all = items(25);
    let page = paginate(&all, PageRequest::new(3, 10));
    assert_eq!(page, &[21, 22, 23, 24, 25]);
}

#[test]
fn test_paginate_past_the_end_is_empty() {
    let all = items(5);
    let page = paginate(&all, PageRequest::new(2, 10));
    assert!(page.is_empty());
}

#[test]
fn test_paginate_empty_collection() {
    let all: Vec<usize> = Vec::new();
    assert!(paginate(&all, PageRequest::new(1, 10)).is_empty());
    assert!(paginate(&all, PageRequest::new(7, 10)).is_empty());
}

#[test]
fn test_paginate_exact_page_boundary() {
    let all = items(20);
    assert_eq!(paginate(&all, PageRequest::new(2, 10)), &all[10..20]);
    assert!(paginate(&all, PageRequest::new(3, 10)).is_empty());
}

#[test]
fn test_paginate_is_idempotent() {
    let all = items(42);
    let request = PageRequest::new(4, 10);
    assert_eq!(paginate(&all, request), paginate(&all, request));
}

// Exact item count: min(size, max(0, len - (page-1)*size))
#[test_case(0, 1, 10, 0)]
#[test_case(25, 1, 10, 10)]
#[test_case(25, 2, 10, 10)]
#[test_case(25, 3, 10, 5)]
#[test_case(25, 4, 10, 0)]
#[test_case(5, 1, 10, 5)]
#[test_case(5, 2, 10, 0)]
#[test_case(100, 10, 10, 10)]
#[test_case(3, 1, 1, 1)]
fn test_paginate_item_count(len: usize, page: usize, size: usize, expected: usize) {
    let all = items(len);
    let got = paginate(&all, PageRequest::new(page, size));
    assert_eq!(got.len(), expected);
    assert!(got.len() <= size);
}
