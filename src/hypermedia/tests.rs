//! Tests for hypermedia module

use super::*;
use crate::pagination::{IndexRequest, PageRequest};
use crate::types::Record;
use pretty_assertions::assert_eq;
use serde_json::json;

fn records(n: usize) -> Vec<Record> {
    (0..n).map(|i| Record::from(vec![i.to_string()])).collect()
}

// ============================================================================
// HyperPage Tests
// ============================================================================

#[test]
fn test_hyper_page_first_page() {
    let request = PageRequest::new(1, 10).unwrap();
    let page = HyperPage::build(&request, records(10), 25);

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.prev_page, None);
    assert!(page.has_next());
    assert!(!page.has_prev());
}

#[test]
fn test_hyper_page_last_page_reports_actual_size() {
    let request = PageRequest::new(3, 10).unwrap();
    let page = HyperPage::build(&request, records(5), 25);

    assert_eq!(page.page_size, 5);
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, Some(2));
}

#[test]
fn test_hyper_page_past_the_end_echoes_page() {
    let request = PageRequest::new(100, 10).unwrap();
    let page = HyperPage::build(&request, Vec::new(), 25);

    assert_eq!(page.page, 100);
    assert_eq!(page.page_size, 0);
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, Some(99));
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_hyper_page_empty_dataset() {
    let request = PageRequest::new(1, 10).unwrap();
    let page = HyperPage::build(&request, Vec::new(), 0);

    assert_eq!(page.total_pages, 0);
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, None);
}

#[test]
fn test_hyper_page_serializes_nulls() {
    let request = PageRequest::new(1, 2).unwrap();
    let page = HyperPage::build(&request, records(2), 2);

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "page_size": 2,
            "page": 1,
            "data": [["0"], ["1"]],
            "next_page": null,
            "prev_page": null,
            "total_pages": 1
        })
    );
}

// ============================================================================
// HyperIndexPage Tests
// ============================================================================

#[test]
fn test_hyper_index_page_defaults_index() {
    let request = IndexRequest::new(None, 10).unwrap();
    let page = HyperIndexPage::build(&request, records(10));

    assert_eq!(page.index, 0);
    assert_eq!(page.next_index, 10);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.placeholder_count(), 0);
}

#[test]
fn test_hyper_index_page_keeps_requested_size() {
    let request = IndexRequest::new(Some(15), 10).unwrap();
    let mut data = records(5);
    data.extend(std::iter::repeat_with(Record::placeholder).take(5));
    let page = HyperIndexPage::build(&request, data);

    assert_eq!(page.index, 15);
    assert_eq!(page.next_index, 25);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.placeholder_count(), 5);
}

#[test]
fn test_hyper_index_page_serializes_placeholders_as_empty_arrays() {
    let request = IndexRequest::new(Some(3), 2).unwrap();
    let page = HyperIndexPage::build(
        &request,
        vec![Record::from(vec!["a"]), Record::placeholder()],
    );

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "index": 3,
            "next_index": 5,
            "page_size": 2,
            "data": [["a"], []]
        })
    );
}
