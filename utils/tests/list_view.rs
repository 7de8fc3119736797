// SPDX-License-Identifier: GPL-3.0-only

//! Drives a store the way a list view does: seed, navigate, re-seed.

use pagina_utils::pagination::{
    ListContext, PaginationAction, PaginationError, PaginationStore,
};
use pretty_assertions::assert_eq;

fn visible(store: &PaginationStore, items: &[u32]) -> Vec<u32> {
    items[store.pagination().item_range()].to_vec()
}

#[test]
fn browsing_a_list_page_by_page() {
    let items: Vec<u32> = (1..=7).collect();
    let mut store = PaginationStore::with_context(ListContext {
        total: items.len(),
        per_page: 3,
        current_page: None,
    })
    .unwrap();

    assert_eq!(visible(&store, &items), vec![1, 2, 3]);
    assert!(store.apply(PaginationAction::Forward));
    assert_eq!(visible(&store, &items), vec![4, 5, 6]);
    assert!(store.apply(PaginationAction::Forward));
    assert_eq!(visible(&store, &items), vec![7]);
    assert!(!store.apply(PaginationAction::Forward));
    assert_eq!(store.pagination().display_page(), 3);

    assert!(store.apply(PaginationAction::Back));
    assert_eq!(visible(&store, &items), vec![4, 5, 6]);
    assert!(store.apply(PaginationAction::First));
    assert!(!store.apply(PaginationAction::Back));
    assert_eq!(visible(&store, &items), vec![1, 2, 3]);
}

#[test]
fn shrinking_the_list_keeps_the_page_in_range() {
    let mut store = PaginationStore::with_context(ListContext {
        total: 100,
        per_page: 10,
        current_page: Some(9),
    })
    .unwrap();
    assert!(store.pagination().is_last_page());

    store
        .reset(ListContext {
            total: 30,
            per_page: 10,
            current_page: Some(9),
        })
        .unwrap();

    let pagination = store.pagination();
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.previous_enabled);
    assert!(!pagination.next_enabled);
}

#[test]
fn seeding_without_a_page_size_fails() {
    let error = PaginationStore::with_context(ListContext {
        total: 10,
        per_page: 0,
        current_page: None,
    })
    .unwrap_err();

    assert_eq!(error, PaginationError::InvalidPageSize { page_size: 0 });
    assert_eq!(
        error.to_string(),
        "invalid page size 0: a page must hold at least one item"
    );
}
