//
//  floe-cli
//  api/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Auto-Paginating Result Sequence
//!
//! This module provides [`PagedList`], the lazy iterator that sits underneath
//! every list-style operation in the SDK. Floe list endpoints paginate with
//! `offset` (zero-based item count) and `max` (page size) query parameters and
//! report a `totalSize` alongside each page; `PagedList` turns that protocol
//! into a plain Rust iterator that fetches pages on demand.
//!
//! ## Overview
//!
//! A resource accessor builds a page-fetch closure — capturing the resolved
//! workspace scope and endpoint path — and hands it to `PagedList`. Iterating
//! the list pulls items out of an internal buffer, fetching the next page only
//! when the buffer runs dry. Nothing is fetched until the first item (or the
//! total size) is asked for.
//!
//! ## Guarantees
//!
//! - Items are yielded in exact server order, within and across pages.
//! - Each page is fetched exactly once; an exhausted list never fetches again.
//! - An empty page marks the list exhausted regardless of what `totalSize`
//!   claims, so a server miscounting items can never cause an infinite fetch
//!   loop.
//! - A short page (fewer items than requested) advances the cursor by the
//!   number of items actually returned, so no items are skipped.
//!
//! # Example
//!
//! ```rust
//! use floe_cli::api::{Page, PagedList};
//!
//! let data: Vec<i64> = (1..=7).collect();
//! let mut list = PagedList::new(
//!     Box::new(move |offset, max| {
//!         let end = (offset as usize + max as usize).min(data.len());
//!         Ok(Page { items: data[offset as usize..end].to_vec(), total: data.len() as u64 })
//!     }),
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(list.total_size().unwrap(), 7);
//! let items: Result<Vec<i64>, _> = list.collect();
//! assert_eq!(items.unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// One page of results as returned by a page-fetch closure.
///
/// # Fields
///
/// * `items` - The items of this page, in server order
/// * `total` - The total item count reported by the server at fetch time
///
/// The total may legitimately differ between pages when the backing
/// collection changes on the server; [`PagedList`] always trusts the most
/// recently observed value.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items of this page, in server order.
    pub items: Vec<T>,
    /// Total item count reported alongside this page.
    pub total: u64,
}

impl<T: DeserializeOwned> Page<T> {
    /// Builds a page from a raw response body.
    ///
    /// Extracts the endpoint family's list field (for example `"pipelines"`
    /// or `"workflows"`) and the `totalSize` field. Endpoints that do not
    /// paginate server-side omit `totalSize`; the length of the returned
    /// list is used as the total in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when an item cannot be
    /// deserialized into `T`.
    pub fn from_body(body: &Value, list_field: &str) -> Result<Self, ApiError> {
        let raw = body
            .get(list_field)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let items = raw
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    ApiError::InvalidRequest(format!("malformed '{list_field}' entry: {e}"))
                })
            })
            .collect::<Result<Vec<T>, ApiError>>()?;

        let total = body
            .get("totalSize")
            .and_then(Value::as_u64)
            .unwrap_or(items.len() as u64);

        Ok(Self { items, total })
    }
}

/// Page-fetch capability: given `(offset, max)` return one page of results.
pub type PageFetch<'a, T> = Box<dyn FnMut(u64, u32) -> Result<Page<T>, ApiError> + 'a>;

/// A lazy, auto-paginating sequence of entities.
///
/// `PagedList` owns its page-fetch closure exclusively and fetches successive
/// pages on demand as the consumer iterates. It is single-pass: items are
/// yielded once and a fresh `list(...)` call on the owning accessor is needed
/// to start over. Dropping the list mid-iteration simply abandons it; no
/// further requests are made.
///
/// The sequence is not thread-safe; the design assumes at most one active
/// iterator per instance, driven from one thread.
///
/// # Type Parameters
///
/// * `T` - The entity type produced by the page-fetch closure
pub struct PagedList<'a, T> {
    fetch: PageFetch<'a, T>,
    page_size: u32,
    /// Fetched-but-not-yet-yielded items, in server order.
    buffer: VecDeque<T>,
    /// Number of items requested from the server so far.
    offset: u64,
    /// Most recently observed total, `None` until the first fetch.
    total: Option<u64>,
    exhausted: bool,
}

impl<T> std::fmt::Debug for PagedList<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedList")
            .field("page_size", &self.page_size)
            .field("offset", &self.offset)
            .field("total", &self.total)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<'a, T> PagedList<'a, T> {
    /// Creates an empty sequence that will fetch its first page on demand.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when `page_size` is zero — a
    /// zero page size would never advance the cursor and must be rejected
    /// up front rather than loop forever.
    pub fn new(fetch: PageFetch<'a, T>, page_size: u32) -> Result<Self, ApiError> {
        if page_size == 0 {
            return Err(ApiError::InvalidRequest(
                "page size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            fetch,
            page_size,
            buffer: VecDeque::new(),
            offset: 0,
            total: None,
            exhausted: false,
        })
    }

    /// Creates a sequence pre-seeded with an already-fetched first page.
    ///
    /// Used when the caller already holds page one from a prior request (for
    /// example a `list` immediately following an `add`), avoiding a redundant
    /// fetch of the same page.
    ///
    /// # Parameters
    ///
    /// * `fetch` - Closure for fetching the pages after the first
    /// * `page_size` - Page size for subsequent fetches
    /// * `first_page` - Items of the already-obtained first page
    /// * `total` - The total reported alongside that first page
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when `page_size` is zero.
    pub fn seeded(
        fetch: PageFetch<'a, T>,
        page_size: u32,
        first_page: Vec<T>,
        total: u64,
    ) -> Result<Self, ApiError> {
        let mut list = Self::new(fetch, page_size)?;
        list.offset = first_page.len() as u64;
        list.exhausted = first_page.is_empty() || list.offset >= total;
        list.buffer = first_page.into();
        list.total = Some(total);
        Ok(list)
    }

    /// Returns the total number of items, fetching the first page if the
    /// total has not been observed yet.
    ///
    /// At most one fetch is ever triggered by this method; the items obtained
    /// as a side effect are buffered and later yielded by iteration, never
    /// re-fetched. Calling it again — before or after iterating — performs no
    /// additional requests.
    pub fn total_size(&mut self) -> Result<u64, ApiError> {
        if self.total.is_none() {
            self.fetch_page()?;
        }
        // fetch_page always records the observed total
        Ok(self.total.unwrap_or(0))
    }

    /// Fetches the next page and appends it to the buffer.
    ///
    /// An empty page marks the sequence exhausted no matter what the server's
    /// total claims; otherwise the cursor advances by the number of items
    /// actually returned, which is how a short final page is detected.
    fn fetch_page(&mut self) -> Result<(), ApiError> {
        let page = (self.fetch)(self.offset, self.page_size)?;
        self.total = Some(page.total);

        if page.items.is_empty() {
            self.exhausted = true;
            return Ok(());
        }

        self.offset += page.items.len() as u64;
        self.buffer.extend(page.items);
        if self.offset >= page.total {
            self.exhausted = true;
        }
        Ok(())
    }
}

impl<'a, T> Iterator for PagedList<'a, T> {
    type Item = Result<T, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() {
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.fetch_page() {
                // A failed fetch ends the sequence; the caller sees the error
                self.exhausted = true;
                return Some(Err(e));
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Page-fetch over an in-memory collection of `1..=n`, counting calls.
    fn counted_fetch(n: u64, calls: Rc<Cell<u32>>) -> PageFetch<'static, u64> {
        Box::new(move |offset, max| {
            calls.set(calls.get() + 1);
            let end = (offset + u64::from(max)).min(n);
            Ok(Page {
                items: (offset + 1..=end).collect(),
                total: n,
            })
        })
    }

    fn collect_all(list: PagedList<'_, u64>) -> Vec<u64> {
        list.map(|item| item.unwrap()).collect()
    }

    #[test]
    fn test_yields_all_items_in_order() {
        // Completeness across page sizes: 1, a divisor of N, larger than N
        for page_size in [1u32, 5, 100] {
            let calls = Rc::new(Cell::new(0));
            let list = PagedList::new(counted_fetch(25, calls.clone()), page_size).unwrap();
            let items = collect_all(list);
            assert_eq!(items, (1..=25).collect::<Vec<u64>>(), "page_size {page_size}");
        }
    }

    #[test]
    fn test_fetch_count_is_exact() {
        // ceil(N / page_size) calls, no over-fetch past the last page
        for (n, page_size, expected) in [(25u64, 5u32, 5u32), (25, 10, 3), (25, 100, 1), (1, 1, 1)] {
            let calls = Rc::new(Cell::new(0));
            let list = PagedList::new(counted_fetch(n, calls.clone()), page_size).unwrap();
            collect_all(list);
            assert_eq!(calls.get(), expected, "n={n} page_size={page_size}");
        }
    }

    #[test]
    fn test_empty_collection_fetches_once() {
        let calls = Rc::new(Cell::new(0));
        let mut list = PagedList::new(counted_fetch(0, calls.clone()), 50).unwrap();
        assert!(list.next().is_none());
        assert!(list.next().is_none());
        assert_eq!(calls.get(), 1);
        assert_eq!(list.total_size().unwrap(), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_short_page_before_total_is_reached() {
        // Server claims 10 items but hands out pages of at most 3
        let calls = Rc::new(Cell::new(0));
        let calls2 = calls.clone();
        let fetch: PageFetch<'static, u64> = Box::new(move |offset, _max| {
            calls2.set(calls2.get() + 1);
            let end = (offset + 3).min(10);
            Ok(Page {
                items: (offset + 1..=end).collect(),
                total: 10,
            })
        });
        let list = PagedList::new(fetch, 50).unwrap();
        let items = collect_all(list);
        assert_eq!(items, (1..=10).collect::<Vec<u64>>());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_empty_page_stops_despite_inflated_total() {
        // A server miscounting must not cause an infinite fetch loop
        let calls = Rc::new(Cell::new(0));
        let calls2 = calls.clone();
        let fetch: PageFetch<'static, u64> = Box::new(move |offset, max| {
            calls2.set(calls2.get() + 1);
            let end = (offset + u64::from(max)).min(4);
            Ok(Page {
                items: (offset + 1..=end).collect(),
                total: 1000,
            })
        });
        let list = PagedList::new(fetch, 2).unwrap();
        let items = collect_all(list);
        assert_eq!(items, vec![1, 2, 3, 4]);
        // Two full pages, then one empty page that marks exhaustion
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_total_size_fetches_at_most_once() {
        let calls = Rc::new(Cell::new(0));
        let mut list = PagedList::new(counted_fetch(8, calls.clone()), 3).unwrap();
        assert_eq!(list.total_size().unwrap(), 8);
        assert_eq!(list.total_size().unwrap(), 8);
        assert_eq!(calls.get(), 1);

        // The page fetched for the total is buffered, not fetched again
        let items = collect_all(list);
        assert_eq!(items, (1..=8).collect::<Vec<u64>>());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_total_size_after_iteration_is_free() {
        let calls = Rc::new(Cell::new(0));
        let mut list = PagedList::new(counted_fetch(4, calls.clone()), 10).unwrap();
        assert_eq!(list.next().unwrap().unwrap(), 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(list.total_size().unwrap(), 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_two_page_scenario() {
        // (0,50) -> items 1..=50 of 75; (50,50) -> items 51..=75
        let calls = Rc::new(Cell::new(0));
        let list = PagedList::new(counted_fetch(75, calls.clone()), 50).unwrap();
        let items = collect_all(list);
        assert_eq!(items.len(), 75);
        assert_eq!(items.first(), Some(&1));
        assert_eq!(items.last(), Some(&75));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_seeded_first_page_skips_refetch() {
        let calls = Rc::new(Cell::new(0));
        let mut list =
            PagedList::seeded(counted_fetch(5, calls.clone()), 3, vec![1, 2, 3], 5).unwrap();
        assert_eq!(list.total_size().unwrap(), 5);
        assert_eq!(calls.get(), 0);
        let items = collect_all(list);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_seeded_complete_first_page_never_fetches() {
        let calls = Rc::new(Cell::new(0));
        let list = PagedList::seeded(counted_fetch(3, calls.clone()), 50, vec![1, 2, 3], 3).unwrap();
        assert_eq!(collect_all(list), vec![1, 2, 3]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = PagedList::new(counted_fetch(5, Rc::new(Cell::new(0))), 0);
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_fetch_error_ends_sequence() {
        let calls = Rc::new(Cell::new(0));
        let calls2 = calls.clone();
        let fetch: PageFetch<'static, u64> = Box::new(move |_, _| {
            calls2.set(calls2.get() + 1);
            Err(ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let mut list = PagedList::new(fetch, 10).unwrap();
        assert!(list.next().unwrap().is_err());
        assert!(list.next().is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_page_from_body_with_total_size() {
        let body = serde_json::json!({"pipelines": [{"id": 1}, {"id": 2}], "totalSize": 9});
        let page: Page<Value> = Page::from_body(&body, "pipelines").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 9);
    }

    #[test]
    fn test_page_from_body_without_total_size() {
        // Non-paginating endpoints omit totalSize; list length is the total
        let body = serde_json::json!({"credentials": [{"id": "a"}, {"id": "b"}, {"id": "c"}]});
        let page: Page<Value> = Page::from_body(&body, "credentials").unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
    }
}
