// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::ops::Range;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced when seeding a pagination store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid page size {page_size}: a page must hold at least one item")]
    InvalidPageSize { page_size: usize },
}

/// Holds the pagination state of a list (generic, for various entities)
///
/// `total_pages` and both navigation flags are derived from the other three
/// fields and are always recomputed from the current page after a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: usize,
    pub page_size: usize,
    /// Zero-based
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    /// Builds a consistent state, clamping `current_page` to the last existing page.
    fn derive(total_items: usize, page_size: usize, current_page: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        let current_page = current_page.min(total_pages.saturating_sub(1));

        Pagination {
            total_items,
            page_size,
            current_page,
            total_pages,
            previous_enabled: current_page > 0,
            next_enabled: current_page + 1 < total_pages,
        }
    }

    /// Half-open range of the item indices shown on the current page
    pub fn item_range(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);

        start..end
    }

    /// One-based page number for labels, `0` when there is nothing to show
    pub fn display_page(&self) -> usize {
        if self.total_pages == 0 {
            0
        } else {
            self.current_page + 1
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.total_pages
    }
}

/// Input of [`PaginationStore::set_pagination`]
///
/// A `current_page` of `None` keeps the page the store is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationArgs {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: Option<usize>,
}

/// Pagination inputs supplied by the list view that owns the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListContext {
    pub total: usize,
    pub per_page: usize,
    pub current_page: Option<usize>,
}

impl From<ListContext> for PaginationArgs {
    fn from(context: ListContext) -> Self {
        PaginationArgs {
            total_items: context.total,
            page_size: context.per_page,
            current_page: Some(context.current_page.unwrap_or(0)),
        }
    }
}

/// Identifies a pagination action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    First,
    Back,
    Forward,
}

/// Handle returned by [`PaginationStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Pagination)>;

/// Owns the pagination state of a single list view.
///
/// Navigation never leaves the `[0, total_pages - 1]` range: moving past a
/// boundary is a no-op that returns `false`. Subscribers are called
/// synchronously after every operation that actually changed the state.
#[derive(Default)]
pub struct PaginationStore {
    pagination: Pagination,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PaginationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already seeded with the given list inputs
    pub fn with_context(context: ListContext) -> Result<Self, PaginationError> {
        let mut store = Self::new();
        store.reset(context)?;
        Ok(store)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Merges `args` into the state and recomputes every derived field.
    ///
    /// A page size of zero is rejected and leaves the state untouched.
    pub fn set_pagination(&mut self, args: PaginationArgs) -> Result<(), PaginationError> {
        if args.page_size == 0 {
            warn!(
                total_items = args.total_items,
                "rejected pagination without a page size"
            );
            return Err(PaginationError::InvalidPageSize {
                page_size: args.page_size,
            });
        }

        let current_page = args.current_page.unwrap_or(self.pagination.current_page);
        let next = Pagination::derive(args.total_items, args.page_size, current_page);
        if current_page != next.current_page {
            debug!(
                requested = current_page,
                clamped = next.current_page,
                "requested page is out of range"
            );
        }

        self.commit(next);
        Ok(())
    }

    /// Re-seeds the store from the owning list's inputs, starting at page 0
    /// unless the context names a page.
    pub fn reset(&mut self, context: ListContext) -> Result<(), PaginationError> {
        self.set_pagination(context.into())
    }

    pub fn set_next_page(&mut self) -> bool {
        if !self.pagination.next_enabled {
            debug!(
                current_page = self.pagination.current_page,
                "already on the last page"
            );
            return false;
        }

        let Pagination {
            total_items,
            page_size,
            current_page,
            ..
        } = self.pagination;
        self.commit(Pagination::derive(total_items, page_size, current_page + 1))
    }

    pub fn set_prev_page(&mut self) -> bool {
        if !self.pagination.previous_enabled {
            debug!("already on the first page");
            return false;
        }

        let Pagination {
            total_items,
            page_size,
            current_page,
            ..
        } = self.pagination;
        self.commit(Pagination::derive(total_items, page_size, current_page - 1))
    }

    /// Jumps to page 0, recomputing the page count from the stored totals.
    pub fn set_first_page(&mut self) -> bool {
        let Pagination {
            total_items,
            page_size,
            ..
        } = self.pagination;
        self.commit(Pagination::derive(total_items, page_size, 0))
    }

    pub fn apply(&mut self, action: PaginationAction) -> bool {
        match action {
            PaginationAction::First => self.set_first_page(),
            PaginationAction::Back => self.set_prev_page(),
            PaginationAction::Forward => self.set_next_page(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Pagination) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self, next: Pagination) -> bool {
        if next == self.pagination {
            return false;
        }

        debug!(
            current_page = next.current_page,
            total_pages = next.total_pages,
            previous_enabled = next.previous_enabled,
            next_enabled = next.next_enabled,
            "pagination changed"
        );
        self.pagination = next;
        for (_, listener) in &mut self.subscribers {
            listener(&self.pagination);
        }

        true
    }
}

impl fmt::Debug for PaginationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationStore")
            .field("pagination", &self.pagination)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
