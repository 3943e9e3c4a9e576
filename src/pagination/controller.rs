//! Pagination controller: the single owner of the current page index.
//!
//! Every navigational fact the view needs (current/prev/next entry, progress,
//! boundary flags) is derived from `current_index` on demand. Out-of-range
//! requests are dropped, never raised; an empty store is a normal state in
//! which every lookup returns `None`.

use crate::model::{ContentEntry, PageContentStore};
use std::fmt;
use tracing::{debug, trace};

/// Callback fired with the new index whenever `go_to_page` changes it.
pub type ChangeCallback = Box<dyn FnMut(usize)>;

/// Owns `current_index` over a fixed-length store.
///
/// # Invariant
///
/// `current_index < store.len()` whenever the store is non-empty, and
/// `current_index == 0` when it is empty.
pub struct PaginationController {
    store: PageContentStore,
    current_index: usize,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("total_pages", &self.total_pages())
            .field("current_index", &self.current_index)
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl PaginationController {
    /// Start at the first page of `store`.
    pub fn new(store: PageContentStore) -> Self {
        Self {
            store,
            current_index: 0,
            on_change: None,
        }
    }

    /// Start at `index`, clamped into range. Does not fire the callback.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.current_index = clamp_index(index, self.store.len());
        self
    }

    /// Register the index-changed callback, replacing any previous one.
    pub fn on_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The store being paged through.
    pub fn store(&self) -> &PageContentStore {
        &self.store
    }

    /// Current page index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.store.len()
    }

    /// `(current_index + 1) / total_pages`, or `0.0` for an empty store.
    pub fn progress(&self) -> f64 {
        let total = self.total_pages();
        if total == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f64 / total as f64
    }

    /// True unless on the last page (or the store is empty).
    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.total_pages()
    }

    /// True unless on the first page.
    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Move to `index`.
    ///
    /// Returns `true` when the index changed. Out-of-range targets and the
    /// already-current index are dropped without firing the callback.
    pub fn go_to_page(&mut self, index: usize) -> bool {
        let total = self.total_pages();
        if index >= total {
            debug!(index, total, "Dropping out-of-range page request");
            return false;
        }
        if index == self.current_index {
            trace!(index, "Page already current");
            return false;
        }

        self.current_index = index;
        if let Some(callback) = self.on_change.as_mut() {
            callback(index);
        }
        true
    }

    /// Move forward one page; no-op on the last page.
    pub fn go_to_next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.go_to_page(self.current_index + 1)
    }

    /// Move back one page; no-op on the first page.
    pub fn go_to_prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.go_to_page(self.current_index - 1)
    }

    /// Entry at the current index.
    pub fn current_entry(&self) -> Option<&ContentEntry> {
        self.store.get(self.current_index)
    }

    /// Entry after the current one.
    pub fn next_entry(&self) -> Option<&ContentEntry> {
        self.store.get(self.current_index + 1)
    }

    /// Entry before the current one.
    pub fn prev_entry(&self) -> Option<&ContentEntry> {
        self.current_index
            .checked_sub(1)
            .and_then(|i| self.store.get(i))
    }

    /// Re-synchronize with an external start index.
    ///
    /// Bypasses `go_to_page`: the index is clamped into range rather than
    /// dropped, and the callback does not fire.
    pub fn sync_start_index(&mut self, index: usize) {
        let clamped = clamp_index(index, self.store.len());
        debug!(requested = index, clamped, "Re-synchronizing start index");
        self.current_index = clamped;
    }

    /// Read-only view of the derived state.
    ///
    /// `is_animating` is always `false` here; the gesture adapter fills it in
    /// through [`PaginationSnapshot::with_animating`].
    pub fn snapshot(&self) -> PaginationSnapshot<'_> {
        PaginationSnapshot {
            current_entry: self.current_entry(),
            next_entry: self.next_entry(),
            prev_entry: self.prev_entry(),
            current_index: self.current_index,
            total_pages: self.total_pages(),
            progress: self.progress(),
            can_go_next: self.can_go_next(),
            can_go_prev: self.can_go_prev(),
            is_animating: false,
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// What the rendering layer reads to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationSnapshot<'a> {
    /// Entry on screen, `None` for an empty store.
    pub current_entry: Option<&'a ContentEntry>,
    /// Entry after the current one.
    pub next_entry: Option<&'a ContentEntry>,
    /// Entry before the current one.
    pub prev_entry: Option<&'a ContentEntry>,
    /// Current page index.
    pub current_index: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Fraction of the book read, in `[0, 1]`.
    pub progress: f64,
    /// A next page exists.
    pub can_go_next: bool,
    /// A previous page exists.
    pub can_go_prev: bool,
    /// A page transition is in flight.
    pub is_animating: bool,
}

impl<'a> PaginationSnapshot<'a> {
    /// Set the transition flag.
    pub fn with_animating(mut self, is_animating: bool) -> Self {
        self.is_animating = is_animating;
        self
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
