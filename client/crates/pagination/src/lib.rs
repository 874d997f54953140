//! Page-slicing primitives shared by table shells.
//!
//! Purpose: keep pagination mechanics out of the roster core. The shell owns
//! the page index and page size; the core only exposes the full list. A
//! [`Pager`] turns that list into the slice the current table page shows.

use serde::{Deserialize, Serialize};

/// Page sizes the table shell offers.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 15];

/// Page size used before the operator picks one.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Errors raised by [`Pager`] constructors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// A page must hold at least one row.
    #[error("rows per page must be at least 1")]
    ZeroRowsPerPage,
}

/// Zero-based page cursor over an in-memory list.
///
/// ## Invariants
/// - `rows_per_page` is at least 1.
/// - Changing the page size rewinds to the first page, so the cursor never
///   points past the data it was resized against.
///
/// # Examples
/// ```
/// use pagination::Pager;
///
/// let items: Vec<u32> = (0..12).collect();
/// let mut pager = Pager::default();
/// assert_eq!(pager.slice(&items).len(), 5);
/// pager.set_page(2);
/// assert_eq!(pager.slice(&items), &[10, 11]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    page: usize,
    rows_per_page: usize,
}

impl Pager {
    /// Build a pager on the first page with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::ZeroRowsPerPage`] when `rows_per_page` is zero.
    pub const fn new(rows_per_page: usize) -> Result<Self, PagerError> {
        if rows_per_page == 0 {
            return Err(PagerError::ZeroRowsPerPage);
        }
        Ok(Self {
            page: 0,
            rows_per_page,
        })
    }

    /// Current zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Move to the given zero-based page.
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and rewind to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::ZeroRowsPerPage`] when `rows_per_page` is zero;
    /// the pager is left unchanged.
    pub const fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), PagerError> {
        if rows_per_page == 0 {
            return Err(PagerError::ZeroRowsPerPage);
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        Ok(())
    }

    /// Number of pages needed to show `total` rows. An empty list has zero
    /// pages.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page)
    }

    /// The slice of `items` the current page shows.
    ///
    /// A page past the end of the list yields an empty slice; the final page
    /// may be shorter than `rows_per_page`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self
            .page
            .saturating_mul(self.rows_per_page)
            .min(items.len());
        let end = start.saturating_add(self.rows_per_page).min(items.len());
        items.get(start..end).unwrap_or_default()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}
