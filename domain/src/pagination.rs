//! Page slicing over ordered sequences.
//!
//! Pages are 1-based and fixed-size. A page past the end of the input, or
//! page 0, is simply empty; deciding whether that is an error belongs to
//! the caller.

use serde::{Deserialize, Serialize};

/// Number of questions shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A request for one page of an ordered sequence (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// The first page at the given size
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Half-open `[start, end)` bounds, or `None` for page 0 or an offset
    /// that does not fit in `usize`
    pub fn bounds(&self) -> Option<(usize, usize)> {
        let start = self.page.checked_sub(1)?.checked_mul(self.page_size)?;
        let end = start.saturating_add(self.page_size);
        Some((start, end))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Return the slice of `items` covered by `request`, clipped to the input
pub fn paginate<T>(items: &[T], request: PageRequest) -> &[T] {
    match request.bounds() {
        Some((start, end)) if start < items.len() => &items[start..end.min(items.len())],
        _ => &[],
    }
}
