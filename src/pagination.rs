//! Page slicing for listing grids and infinite scroll.

use crate::error::CalcError;
use serde::Serialize;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually served.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_more: bool,
}

/// Splits a result set into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, CalcError> {
        if page_size == 0 {
            return Err(CalcError::invalid("page_size", "must be greater than zero"));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Returns page `page_number` (1-based; 0 is read as 1). Pages past the
    /// end are empty.
    pub fn page<'a, T>(&self, items: &'a [T], page_number: usize) -> Page<'a, T> {
        let page = page_number.max(1);
        let start = (page - 1).saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());

        Page {
            items: &items[start..end],
            page,
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
            has_more: end < items.len(),
        }
    }

    /// Everything revealed after `pages_loaded` scroll loads.
    pub fn loaded<'a, T>(&self, items: &'a [T], pages_loaded: usize) -> &'a [T] {
        let end = pages_loaded.saturating_mul(self.page_size).min(items.len());
        &items[..end]
    }
}
