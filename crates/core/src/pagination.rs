//! Fixed-size, 1-indexed page arithmetic.
//!
//! Listing endpoints that paginate always return [`PAGE_SIZE`] records per
//! page in ascending id order. A page that lies outside the populated range
//! is reported as [`CoreError::PageOutOfRange`] so the API can answer 404.

use crate::error::CoreError;

/// Number of records on every page.
pub const PAGE_SIZE: i64 = 10;

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// `LIMIT`/`OFFSET` pair for a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Compute the window for a 1-indexed page number.
    ///
    /// Page 0 and negative pages never contain anything.
    pub fn for_page(page: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::PageOutOfRange { page });
        }
        let offset = (page - 1)
            .checked_mul(PAGE_SIZE)
            .ok_or(CoreError::PageOutOfRange { page })?;
        Ok(Self {
            page,
            limit: PAGE_SIZE,
            offset,
        })
    }

    /// Reject the page when it starts at or after `total` records.
    ///
    /// An empty table has no valid page at all.
    pub fn ensure_within(&self, total: i64) -> Result<(), CoreError> {
        if self.offset >= total {
            return Err(CoreError::PageOutOfRange { page: self.page });
        }
        Ok(())
    }
}
