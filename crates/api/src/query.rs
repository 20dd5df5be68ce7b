//! Shared query parameter and search body types for API handlers.

use serde::Deserialize;
use trio_core::pagination::DEFAULT_PAGE;

/// `?page=N` on paginated listings.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

/// Body of the venue and artist search forms. An empty term matches everything.
#[derive(Debug, Deserialize)]
pub struct SearchTermBody {
    #[serde(default)]
    pub search_term: String,
}
