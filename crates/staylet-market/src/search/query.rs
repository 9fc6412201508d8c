//! Listing search query builder.

use serde::{Deserialize, Serialize};

use crate::listing::Listing;
use crate::search::{rank_properties, Filter, Pagination, SearchResults, SortMode};

/// Largest page size a query accepts.
pub const MAX_PER_PAGE: usize = 100;

/// A listing search over a fetched snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Filters to apply; all must match.
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sort: SortMode,
    /// Current page (1-indexed).
    pub page: usize,
    pub per_page: usize,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortMode::Popular,
            page: 1,
            per_page: 20,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Page is at least 1, page size is clamped to 1..=100.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Check a listing against every filter.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|f| f.matches(listing))
    }

    /// Filter, rank and paginate. `listings` is left untouched.
    pub fn apply(&self, listings: &[Listing]) -> SearchResults<Listing> {
        let matched: Vec<Listing> = listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect();
        let ranked = rank_properties(&matched, self.sort);

        let pagination = Pagination::new(self.page, self.per_page, ranked.len());
        let items: Vec<Listing> = ranked
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect();

        tracing::debug!(
            fetched = listings.len(),
            matched = pagination.total,
            sort = self.sort.as_str(),
            page = self.page,
            "listing search"
        );

        SearchResults::new(items, pagination)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
