//! Search module.
//!
//! Contains listing ranking, filters and pagination.

mod filter;
mod query;
mod ranking;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, MAX_PER_PAGE};
pub use ranking::{popularity_score, rank_properties, Rankable, SortMode};
pub use results::{Pagination, SearchResults};
