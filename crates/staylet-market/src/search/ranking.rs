//! Listing ranking.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields the ranking engine reads. Missing numbers count as zero and a
/// missing timestamp counts as the Unix epoch.
pub trait Rankable {
    fn price_per_night(&self) -> Option<f64>;
    fn rating(&self) -> Option<f64>;
    fn review_count(&self) -> Option<u32>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// Sort modes for listing search.
///
/// Unrecognized codes deserialize to [`SortMode::Popular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    /// Highest `rating * ln(review_count + 1)` first.
    #[default]
    Popular,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest rated first, more reviews breaking ties.
    Rating,
    /// Most recently created first.
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Popular,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Rating,
        SortMode::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popular => "popular",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
            SortMode::Rating => "rating",
            SortMode::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Popular => "Most Popular",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::Rating => "Highest Rated",
            SortMode::Newest => "Newest",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "popular" => Some(SortMode::Popular),
            "price_asc" => Some(SortMode::PriceAsc),
            "price_desc" => Some(SortMode::PriceDesc),
            "rating" => Some(SortMode::Rating),
            "newest" => Some(SortMode::Newest),
            _ => None,
        }
    }

    /// Parse a sort code, treating unrecognized codes as `popular`.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "unrecognized sort mode, using popular");
            SortMode::Popular
        })
    }

    /// Compare two items under this mode. `Less` means `a` ranks first.
    pub fn compare<T: Rankable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortMode::PriceAsc => price(a).total_cmp(&price(b)),
            SortMode::PriceDesc => price(b).total_cmp(&price(a)),
            SortMode::Rating => rating(b)
                .total_cmp(&rating(a))
                .then_with(|| reviews(b).cmp(&reviews(a))),
            SortMode::Newest => created_millis(b).cmp(&created_millis(a)),
            SortMode::Popular => popularity_score(b).total_cmp(&popularity_score(a)),
        }
    }
}

impl From<String> for SortMode {
    fn from(code: String) -> Self {
        Self::from_code_or_default(&code)
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn price<T: Rankable + ?Sized>(item: &T) -> f64 {
    item.price_per_night().unwrap_or(0.0)
}

fn rating<T: Rankable + ?Sized>(item: &T) -> f64 {
    item.rating().unwrap_or(0.0)
}

fn reviews<T: Rankable + ?Sized>(item: &T) -> u32 {
    item.review_count().unwrap_or(0)
}

fn created_millis<T: Rankable + ?Sized>(item: &T) -> i64 {
    item.created_at().map(|t| t.timestamp_millis()).unwrap_or(0)
}

/// Popularity score: `rating * ln(review_count + 1)`.
///
/// Zero whenever the rating or the review count is zero.
pub fn popularity_score<T: Rankable + ?Sized>(item: &T) -> f64 {
    rating(item) * (f64::from(reviews(item)) + 1.0).ln()
}

/// Rank items by `mode`, returning a new vector.
///
/// The sort is stable: items that compare equal keep their input order.
pub fn rank_properties<T: Rankable + Clone>(properties: &[T], mode: SortMode) -> Vec<T> {
    let mut ranked = properties.to_vec();
    ranked.sort_by(|a, b| mode.compare(a, b));
    ranked
}
