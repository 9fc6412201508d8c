//! Listing search filters.

use serde::{Deserialize, Serialize};

use crate::ids::HostId;
use crate::listing::{Listing, RentalType};

/// A search filter, evaluated in memory against fetched listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    /// Only listings of this rental type.
    RentalType { rental_type: RentalType },
    /// Nightly price range, inclusive. Listings without a price never match.
    PriceRange { min: Option<i64>, max: Option<i64> },
    /// Minimum average rating. Unrated listings never match.
    MinRating { min: f64 },
    /// Listings owned by one host.
    Host { host_id: HostId },
    /// Case-insensitive match on title or location.
    Text { query: String },
}

impl Filter {
    pub fn rental_type(rental_type: RentalType) -> Self {
        Filter::RentalType { rental_type }
    }

    pub fn price_range(min: Option<i64>, max: Option<i64>) -> Self {
        Filter::PriceRange { min, max }
    }

    pub fn min_rating(min: f64) -> Self {
        Filter::MinRating { min }
    }

    pub fn host(host_id: impl Into<HostId>) -> Self {
        Filter::Host {
            host_id: host_id.into(),
        }
    }

    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text {
            query: query.into(),
        }
    }

    /// Check whether a listing passes this filter.
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Filter::RentalType { rental_type } => listing.rental_type == *rental_type,
            Filter::PriceRange { min, max } => match listing.price_per_night {
                Some(price) => {
                    min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
                }
                None => false,
            },
            Filter::MinRating { min } => listing.rating.map_or(false, |r| r >= *min),
            Filter::Host { host_id } => listing.host_id == *host_id,
            Filter::Text { query } => {
                let needle = query.to_lowercase();
                listing.title.to_lowercase().contains(&needle)
                    || listing
                        .location
                        .as_deref()
                        .map_or(false, |l| l.to_lowercase().contains(&needle))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ListingId;

    fn listing(price: Option<i64>, rating: Option<f64>) -> Listing {
        Listing {
            id: ListingId::new("ls-1"),
            host_id: HostId::new("host-1"),
            title: "Ocean view studio".to_string(),
            rental_type: RentalType::ShortTerm,
            location: Some("Busan, Haeundae".to_string()),
            price_per_night: price,
            currency: Default::default(),
            cancellation_policy: Default::default(),
            rating,
            review_count: None,
            created_at: None,
        }
    }

    #[test]
    fn test_price_range() {
        let filter = Filter::price_range(Some(50000), Some(100000));
        assert!(filter.matches(&listing(Some(50000), None)));
        assert!(filter.matches(&listing(Some(100000), None)));
        assert!(!filter.matches(&listing(Some(100001), None)));
        assert!(!filter.matches(&listing(None, None)));
    }

    #[test]
    fn test_min_rating() {
        let filter = Filter::min_rating(4.5);
        assert!(filter.matches(&listing(None, Some(4.5))));
        assert!(!filter.matches(&listing(None, Some(4.4))));
        assert!(!filter.matches(&listing(None, None)));
    }

    #[test]
    fn test_text_matches_location() {
        assert!(Filter::text("haeundae").matches(&listing(None, None)));
        assert!(Filter::text("STUDIO").matches(&listing(None, None)));
        assert!(!Filter::text("jeju").matches(&listing(None, None)));
    }

    #[test]
    fn test_filter_wire_format() {
        let json = r#"{"kind": "rental_type", "rental_type": "vehicle"}"#;
        let filter: Filter = serde_json::from_str(json).unwrap();
        assert_eq!(filter, Filter::rental_type(RentalType::Vehicle));
    }
}
