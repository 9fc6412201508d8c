//! Rental listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::CancellationPolicy;
use crate::ids::{HostId, ListingId};
use crate::money::{Currency, Money};
use crate::search::Rankable;

/// Kind of rental a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RentalType {
    /// Nightly stays.
    #[default]
    ShortTerm,
    /// Month-by-month rentals.
    Monthly,
    /// Cars and other vehicles.
    Vehicle,
}

impl RentalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalType::ShortTerm => "short_term",
            RentalType::Monthly => "monthly",
            RentalType::Vehicle => "vehicle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RentalType::ShortTerm => "Short-term stay",
            RentalType::Monthly => "Monthly rental",
            RentalType::Vehicle => "Vehicle",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "short_term" => Some(RentalType::ShortTerm),
            "monthly" => Some(RentalType::Monthly),
            "vehicle" => Some(RentalType::Vehicle),
            _ => None,
        }
    }
}

/// A listing snapshot as fetched for a search request.
///
/// Aggregates such as `rating` and `review_count` are maintained by the
/// backend and may be missing on new listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub host_id: HostId,
    pub title: String,
    #[serde(default)]
    pub rental_type: RentalType,
    #[serde(default)]
    pub location: Option<String>,
    /// Price per night in the smallest currency unit.
    #[serde(default)]
    pub price_per_night: Option<i64>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub cancellation_policy: CancellationPolicy,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Nightly price as [`Money`], if set.
    pub fn nightly_price(&self) -> Option<Money> {
        self.price_per_night.map(|p| Money::new(p, self.currency))
    }
}

impl Rankable for Listing {
    fn price_per_night(&self) -> Option<f64> {
        self.price_per_night.map(|p| p as f64)
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn review_count(&self) -> Option<u32> {
        self.review_count
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
