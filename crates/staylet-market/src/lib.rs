//! Rental marketplace domain types and logic for Staylet.
//!
//! Covers short-term stays, monthly rentals and vehicle rentals:
//!
//! - **Booking**: bookings, cancellation policies, refund calculation
//! - **Search**: listing ranking, filters, pagination
//! - **Review**: reviews, host responses, the 48-hour response deadline
//!
//! The calculations are pure. Anything that needs the current time takes it
//! as a `now` argument.
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use staylet_market::prelude::*;
//!
//! let refund = compute_refund(
//!     CancellationPolicy::Moderate,
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap(),
//!     Money::new(80000, Currency::KRW),
//! );
//! assert_eq!(refund.refund_percentage, 100);
//! assert_eq!(refund.refund_amount.amount, 80000);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod listing;
pub mod review;
pub mod search;

pub use error::{MarketError, Result};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{MarketError, Result};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Booking
    pub use crate::booking::{
        collect_refunds, compute_refund, days_until_check_in, Booking, BookingStatus,
        CancellationPolicy, RefundRecord, RefundResult, RefundSummary, RefundType,
    };

    // Listing
    pub use crate::listing::{Listing, RentalType};

    // Search
    pub use crate::search::{
        popularity_score, rank_properties, Filter, Pagination, Rankable, SearchQuery,
        SearchResults, SortMode,
    };

    // Review
    pub use crate::review::{
        classify_all, classify_review, ClassifiedReview, HostResponse, NewResponse, Notifier,
        RatingSummary, ResponseCounts, ResponseStatus, ResponseTracked, Review, ReviewDesk,
        ReviewStore,
    };
}
