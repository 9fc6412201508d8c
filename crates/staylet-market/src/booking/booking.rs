//! Booking records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::{compute_refund, CancellationPolicy, RefundResult};
use crate::ids::{BookingId, GuestId, ListingId};
use crate::money::{Currency, Money};

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested, awaiting host confirmation.
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Check if the booking can still be cancelled by the guest.
    pub fn can_cancel(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A booking as stored by the backend.
///
/// `check_in_date <= check_out_date` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub listing_id: ListingId,
    pub guest_id: GuestId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Total price in the smallest currency unit.
    pub total_price: i64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub cancellation_policy: CancellationPolicy,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Total price as [`Money`].
    pub fn total(&self) -> Money {
        Money::new(self.total_price, self.currency)
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days().max(0)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Mark the booking cancelled at `at`. Returns false, leaving the
    /// booking untouched, when its status no longer allows cancelling.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = BookingStatus::Cancelled;
        self.cancelled_at = Some(at);
        true
    }

    /// Refund owed for this booking. Uses `cancelled_at`, or `now` when the
    /// cancellation has no recorded time.
    pub fn refund(&self, now: DateTime<Utc>) -> RefundResult {
        compute_refund(
            self.cancellation_policy,
            self.check_in_date,
            self.cancelled_at.unwrap_or(now),
            self.total(),
        )
    }
}
