//! Refund lines for cancelled bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::{Booking, RefundType};
use crate::error::{MarketError, Result};
use crate::ids::{BookingId, GuestId, ListingId};
use crate::money::{Currency, Money};

/// A refund owed to a guest for a cancelled booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRecord {
    pub booking_id: BookingId,
    pub listing_id: ListingId,
    pub guest_id: GuestId,
    pub amount: Money,
    pub refund_percentage: u32,
    pub refund_type: RefundType,
    pub cancelled_at: DateTime<Utc>,
}

/// Build refund lines for every cancelled booking.
///
/// Bookings that are not cancelled are skipped, as are cancellations whose
/// refund amount is zero. Input order is preserved.
pub fn collect_refunds(bookings: &[Booking], now: DateTime<Utc>) -> Vec<RefundRecord> {
    let records: Vec<RefundRecord> = bookings
        .iter()
        .filter(|b| b.is_cancelled())
        .filter_map(|b| {
            let result = b.refund(now);
            if !result.is_refundable() {
                tracing::debug!(booking_id = %b.id, "dropping zero-amount refund");
                return None;
            }
            Some(RefundRecord {
                booking_id: b.id.clone(),
                listing_id: b.listing_id.clone(),
                guest_id: b.guest_id.clone(),
                amount: result.refund_amount,
                refund_percentage: result.refund_percentage,
                refund_type: result.refund_type,
                cancelled_at: b.cancelled_at.unwrap_or(now),
            })
        })
        .collect();

    tracing::debug!(bookings = bookings.len(), refunds = records.len(), "collected refunds");
    records
}

/// Totals over a set of refund lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundSummary {
    pub count: usize,
    pub full_count: usize,
    pub partial_count: usize,
    pub total: Money,
}

impl RefundSummary {
    /// Summarize refund lines. All lines must share one currency; an empty
    /// set totals zero in `fallback_currency`.
    pub fn from_records(records: &[RefundRecord], fallback_currency: Currency) -> Result<Self> {
        let currency = records
            .first()
            .map(|r| r.amount.currency)
            .unwrap_or(fallback_currency);

        let mut total = Money::zero(currency);
        let mut full_count = 0;
        for record in records {
            if record.amount.currency != currency {
                return Err(MarketError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: record.amount.currency.code().to_string(),
                });
            }
            total = total.try_add(&record.amount).ok_or(MarketError::Overflow)?;
            if record.refund_type == RefundType::Full {
                full_count += 1;
            }
        }

        Ok(Self {
            count: records.len(),
            full_count,
            partial_count: records.len() - full_count,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingStatus, CancellationPolicy};
    use chrono::{NaiveDate, TimeZone};

    fn cancelled(id: &str, policy: CancellationPolicy, day: u32, price: i64) -> Booking {
        Booking {
            id: BookingId::new(id),
            listing_id: ListingId::new("ls-1"),
            guest_id: GuestId::new("guest-1"),
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            total_price: price,
            currency: Currency::KRW,
            cancellation_policy: policy,
            status: BookingStatus::Cancelled,
            cancelled_at: Some(Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_amount_refunds_are_dropped() {
        let bookings = vec![
            cancelled("a", CancellationPolicy::Flexible, 8, 100000),
            cancelled("b", CancellationPolicy::NonRefundable, 1, 100000),
            cancelled("c", CancellationPolicy::Strict, 8, 100000),
            cancelled("d", CancellationPolicy::Moderate, 6, 80000),
        ];

        let records = collect_refunds(&bookings, now());
        let ids: Vec<&str> = records.iter().map(|r| r.booking_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(records[1].amount.amount, 40000);
        assert_eq!(records[1].refund_type, RefundType::Partial);
    }

    #[test]
    fn test_active_bookings_are_skipped() {
        let mut active = cancelled("a", CancellationPolicy::Flexible, 8, 100000);
        active.status = BookingStatus::Confirmed;
        active.cancelled_at = None;

        assert!(collect_refunds(&[active], now()).is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let bookings = vec![
            cancelled("a", CancellationPolicy::Flexible, 8, 100000),
            cancelled("d", CancellationPolicy::Moderate, 6, 80000),
        ];
        let records = collect_refunds(&bookings, now());
        let summary = RefundSummary::from_records(&records, Currency::KRW).unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.full_count, 1);
        assert_eq!(summary.partial_count, 1);
        assert_eq!(summary.total.amount, 140000);
    }

    #[test]
    fn test_summary_rejects_mixed_currency() {
        let mut usd = cancelled("u", CancellationPolicy::Flexible, 8, 5000);
        usd.currency = Currency::USD;
        let bookings = vec![cancelled("a", CancellationPolicy::Flexible, 8, 100000), usd];
        let records = collect_refunds(&bookings, now());

        let err = RefundSummary::from_records(&records, Currency::KRW).unwrap_err();
        assert!(matches!(err, MarketError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_empty_summary() {
        let summary = RefundSummary::from_records(&[], Currency::USD).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, Money::zero(Currency::USD));
    }
}
