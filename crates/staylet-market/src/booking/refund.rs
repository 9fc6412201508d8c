//! Cancellation refund calculation.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::CancellationPolicy;
use crate::money::Money;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whether a refund returns the whole booking price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundType {
    Full,
    Partial,
}

impl RefundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundType::Full => "full",
            RefundType::Partial => "partial",
        }
    }
}

/// Outcome of a refund calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResult {
    /// Lead time used for the policy lookup.
    pub days_until_check_in: i64,
    /// 0, 50 or 100.
    pub refund_percentage: u32,
    pub refund_amount: Money,
    pub refund_type: RefundType,
}

impl RefundResult {
    /// Zero-amount results are not reported as refunds.
    pub fn is_refundable(&self) -> bool {
        self.refund_amount.is_positive()
    }
}

/// Whole days between a cancellation and check-in, rounded up.
///
/// Check-in is taken as midnight UTC of the check-in date. A cancellation
/// 0.1 days ahead counts as one day; one made after check-in yields zero or
/// a negative count.
pub fn days_until_check_in(check_in: NaiveDate, cancelled_at: DateTime<Utc>) -> i64 {
    let check_in_at = check_in.and_time(NaiveTime::MIN).and_utc();
    let diff_ms = (check_in_at - cancelled_at).num_milliseconds();
    (diff_ms as f64 / MILLIS_PER_DAY).ceil() as i64
}

/// Compute the refund owed for cancelling a booking.
///
/// Never fails: a zero or negative `total_price` refunds nothing.
pub fn compute_refund(
    policy: CancellationPolicy,
    check_in: NaiveDate,
    cancelled_at: DateTime<Utc>,
    total_price: Money,
) -> RefundResult {
    let days = days_until_check_in(check_in, cancelled_at);
    let refund_percentage = policy.refund_percentage(days);

    let refund_amount = if total_price.is_positive() {
        total_price.percentage(refund_percentage)
    } else {
        Money::zero(total_price.currency)
    };

    let refund_type = if refund_percentage == 100 {
        RefundType::Full
    } else {
        RefundType::Partial
    };

    tracing::debug!(
        policy = policy.as_str(),
        days,
        refund_percentage,
        amount = refund_amount.amount,
        "computed refund"
    );

    RefundResult {
        days_until_check_in: days,
        refund_percentage,
        refund_amount,
        refund_type,
    }
}
