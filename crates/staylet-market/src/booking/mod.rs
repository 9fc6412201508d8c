//! Booking module.
//!
//! Contains bookings, cancellation policies and refund calculation.

mod booking;
mod ledger;
mod policy;
mod refund;

pub use booking::{Booking, BookingStatus};
pub use ledger::{collect_refunds, RefundRecord, RefundSummary};
pub use policy::CancellationPolicy;
pub use refund::{compute_refund, days_until_check_in, RefundResult, RefundType};
