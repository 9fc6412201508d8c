//! Host response deadlines.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Hours a host has to answer a published review.
pub const RESPONSE_WINDOW_HOURS: i64 = 48;

/// The response window as a [`Duration`].
pub fn response_window() -> Duration {
    Duration::hours(RESPONSE_WINDOW_HOURS)
}

/// Deadline for a review approved at `approved_at`.
pub fn response_deadline_from(approved_at: DateTime<Utc>) -> DateTime<Utc> {
    approved_at + response_window()
}

/// Where a review stands with respect to the host's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// Awaiting a response, deadline not passed or not set.
    Pending,
    /// The host has responded.
    Responded,
    /// No response and the deadline has passed.
    Expired,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Pending => "pending",
            ResponseStatus::Responded => "responded",
            ResponseStatus::Expired => "expired",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ResponseStatus::Pending),
            "responded" => Some(ResponseStatus::Responded),
            "expired" => Some(ResponseStatus::Expired),
            _ => None,
        }
    }
}

/// Fields the deadline tracker reads.
pub trait ResponseTracked {
    fn has_response(&self) -> bool;
    fn response_deadline(&self) -> Option<DateTime<Utc>>;
}

/// Classify a review at `now`.
///
/// A response wins over an expired deadline. A review without a deadline
/// never expires. The result is never stored: the same review can move from
/// pending to expired between two calls as time passes.
pub fn classify_review<R: ResponseTracked + ?Sized>(
    review: &R,
    now: DateTime<Utc>,
) -> ResponseStatus {
    if review.has_response() {
        return ResponseStatus::Responded;
    }
    match review.response_deadline() {
        Some(deadline) if deadline < now => ResponseStatus::Expired,
        _ => ResponseStatus::Pending,
    }
}

/// Time left to respond, for pending reviews that have a deadline.
pub fn time_remaining<R: ResponseTracked + ?Sized>(
    review: &R,
    now: DateTime<Utc>,
) -> Option<Duration> {
    match classify_review(review, now) {
        ResponseStatus::Pending => review.response_deadline().map(|d| d - now),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Tracked {
        responded: bool,
        deadline: Option<DateTime<Utc>>,
    }

    impl ResponseTracked for Tracked {
        fn has_response(&self) -> bool {
            self.responded
        }
        fn response_deadline(&self) -> Option<DateTime<Utc>> {
            self.deadline
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_deadline_one_second_ago_is_expired() {
        let mut review = Tracked {
            responded: false,
            deadline: Some(now() - Duration::seconds(1)),
        };
        assert_eq!(classify_review(&review, now()), ResponseStatus::Expired);

        review.responded = true;
        assert_eq!(classify_review(&review, now()), ResponseStatus::Responded);
    }

    #[test]
    fn test_deadline_equal_to_now_is_pending() {
        let review = Tracked {
            responded: false,
            deadline: Some(now()),
        };
        assert_eq!(classify_review(&review, now()), ResponseStatus::Pending);
    }

    #[test]
    fn test_no_deadline_never_expires() {
        let review = Tracked {
            responded: false,
            deadline: None,
        };
        let far_future = now() + Duration::days(3650);
        assert_eq!(classify_review(&review, far_future), ResponseStatus::Pending);
        assert_eq!(time_remaining(&review, now()), None);
    }

    #[test]
    fn test_pending_flips_to_expired_with_time_alone() {
        let approved = now();
        let review = Tracked {
            responded: false,
            deadline: Some(response_deadline_from(approved)),
        };

        let before = approved + Duration::hours(47);
        let after = approved + Duration::hours(49);
        assert_eq!(classify_review(&review, before), ResponseStatus::Pending);
        assert_eq!(time_remaining(&review, before), Some(Duration::hours(1)));
        assert_eq!(classify_review(&review, after), ResponseStatus::Expired);
        assert_eq!(time_remaining(&review, after), None);
    }
}
