//! Host response workflow.
//!
//! The persistence layer and the email dispatcher are external; they are
//! reached through [`ReviewStore`] and [`Notifier`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};
use crate::ids::{HostId, ReviewId};
use crate::review::{HostResponse, ResponseStatus, Review};

/// Longest accepted response body, in characters.
pub const MAX_RESPONSE_CHARS: usize = 1000;

/// A response ready to be stored. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    pub host_id: HostId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Review persistence contract.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Fetch a review joined with its response, if any.
    async fn get_review(&self, id: &ReviewId) -> Result<Option<Review>>;

    /// Reviews on all listings owned by `host_id`.
    async fn reviews_for_host(&self, host_id: &HostId) -> Result<Vec<Review>>;

    /// Store a response and return the persisted record.
    async fn insert_response(&self, review_id: &ReviewId, response: NewResponse)
        -> Result<HostResponse>;
}

/// Notification dispatch contract (guest emails).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn review_responded(&self, review: &Review, response: &HostResponse) -> Result<()>;
}

/// A review paired with its status at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedReview {
    pub review: Review,
    pub status: ResponseStatus,
}

/// Per-status counts, e.g. for a host's notification badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCounts {
    pub pending: usize,
    pub responded: usize,
    pub expired: usize,
}

/// Classify every review at `now`, keeping input order.
pub fn classify_all(reviews: Vec<Review>, now: DateTime<Utc>) -> Vec<ClassifiedReview> {
    reviews
        .into_iter()
        .map(|review| {
            let status = review.status(now);
            ClassifiedReview { review, status }
        })
        .collect()
}

impl ResponseCounts {
    pub fn tally(reviews: &[ClassifiedReview]) -> Self {
        reviews.iter().fold(Self::default(), |mut counts, r| {
            match r.status {
                ResponseStatus::Pending => counts.pending += 1,
                ResponseStatus::Responded => counts.responded += 1,
                ResponseStatus::Expired => counts.expired += 1,
            }
            counts
        })
    }
}

/// Host-side review operations.
pub struct ReviewDesk<S, N> {
    store: S,
    notifier: N,
}

impl<S: ReviewStore, N: Notifier> ReviewDesk<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Answer a review.
    ///
    /// The response is stored first. The guest notification is sent
    /// afterwards and its failure is only logged: the stored response stays.
    /// Reviews past their deadline can still be answered.
    pub async fn respond(
        &self,
        review_id: &ReviewId,
        host_id: &HostId,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<HostResponse> {
        let body = body.trim();
        if body.is_empty() {
            return Err(MarketError::InvalidResponse("response is empty".to_string()));
        }
        if body.chars().count() > MAX_RESPONSE_CHARS {
            return Err(MarketError::InvalidResponse(format!(
                "response exceeds {} characters",
                MAX_RESPONSE_CHARS
            )));
        }

        let review = self
            .store
            .get_review(review_id)
            .await?
            .ok_or_else(|| MarketError::ReviewNotFound(review_id.to_string()))?;

        if review.host_id != *host_id {
            return Err(MarketError::NotListingHost {
                host_id: host_id.to_string(),
                review_id: review_id.to_string(),
            });
        }
        if review.response.is_some() {
            return Err(MarketError::AlreadyResponded(review_id.to_string()));
        }

        let status = review.status(now);
        let response = self
            .store
            .insert_response(
                review_id,
                NewResponse {
                    host_id: host_id.clone(),
                    body: body.to_string(),
                    created_at: now,
                },
            )
            .await?;

        tracing::info!(
            review_id = %review_id,
            host_id = %host_id,
            status = status.as_str(),
            "host responded to review"
        );

        if let Err(e) = self.notifier.review_responded(&review, &response).await {
            tracing::warn!(
                review_id = %review_id,
                error = %e,
                "review response notification failed"
            );
        }

        Ok(response)
    }

    /// Re-fetch a host's reviews and classify them at `now`.
    pub async fn reviews_for_host(
        &self,
        host_id: &HostId,
        now: DateTime<Utc>,
    ) -> Result<Vec<ClassifiedReview>> {
        let reviews = self.store.reviews_for_host(host_id).await?;
        Ok(classify_all(reviews, now))
    }

    /// Reviews still awaiting the host's answer within the deadline.
    pub async fn pending_for_host(
        &self,
        host_id: &HostId,
        now: DateTime<Utc>,
    ) -> Result<Vec<ClassifiedReview>> {
        let mut reviews = self.reviews_for_host(host_id, now).await?;
        reviews.retain(|r| r.status == ResponseStatus::Pending);
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{GuestId, ListingId, ResponseId};
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        reviews: Mutex<Vec<Review>>,
    }

    #[async_trait]
    impl ReviewStore for MemoryStore {
        async fn get_review(&self, id: &ReviewId) -> Result<Option<Review>> {
            Ok(self.reviews.lock().unwrap().iter().find(|r| r.id == *id).cloned())
        }

        async fn reviews_for_host(&self, host_id: &HostId) -> Result<Vec<Review>> {
            Ok(self
                .reviews
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.host_id == *host_id)
                .cloned()
                .collect())
        }

        async fn insert_response(
            &self,
            review_id: &ReviewId,
            response: NewResponse,
        ) -> Result<HostResponse> {
            let mut reviews = self.reviews.lock().unwrap();
            let review = reviews
                .iter_mut()
                .find(|r| r.id == *review_id)
                .ok_or_else(|| MarketError::Store("missing review".to_string()))?;
            let stored = HostResponse {
                id: ResponseId::new(format!("resp-{}", review_id)),
                host_id: response.host_id,
                body: response.body,
                created_at: response.created_at,
            };
            review.response = Some(stored.clone());
            Ok(stored)
        }
    }

    struct CountingNotifier {
        sent: AtomicUsize,
        fail: bool,
    }

    impl CountingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                sent: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn review_responded(&self, _: &Review, _: &HostResponse) -> Result<()> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(MarketError::Notification("smtp unavailable".to_string()));
            }
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn review(id: &str, approved_hours_ago: i64) -> Review {
        let mut r = Review {
            id: ReviewId::new(id),
            listing_id: ListingId::new("ls-1"),
            host_id: HostId::new("host-1"),
            guest_id: GuestId::new("guest-1"),
            rating: 4,
            body: "Great location".to_string(),
            created_at: now() - Duration::hours(approved_hours_ago + 1),
            approved_at: None,
            response_deadline: None,
            response: None,
        };
        r.approve(now() - Duration::hours(approved_hours_ago));
        r
    }

    fn desk(reviews: Vec<Review>, fail: bool) -> ReviewDesk<MemoryStore, CountingNotifier> {
        let store = MemoryStore {
            reviews: Mutex::new(reviews),
        };
        ReviewDesk::new(store, CountingNotifier::new(fail))
    }

    #[tokio::test]
    async fn test_respond_stores_and_notifies() {
        let desk = desk(vec![review("r1", 2)], false);
        let host = HostId::new("host-1");

        let response = desk
            .respond(&ReviewId::new("r1"), &host, "  Thanks for staying!  ", now())
            .await
            .unwrap();

        assert_eq!(response.body, "Thanks for staying!");
        assert_eq!(desk.notifier.sent.load(Ordering::SeqCst), 1);

        let refreshed = desk.reviews_for_host(&host, now()).await.unwrap();
        assert_eq!(refreshed[0].status, ResponseStatus::Responded);
    }

    #[tokio::test]
    async fn test_notification_failure_keeps_response() {
        let desk = desk(vec![review("r1", 2)], true);
        let host = HostId::new("host-1");

        let result = desk.respond(&ReviewId::new("r1"), &host, "Thank you", now()).await;
        assert!(result.is_ok());

        let stored = desk.store().get_review(&ReviewId::new("r1")).await.unwrap().unwrap();
        assert!(stored.response.is_some());
    }

    #[tokio::test]
    async fn test_second_response_rejected() {
        let desk = desk(vec![review("r1", 2)], false);
        let host = HostId::new("host-1");
        let id = ReviewId::new("r1");

        desk.respond(&id, &host, "First", now()).await.unwrap();
        let err = desk.respond(&id, &host, "Second", now()).await.unwrap_err();
        assert!(matches!(err, MarketError::AlreadyResponded(_)));
        assert_eq!(desk.notifier.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejects_other_hosts_and_bad_bodies() {
        let desk = desk(vec![review("r1", 2)], false);
        let id = ReviewId::new("r1");

        let err = desk
            .respond(&id, &HostId::new("host-2"), "Hi", now())
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::NotListingHost { .. }));

        let err = desk.respond(&id, &HostId::new("host-1"), "   ", now()).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidResponse(_)));

        let long = "x".repeat(MAX_RESPONSE_CHARS + 1);
        let err = desk.respond(&id, &HostId::new("host-1"), &long, now()).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidResponse(_)));

        let err = desk
            .respond(&ReviewId::new("nope"), &HostId::new("host-1"), "Hi", now())
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::ReviewNotFound(_)));
    }

    #[tokio::test]
    async fn test_expired_review_can_still_be_answered() {
        let desk = desk(vec![review("old", 72)], false);
        let host = HostId::new("host-1");

        let before = desk.reviews_for_host(&host, now()).await.unwrap();
        assert_eq!(before[0].status, ResponseStatus::Expired);

        desk.respond(&ReviewId::new("old"), &host, "Sorry for the delay", now())
            .await
            .unwrap();
        let after = desk.reviews_for_host(&host, now()).await.unwrap();
        assert_eq!(after[0].status, ResponseStatus::Responded);
    }

    #[tokio::test]
    async fn test_pending_for_host_and_counts() {
        let desk = desk(vec![review("a", 1), review("b", 50), review("c", 10)], false);
        let host = HostId::new("host-1");

        let pending = desk.pending_for_host(&host, now()).await.unwrap();
        let ids: Vec<&str> = pending.iter().map(|r| r.review.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let all = desk.reviews_for_host(&host, now()).await.unwrap();
        let counts = ResponseCounts::tally(&all);
        assert_eq!(
            counts,
            ResponseCounts {
                pending: 2,
                responded: 0,
                expired: 1
            }
        );
    }
}
