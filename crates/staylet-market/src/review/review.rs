//! Review data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GuestId, HostId, ListingId, ResponseId, ReviewId};
use crate::review::{classify_review, response_deadline_from, ResponseStatus, ResponseTracked};

/// A host's reply to a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResponse {
    pub id: ResponseId,
    pub host_id: HostId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Individual review, joined with its host response when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub listing_id: ListingId,
    /// Owner of the reviewed listing.
    pub host_id: HostId,
    pub guest_id: GuestId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response: Option<HostResponse>,
}

impl Review {
    /// Publish the review and start the host's response window.
    pub fn approve(&mut self, at: DateTime<Utc>) {
        self.approved_at = Some(at);
        self.response_deadline = Some(response_deadline_from(at));
    }

    /// Current response status at `now`.
    pub fn status(&self, now: DateTime<Utc>) -> ResponseStatus {
        classify_review(self, now)
    }

    /// Render star rating as text.
    pub fn render_stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

impl ResponseTracked for Review {
    fn has_response(&self) -> bool {
        self.response.is_some()
    }

    fn response_deadline(&self) -> Option<DateTime<Utc>> {
        self.response_deadline
    }
}

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    fn record(&mut self, stars: u8) {
        match stars {
            5 => self.five_star += 1,
            4 => self.four_star += 1,
            3 => self.three_star += 1,
            2 => self.two_star += 1,
            1 => self.one_star += 1,
            _ => {}
        }
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8, total: u32) -> f32 {
        if total == 0 {
            return 0.0;
        }
        let count = match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        };
        (count as f32 / total as f32) * 100.0
    }
}

/// Rating aggregate for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_reviews: u32,
    pub distribution: RatingDistribution,
}

impl RatingSummary {
    /// Summarize reviews. Ratings outside 1..=5 are ignored.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut distribution = RatingDistribution::default();
        let mut total = 0u32;
        let mut sum = 0u32;

        for review in reviews.iter().filter(|r| (1..=5).contains(&r.rating)) {
            distribution.record(review.rating);
            total += 1;
            sum += u32::from(review.rating);
        }

        let average_rating = if total == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(total)
        };

        Self {
            average_rating,
            total_reviews: total,
            distribution,
        }
    }
}
