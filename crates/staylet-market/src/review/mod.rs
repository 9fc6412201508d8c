//! Review module.
//!
//! Contains reviews, host responses and the 48-hour response deadline.

mod deadline;
mod desk;
mod review;

pub use deadline::{
    classify_review, response_deadline_from, response_window, time_remaining, ResponseStatus,
    ResponseTracked, RESPONSE_WINDOW_HOURS,
};
pub use desk::{
    classify_all, ClassifiedReview, NewResponse, Notifier, ResponseCounts, ReviewDesk,
    ReviewStore, MAX_RESPONSE_CHARS,
};
pub use review::{HostResponse, RatingDistribution, RatingSummary, Review};
