//! Marketplace error types.
//!
//! The refund, ranking and deadline calculations are total and never fail;
//! these errors come from the review-response workflow and its collaborators.

use thiserror::Error;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Review not found.
    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    /// Review already carries a host response.
    #[error("Review already has a response: {0}")]
    AlreadyResponded(String),

    /// Host is not the owner of the reviewed listing.
    #[error("Host {host_id} cannot respond to review {review_id}")]
    NotListingHost { host_id: String, review_id: String },

    /// Response body rejected.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Currency mismatch while totalling amounts.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Persistence collaborator failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Notification dispatch failure.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MarketError {
    fn from(e: serde_json::Error) -> Self {
        MarketError::Serialization(e.to_string())
    }
}

/// A specialized Result type for marketplace operations.
pub type Result<T> = std::result::Result<T, MarketError>;
