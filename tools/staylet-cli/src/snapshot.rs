//! JSON snapshots exported from the backend.
//!
//! Each snapshot file is a JSON array of rows (bookings, listings or reviews
//! with their joined host response).

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use staylet_market::review::{HostResponse, NewResponse, Notifier, Review, ReviewStore};
use staylet_market::{HostId, MarketError, ResponseId, ReviewId};

/// Read a snapshot file into rows.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let rows: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded snapshot");
    Ok(rows)
}

/// A reviews snapshot acting as the review store. Responses are written
/// back to the file.
pub struct SnapshotReviewStore {
    path: PathBuf,
    reviews: Mutex<Vec<Review>>,
}

impl SnapshotReviewStore {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            reviews: Mutex::new(load_rows(path)?),
        })
    }

    fn lock(&self) -> staylet_market::Result<std::sync::MutexGuard<'_, Vec<Review>>> {
        self.reviews
            .lock()
            .map_err(|_| MarketError::Store("snapshot lock poisoned".to_string()))
    }
}

#[async_trait]
impl ReviewStore for SnapshotReviewStore {
    async fn get_review(&self, id: &ReviewId) -> staylet_market::Result<Option<Review>> {
        Ok(self.lock()?.iter().find(|r| r.id == *id).cloned())
    }

    async fn reviews_for_host(&self, host_id: &HostId) -> staylet_market::Result<Vec<Review>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|r| r.host_id == *host_id)
            .cloned()
            .collect())
    }

    async fn insert_response(
        &self,
        review_id: &ReviewId,
        response: NewResponse,
    ) -> staylet_market::Result<HostResponse> {
        let mut reviews = self.lock()?;
        let review = reviews
            .iter_mut()
            .find(|r| r.id == *review_id)
            .ok_or_else(|| MarketError::ReviewNotFound(review_id.to_string()))?;

        let stored = HostResponse {
            id: ResponseId::new(format!(
                "resp-{}-{}",
                review_id,
                response.created_at.timestamp_millis()
            )),
            host_id: response.host_id,
            body: response.body,
            created_at: response.created_at,
        };
        review.response = Some(stored.clone());

        let content = serde_json::to_string_pretty(&*reviews)?;
        std::fs::write(&self.path, content).map_err(|e| MarketError::Store(e.to_string()))?;

        Ok(stored)
    }
}

/// Notifier that records the guest email in the log instead of sending it.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn review_responded(
        &self,
        review: &Review,
        response: &HostResponse,
    ) -> staylet_market::Result<()> {
        tracing::info!(
            guest_id = %review.guest_id,
            review_id = %review.id,
            response_id = %response.id,
            "guest notified of host response"
        );
        Ok(())
    }
}
