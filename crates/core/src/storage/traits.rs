use async_trait::async_trait;

use crate::review::{NewReview, Review};
use crate::sentiment::Sentiment;

use super::Result;

/// Repository for review operations.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Appends a review and returns the stored record with its assigned id.
    async fn insert_review(&self, review: &NewReview) -> Result<Review>;

    /// Gets stored reviews in insertion order, optionally filtered by
    /// sentiment.
    async fn list_reviews(&self, filter: Option<Sentiment>) -> Result<Vec<Review>>;
}
