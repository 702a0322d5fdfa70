//! Review submission and listing handlers.
//!
//! These handlers use the repository trait object for database access and
//! never classify text themselves; classification happens when the request
//! payload is converted into a `NewReview`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use reviewpulse_core::review::Review;
use reviewpulse_core::sentiment::Sentiment;

use crate::{handlers::AppError, models::CreateReview, state::AppState};

/// Error response with message (for filter validation and storage errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Query parameters for listing reviews.
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    /// Filter by sentiment label: "positive", "negative" or "neutral"
    pub sentiment: Option<String>,
}

// ============================================================================
// Create Review
// ============================================================================

/// Submit a review (POST /reviews).
///
/// Classifies the text, stamps it with the current time and persists it.
/// Responds with the stored record, including its assigned id.
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReview>,
) -> Result<Json<Review>, AppError> {
    tracing::debug!(payload = ?payload, "Received create review request");

    let review = payload.into_new_review();
    let stored = state.review_repo.insert_review(&review).await?;

    tracing::info!(review_id = stored.id, sentiment = %stored.sentiment, "Created new review");

    Ok(Json(stored))
}

// ============================================================================
// List Reviews
// ============================================================================

/// List stored reviews (GET /reviews), optionally filtered by sentiment.
///
/// Reviews come back in insertion order. An unknown `sentiment` value is a
/// 400; an empty one is ignored, same as leaving the parameter off.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    let filter = query
        .sentiment
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<Sentiment>)
        .transpose()
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid sentiment filter"))?;

    let reviews = state.review_repo.list_reviews(filter).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list reviews");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch reviews from database",
        )
    })?;

    Ok(Json(reviews))
}
