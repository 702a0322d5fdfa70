use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{classify, Sentiment};

/// A persisted review with its store-assigned id.
///
/// Records are immutable once created: there is no update or delete
/// operation anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Monotonically assigned by the store on insert.
    pub id: i64,
    /// User-supplied text, stored verbatim.
    pub text: String,
    /// Computed from `text` at insert time, never recomputed.
    pub sentiment: Sentiment,
    /// Insert timestamp, serialized as an RFC 3339 UTC string.
    pub created_at: DateTime<Utc>,
}

/// A review that has not been persisted yet.
///
/// Carries everything the store needs except the id it will assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub text: String,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
}

impl NewReview {
    /// Builds a review from raw text, classifying it and stamping the
    /// current UTC time.
    ///
    /// This is the only constructor, so a stored sentiment is always the
    /// classifier's verdict on the stored text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let sentiment = classify(&text);
        Self {
            text,
            sentiment,
            created_at: Utc::now(),
        }
    }
}
