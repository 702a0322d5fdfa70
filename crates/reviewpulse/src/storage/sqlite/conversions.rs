//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use reviewpulse_core::review::Review;
use reviewpulse_core::sentiment::Sentiment;

/// Convert a SQLite row to a Review.
///
/// Expected columns: id, text, sentiment, created_at
pub fn row_to_review(row: &Row) -> rusqlite::Result<Review> {
    let id: i64 = row.get(0)?;
    let text: String = row.get(1)?;
    let sentiment: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(Review {
        id,
        text,
        sentiment: parse_sentiment(&sentiment)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a sentiment label from its stored form.
fn parse_sentiment(s: &str) -> rusqlite::Result<Sentiment> {
    s.parse::<Sentiment>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
