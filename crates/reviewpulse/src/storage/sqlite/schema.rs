//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `IF NOT EXISTS` makes schema initialization idempotent, so reopening an
/// existing database file is safe.
pub const CREATE_TABLES: &str = r#"
-- Reviews table
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    sentiment TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Index for sentiment-filtered listings
CREATE INDEX IF NOT EXISTS idx_reviews_sentiment ON reviews(sentiment);
"#;

// Review queries
pub const INSERT_REVIEW: &str = r#"
INSERT INTO reviews (text, sentiment, created_at)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_REVIEWS: &str = r#"
SELECT id, text, sentiment, created_at
FROM reviews
ORDER BY id ASC
"#;

pub const SELECT_REVIEWS_BY_SENTIMENT: &str = r#"
SELECT id, text, sentiment, created_at
FROM reviews
WHERE sentiment = ?1
ORDER BY id ASC
"#;
