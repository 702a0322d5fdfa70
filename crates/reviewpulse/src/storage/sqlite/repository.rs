//! SQLite repository implementation.
//!
//! Implements the repository trait from `reviewpulse_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use reviewpulse_core::review::{NewReview, Review};
use reviewpulse_core::sentiment::Sentiment;
use reviewpulse_core::storage::{RepositoryError, Result, ReviewRepository};

use super::conversions::{format_datetime, row_to_review};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds a single connection whose background thread serializes all database
/// work, so concurrent handler calls never contend on SQLite locks.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn insert_review(&self, review: &NewReview) -> Result<Review> {
        let text = review.text.clone();
        let sentiment = review.sentiment;
        let created_at = format_datetime(&review.created_at);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_REVIEW,
                    rusqlite::params![text, sentiment.as_str(), created_at],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(Review {
            id,
            text: review.text.clone(),
            sentiment: review.sentiment,
            created_at: review.created_at,
        })
    }

    async fn list_reviews(&self, filter: Option<Sentiment>) -> Result<Vec<Review>> {
        self.conn
            .call(move |conn| {
                let mut reviews = Vec::new();

                match filter {
                    Some(sentiment) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_REVIEWS_BY_SENTIMENT)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map([sentiment.as_str()], row_to_review)
                            .map_err(wrap_err)?;

                        for row_result in rows {
                            reviews.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_REVIEWS).map_err(wrap_err)?;
                        let rows = stmt.query_map([], row_to_review).map_err(wrap_err)?;

                        for row_result in rows {
                            reviews.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }

                Ok(reviews)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
