//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction so handlers never touch SQLite directly.

use std::sync::Arc;

use reviewpulse_core::storage::ReviewRepository;

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for database access.
#[derive(Clone)]
pub struct AppState {
    /// Review repository backing the HTTP handlers.
    pub review_repo: Arc<dyn ReviewRepository>,
}

impl AppState {
    /// Creates AppState with SQLite storage at the configured path.
    ///
    /// Opens the database (creating the file if it does not exist yet) and
    /// runs schema initialization before any request is served.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let review_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

        Ok(Self { review_repo })
    }
}

// ============================================================================
// Test support - in-memory database constructor for unit tests
// ============================================================================
