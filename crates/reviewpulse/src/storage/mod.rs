//! Storage backend implementations.
//!
//! This module provides the concrete SQLite implementation of the repository
//! trait defined in `reviewpulse_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
