//! Core domain logic for the reviewpulse service.
//!
//! Everything in this crate is pure: the sentiment labels and keyword
//! classifier, the review record types, and the storage abstraction with its
//! error taxonomy. All I/O (HTTP, SQLite) lives in the service crate.

pub mod review;
pub mod sentiment;
pub mod storage;
