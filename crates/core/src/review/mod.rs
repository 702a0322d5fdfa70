//! Review record types.

mod types;

pub use types::{NewReview, Review};
