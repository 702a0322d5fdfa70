//! Sentiment labels and the keyword classifier.

mod classifier;
mod types;

pub use classifier::{classify, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use types::{ParseSentimentError, Sentiment};
