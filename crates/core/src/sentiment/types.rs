use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a review's tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Error returned when parsing an unknown sentiment label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sentiment label: {0}")]
pub struct ParseSentimentError(pub String);

impl Sentiment {
    /// Returns the lowercase label used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseSentimentError;

    /// Accepts the exact lowercase labels only. The query-filter validation
    /// relies on this being strict: `Positive` and `happy` both fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(ParseSentimentError(s.to_string())),
        }
    }
}
