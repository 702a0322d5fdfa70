//! Keyword-based sentiment classifier.
//!
//! Classification is a case-insensitive substring scan against two fixed
//! keyword lists. The lists are checked in order; positive keywords win when
//! a text contains both kinds.

use super::Sentiment;

/// Keywords that mark a review as positive.
pub static POSITIVE_KEYWORDS: &[&str] = &["люблю", "лайк", "отлично", "супер"];

/// Keywords that mark a review as negative.
pub static NEGATIVE_KEYWORDS: &[&str] = &["плохо", "бесит", "ненавижу", "ужас", "хуже"];

/// Classifies review text into a sentiment label.
///
/// Lower-cases the input, then returns on the first keyword hit: the
/// positive list is scanned before the negative one. Every input, including
/// the empty string, yields a label.
pub fn classify(text: &str) -> Sentiment {
    let text = text.to_lowercase();

    if POSITIVE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Sentiment::Positive;
    }
    if NEGATIVE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Sentiment::Negative;
    }

    Sentiment::Neutral
}
