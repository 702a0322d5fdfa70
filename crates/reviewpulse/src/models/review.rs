use serde::Deserialize;

use reviewpulse_core::review::NewReview;

/// Request payload for submitting a review.
///
/// The text is left unvalidated on purpose: the classifier accepts any
/// string, including the empty one, and classifies what it cannot match
/// as neutral.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub text: String,
}

impl CreateReview {
    /// Converts the request into a classified, timestamped NewReview.
    pub fn into_new_review(self) -> NewReview {
        NewReview::from_text(self.text)
    }
}
