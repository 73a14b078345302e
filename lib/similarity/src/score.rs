//! Similarity scores
//!
//! Scores are cosine similarities between binary tag vectors, rounded to
//! [`SCORE_DECIMALS`] decimal places, so they lie in `[0.0, 1.0]`.

use probsim_core::TagVector;

pub const SCORE_DECIMALS: i32 = 3;

/// Round a raw similarity to [`SCORE_DECIMALS`] places
#[inline]
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}

/// Rounded cosine similarity between two tag vectors
///
/// Vectors with no set tags score 0.0 against everything.
#[inline]
pub fn tag_similarity(a: &TagVector, b: &TagVector) -> f64 {
    round_score(a.cosine_similarity(b))
}
