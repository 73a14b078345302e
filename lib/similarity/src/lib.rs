//! # probsim Similarity
//!
//! Tag-overlap similarity ranking for competitive-programming problems.
//!
//! ## Example
//!
//! ```rust
//! use probsim_core::{RatingBounds, RawProblem, TagVectorizer};
//! use probsim_similarity::SimilarityRanker;
//!
//! let catalog = TagVectorizer::vectorize(&[
//!     RawProblem::new(1, "A", "A").with_tags(["dp", "graphs"]).with_rating(1500),
//!     RawProblem::new(2, "B", "B").with_tags(["dp"]).with_rating(1600),
//!     RawProblem::new(3, "C", "C").with_tags(["geometry"]).with_rating(1550),
//! ])
//! .unwrap();
//!
//! let ranker = SimilarityRanker::default();
//! let results = ranker
//!     .find_similar_by_id(&catalog, "1A", Some(RatingBounds::new(1000, 2000)))
//!     .unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].problem.id(), "2B");
//! assert_eq!(results[0].score, 0.707);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Score    │────>│  Threshold  │────>│   Rating    │────>│  Order +    │
//! │  (cosine)   │     │  (>= 0.5)   │     │   window    │     │  top 20     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod ranker;
pub mod score;

pub use ranker::{RankerConfig, SimilarityRanker, SimilarityResult, MAX_RESULTS, MIN_SIMILARITY};
pub use score::{round_score, tag_similarity, SCORE_DECIMALS};
