//! # probsim
//!
//! Recommends competitive-programming problems similar to a given one.
//!
//! Each problem's tags become a binary vector over the catalog's tag
//! vocabulary; candidates are ranked by cosine similarity, kept only when
//! they score at least 0.5 and fall inside a rating window, and the best 20
//! are returned.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! probsim --catalog problems.json --problem 1500A --rating-from 1200 --rating-to 1800
//! probsim --catalog problems.json --cache catalog-cache.json --problem 1500A
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use probsim::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(CatalogStore::new());
//! let provider = StaticProvider::new(vec![
//!     RawProblem::new(1, "A", "A").with_tags(["dp", "graphs"]).with_rating(1500),
//!     RawProblem::new(2, "B", "B").with_tags(["dp"]).with_rating(1600),
//! ]);
//! store.refresh_if_stale(chrono::Utc::now(), default_ttl(), &provider).unwrap();
//!
//! let handler = QueryHandler::new(store, SimilarityRanker::default());
//! let response = handler.handle(&QueryRequest::new("1A"));
//! assert_eq!(response.results()[0].problem.id(), "2B");
//! ```
//!
//! ## Crate Structure
//!
//! - `probsim-core` - Problems, vocabulary, tag vectors, rating bounds
//! - `probsim-similarity` - Cosine scoring and ranking
//! - `probsim-storage` - Catalog snapshots with staleness-driven refresh
//! - `probsim-api` - Query parsing and the result contract

// Re-export core types
pub use probsim_core::{
    Catalog, Problem, RawProblem, TagVector, Vocabulary, TagVectorizer,
    Filter, RatingBounds, DEFAULT_RATING_WINDOW,
    Error, Result,
};

// Re-export ranking
pub use probsim_similarity::{
    RankerConfig, SimilarityRanker, SimilarityResult, MAX_RESULTS, MIN_SIMILARITY,
};

// Re-export storage
pub use probsim_storage::{
    default_ttl, CatalogProvider, CatalogSnapshot, CatalogStore, JsonFileProvider, SnapshotCache,
    StaticProvider, DEFAULT_TTL_SECS,
};

// Re-export API
pub use probsim_api::{QueryHandler, QueryRequest, QueryResponse};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Problem, RawProblem, TagVector, Vocabulary, TagVectorizer,
        Filter, RatingBounds,
        Error, Result,
        RankerConfig, SimilarityRanker, SimilarityResult,
        default_ttl, CatalogProvider, CatalogSnapshot, CatalogStore, JsonFileProvider,
        SnapshotCache, StaticProvider,
        QueryHandler, QueryRequest, QueryResponse,
    };
}
