//! # probsim Core
//!
//! Core data structures for the probsim problem recommender.
//!
//! - [`RawProblem`] - A catalog record as delivered by a provider
//! - [`Problem`] - An immutable, vectorized problem
//! - [`TagVector`] - Binary indicator vector over a [`Vocabulary`]
//! - [`Catalog`] - Problems plus the vocabulary they were built against
//! - [`TagVectorizer`] - Builds a [`Catalog`] from raw records
//! - [`RatingBounds`] - Inclusive difficulty window, usable as a [`Filter`]
//!
//! ## Example
//!
//! ```rust
//! use probsim_core::{RawProblem, TagVectorizer};
//!
//! let records = vec![
//!     RawProblem::new(1500, "A", "Alpha").with_tags(["dp", "graphs"]).with_rating(1500),
//!     RawProblem::new(1600, "B", "Beta").with_tags(["dp"]).with_rating(1600),
//! ];
//! let catalog = TagVectorizer::vectorize(&records).unwrap();
//!
//! assert_eq!(catalog.vocabulary().len(), 2);
//! assert_eq!(catalog.get("1600B").unwrap().tag_vector().ones(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod problem;
pub mod vector;
pub mod vectorizer;
pub mod vocabulary;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{Filter, RatingBounds, DEFAULT_RATING_WINDOW};
pub use problem::{problem_id, problem_url, Problem, RawProblem};
pub use vector::TagVector;
pub use vectorizer::TagVectorizer;
pub use vocabulary::Vocabulary;
