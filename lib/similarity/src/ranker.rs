//! Similarity ranker
//!
//! Scores every rated candidate against a query problem, keeps those at or
//! above the similarity threshold and inside the rating window, and returns
//! the best matches ordered by score and then by contest id.

use crate::score::tag_similarity;
use ordered_float::OrderedFloat;
use probsim_core::{
    Catalog, Error, Filter, Problem, RatingBounds, Result, DEFAULT_RATING_WINDOW,
};
use serde::Serialize;
use std::cmp::Ordering;

pub const MIN_SIMILARITY: f64 = 0.5;
pub const MAX_RESULTS: usize = 20;

/// A scored recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Cosine similarity rounded to 3 decimals
    pub score: f64,
    pub problem: Problem,
}

impl SimilarityResult {
    pub fn id(&self) -> &str {
        self.problem.id()
    }
}

/// Configuration for a ranker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    /// Candidates scoring below this are dropped
    pub min_similarity: f64,
    /// Maximum number of results returned
    pub max_results: usize,
    /// Half-width of the default rating window around the query's rating
    pub rating_window: i32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_similarity: MIN_SIMILARITY,
            max_results: MAX_RESULTS,
            rating_window: DEFAULT_RATING_WINDOW,
        }
    }
}

impl RankerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(Error::InvalidConfig(format!(
                "min_similarity must lie in [0, 1], got {}",
                self.min_similarity
            )));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidConfig("max_results must be positive".to_string()));
        }
        if self.rating_window < 0 {
            return Err(Error::InvalidConfig(format!(
                "rating_window must not be negative, got {}",
                self.rating_window
            )));
        }
        Ok(())
    }
}

/// Stateless tag-overlap ranker
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker {
    config: RankerConfig,
}

impl SimilarityRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Bounds a query is ranked with: the explicit ones, or a window
    /// around the query's own rating
    pub fn resolve_bounds(
        &self,
        query: &Problem,
        bounds: Option<RatingBounds>,
    ) -> Result<RatingBounds> {
        match (bounds, query.rating()) {
            (Some(bounds), _) => Ok(bounds),
            (None, Some(rating)) => Ok(RatingBounds::around(rating, self.config.rating_window)),
            (None, None) => Err(Error::MissingRating(query.id().to_string())),
        }
    }

    /// Find the problems in `catalog` most similar to `query`
    ///
    /// `query` itself and unrated candidates are never returned. Results are
    /// ordered by descending score, then descending contest id; candidates
    /// still tied keep their catalog order.
    pub fn find_similar(
        &self,
        query: &Problem,
        catalog: &[Problem],
        bounds: Option<RatingBounds>,
    ) -> Result<Vec<SimilarityResult>> {
        let bounds = self.resolve_bounds(query, bounds)?;

        let mut scored: Vec<(f64, &Problem)> = catalog
            .iter()
            .filter(|candidate| candidate.rating().is_some() && candidate.id() != query.id())
            .map(|candidate| {
                let score = tag_similarity(query.tag_vector(), candidate.tag_vector());
                (score, candidate)
            })
            .collect();

        scored.sort_by(|a, b| by_score_desc(a.0, b.0));

        let mut valid: Vec<(f64, &Problem)> = scored
            .into_iter()
            .take_while(|(score, _)| *score >= self.config.min_similarity)
            .filter(|(_, candidate)| bounds.matches(candidate))
            .collect();

        valid.sort_by(|a, b| {
            by_score_desc(a.0, b.0).then_with(|| b.1.contest_id().cmp(&a.1.contest_id()))
        });
        valid.truncate(self.config.max_results);

        Ok(valid
            .into_iter()
            .map(|(score, problem)| SimilarityResult {
                score,
                problem: problem.clone(),
            })
            .collect())
    }

    /// Look `id` up in `catalog` and rank against the whole catalog
    pub fn find_similar_by_id(
        &self,
        catalog: &Catalog,
        id: &str,
        bounds: Option<RatingBounds>,
    ) -> Result<Vec<SimilarityResult>> {
        let query = catalog.lookup(id)?;
        self.find_similar(query, catalog.problems(), bounds)
    }
}

#[inline]
fn by_score_desc(a: f64, b: f64) -> Ordering {
    OrderedFloat(b).cmp(&OrderedFloat(a))
}
