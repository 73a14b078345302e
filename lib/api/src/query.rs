use probsim_core::{Problem, RatingBounds, Result};
use probsim_similarity::{SimilarityRanker, SimilarityResult};
use probsim_storage::CatalogStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// A similar-problems query as submitted by a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// `"<contestId><index>"`, e.g. `"1500A"`
    pub problem_id: String,
    #[serde(default)]
    pub rating_from: Option<String>,
    #[serde(default)]
    pub rating_to: Option<String>,
}

impl QueryRequest {
    pub fn new(problem_id: impl Into<String>) -> Self {
        Self {
            problem_id: problem_id.into(),
            rating_from: None,
            rating_to: None,
        }
    }

    #[must_use]
    pub fn with_rating_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rating_from = Some(from.into());
        self.rating_to = Some(to.into());
        self
    }

    /// Explicit bounds, only when both ends are present and parse as integers
    pub fn rating_bounds(&self) -> Option<RatingBounds> {
        let low = self.rating_from.as_deref()?.trim().parse().ok()?;
        let high = self.rating_to.as_deref()?.trim().parse().ok()?;
        Some(RatingBounds::new(low, high))
    }
}

/// The result shape handed to a presentation layer
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Found {
        question: Problem,
        result: Vec<SimilarityResult>,
        #[serde(rename = "ratingBounds")]
        rating_bounds: RatingBounds,
    },
    Failed {
        question: String,
        error: bool,
    },
}

impl QueryResponse {
    pub fn failed(problem_id: impl Into<String>) -> Self {
        QueryResponse::Failed {
            question: problem_id.into(),
            error: true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryResponse::Failed { .. })
    }

    pub fn results(&self) -> &[SimilarityResult] {
        match self {
            QueryResponse::Found { result, .. } => result.as_slice(),
            QueryResponse::Failed { .. } => &[],
        }
    }
}

/// Answers queries against the store's current snapshot
pub struct QueryHandler {
    store: Arc<CatalogStore>,
    ranker: SimilarityRanker,
}

impl QueryHandler {
    pub fn new(store: Arc<CatalogStore>, ranker: SimilarityRanker) -> Self {
        Self { store, ranker }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn ranker(&self) -> &SimilarityRanker {
        &self.ranker
    }

    /// Answer a query, folding every failure into [`QueryResponse::Failed`]
    pub fn handle(&self, request: &QueryRequest) -> QueryResponse {
        match self.try_handle(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("Query for {} failed: {}", request.problem_id, e);
                QueryResponse::failed(request.problem_id.clone())
            }
        }
    }

    /// Answer a query, surfacing lookup and rating failures as errors
    pub fn try_handle(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let snapshot = self.store.current()?;
        let catalog = snapshot.catalog();
        let question = catalog.lookup(&request.problem_id)?;

        let rating_bounds = self.ranker.resolve_bounds(question, request.rating_bounds())?;
        let result = self
            .ranker
            .find_similar(question, catalog.problems(), Some(rating_bounds))?;

        debug!(
            "Query for {} returned {} results within [{}, {}]",
            request.problem_id,
            result.len(),
            rating_bounds.low,
            rating_bounds.high
        );

        Ok(QueryResponse::Found {
            question: question.clone(),
            result,
            rating_bounds,
        })
    }
}
