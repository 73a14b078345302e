use serde::{Deserialize, Serialize};
use crate::vector::TagVector;

pub const PROBLEM_URL_BASE: &str = "https://codeforces.com/problemset/problem";

/// A catalog record as supplied by a provider, before vectorization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblem {
    #[serde(default)]
    pub contest_id: Option<u32>,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

impl RawProblem {
    #[must_use]
    pub fn new(contest_id: u32, index: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            contest_id: Some(contest_id),
            index: Some(index.into()),
            name: name.into(),
            tags: Vec::new(),
            rating: None,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl From<&Problem> for RawProblem {
    fn from(problem: &Problem) -> Self {
        Self {
            contest_id: Some(problem.contest_id),
            index: Some(problem.index.clone()),
            name: problem.name.clone(),
            tags: problem.tags.clone(),
            rating: problem.rating,
        }
    }
}

/// Stable problem identifier: contest id followed by the problem index
#[inline]
#[must_use]
pub fn problem_id(contest_id: u32, index: &str) -> String {
    format!("{}{}", contest_id, index)
}

#[inline]
#[must_use]
pub fn problem_url(contest_id: u32, index: &str) -> String {
    format!("{}/{}/{}", PROBLEM_URL_BASE, contest_id, index)
}

/// A vectorized problem
///
/// Built by [`crate::TagVectorizer`] against one vocabulary and never
/// modified afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    id: String,
    contest_id: u32,
    index: String,
    name: String,
    tags: Vec<String>,
    rating: Option<i32>,
    url: String,
    #[serde(skip)]
    tag_vector: TagVector,
}

impl Problem {
    pub(crate) fn new(
        contest_id: u32,
        index: String,
        name: String,
        tags: Vec<String>,
        rating: Option<i32>,
        tag_vector: TagVector,
    ) -> Self {
        Self {
            id: problem_id(contest_id, &index),
            url: problem_url(contest_id, &index),
            contest_id,
            index,
            name,
            tags,
            rating,
            tag_vector,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn contest_id(&self) -> u32 {
        self.contest_id
    }

    #[inline]
    pub fn index(&self) -> &str {
        &self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct tags in first-appearance order
    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn rating(&self) -> Option<i32> {
        self.rating
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn tag_vector(&self) -> &TagVector {
        &self.tag_vector
    }
}
