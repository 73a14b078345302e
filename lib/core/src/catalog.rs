use ahash::AHashMap;
use crate::{Error, Problem, Result, Vocabulary};

/// Vectorized problems together with the vocabulary they were built against
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vocabulary: Vocabulary,
    problems: Vec<Problem>,
    by_id: AHashMap<String, usize>,
}

impl Catalog {
    pub(crate) fn new(vocabulary: Vocabulary, problems: Vec<Problem>) -> Self {
        let mut by_id = AHashMap::with_capacity(problems.len());
        for (position, problem) in problems.iter().enumerate() {
            // Duplicate ids resolve to the first record
            by_id.entry(problem.id().to_string()).or_insert(position);
        }
        Self {
            vocabulary,
            problems,
            by_id,
        }
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Get a problem by id
    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.by_id.get(id).map(|&position| &self.problems[position])
    }

    /// Get a problem by id, failing with [`Error::ProblemNotFound`]
    pub fn lookup(&self, id: &str) -> Result<&Problem> {
        self.get(id)
            .ok_or_else(|| Error::ProblemNotFound(id.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
