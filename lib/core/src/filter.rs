// Candidate filters applied after scoring
use serde::{Deserialize, Serialize};
use crate::Problem;

pub const DEFAULT_RATING_WINDOW: i32 = 500;

pub trait Filter {
    fn matches(&self, problem: &Problem) -> bool;
}

/// Inclusive difficulty window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBounds {
    pub low: i32,
    pub high: i32,
}

impl RatingBounds {
    #[inline]
    #[must_use]
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// `[rating - window, rating + window]`
    #[inline]
    #[must_use]
    pub fn around(rating: i32, window: i32) -> Self {
        Self {
            low: rating.saturating_sub(window),
            high: rating.saturating_add(window),
        }
    }

    #[inline]
    pub fn contains(&self, rating: i32) -> bool {
        self.low <= rating && rating <= self.high
    }
}

impl Filter for RatingBounds {
    fn matches(&self, problem: &Problem) -> bool {
        problem.rating().map(|r| self.contains(r)).unwrap_or(false)
    }
}
