use serde::{Deserialize, Serialize};

/// A binary indicator vector over a tag vocabulary
///
/// Position `i` is 1 when the owning problem carries the tag at
/// vocabulary index `i`, 0 otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TagVector {
    data: Vec<u8>,
}

impl TagVector {
    /// All-zero vector of the given dimension
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self { data: vec![0; dim] }
    }

    /// Build from explicit bits; any non-zero entry is stored as 1
    #[must_use]
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            data: bits.iter().map(|&b| u8::from(b != 0)).collect(),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize) {
        self.data[index] = 1;
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.data.get(index).map(|&b| b == 1)
    }

    /// Number of set positions
    #[inline]
    #[must_use]
    pub fn ones(&self) -> usize {
        self.data.iter().filter(|&&b| b == 1).count()
    }

    /// Number of positions set in both vectors
    #[inline]
    pub fn dot(&self, other: &TagVector) -> usize {
        self.data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| **a == 1 && **b == 1)
            .count()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.ones() as f64).sqrt()
    }

    /// Compute cosine similarity with another vector
    ///
    /// Returns 0.0 when the dimensions differ or either vector has no set
    /// positions.
    #[inline]
    pub fn cosine_similarity(&self, other: &TagVector) -> f64 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) as f64 / (norm_a * norm_b)
    }
}
