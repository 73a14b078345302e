use ahash::AHashMap;

/// Ordered set of distinct tags defining tag vector positions
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tags: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from tags in first-appearance order
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary = Self::new();
        for tag in tags {
            vocabulary.insert(tag);
        }
        vocabulary
    }

    /// Insert a tag, returning its position
    pub fn insert(&mut self, tag: &str) -> usize {
        if let Some(&position) = self.positions.get(tag) {
            return position;
        }
        let position = self.tags.len();
        self.tags.push(tag.to_string());
        self.positions.insert(tag.to_string(), position);
        position
    }

    #[inline]
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).copied()
    }

    #[inline]
    pub fn tag(&self, position: usize) -> Option<&str> {
        self.tags.get(position).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.positions.contains_key(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_position() {
        let vocabulary = Vocabulary::from_tags(["dp", "graphs", "dp", "math", "graphs"]);
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.position("dp"), Some(0));
        assert_eq!(vocabulary.position("graphs"), Some(1));
        assert_eq!(vocabulary.position("math"), Some(2));
        assert_eq!(vocabulary.tag(2), Some("math"));
        assert_eq!(vocabulary.position("geometry"), None);
    }

    #[test]
    fn test_iter_order() {
        let vocabulary = Vocabulary::from_tags(["b", "a", "c"]);
        let tags: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(tags, vec!["b", "a", "c"]);
    }
}
