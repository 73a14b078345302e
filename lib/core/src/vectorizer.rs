//! Tag vectorization
//!
//! Turns raw catalog records into [`Problem`]s carrying binary tag vectors,
//! all built against the same freshly derived [`Vocabulary`].

use crate::{Catalog, Error, Problem, RawProblem, Result, TagVector, Vocabulary};

pub struct TagVectorizer;

impl TagVectorizer {
    /// Vectorize a batch of raw records
    ///
    /// The vocabulary is the union of all tags in first-appearance order.
    /// Records without tags get an all-zero vector. A record missing its
    /// contest id or index fails the whole pass with
    /// [`Error::MalformedInput`].
    pub fn vectorize(records: &[RawProblem]) -> Result<Catalog> {
        let vocabulary = Vocabulary::from_tags(
            records.iter().flat_map(|r| r.tags.iter().map(String::as_str)),
        );

        let problems = records
            .iter()
            .enumerate()
            .map(|(position, record)| Self::vectorize_one(position, record, &vocabulary))
            .collect::<Result<Vec<_>>>()?;

        Ok(Catalog::new(vocabulary, problems))
    }

    fn vectorize_one(
        position: usize,
        record: &RawProblem,
        vocabulary: &Vocabulary,
    ) -> Result<Problem> {
        let contest_id = record.contest_id.ok_or_else(|| {
            Error::MalformedInput(format!("record {} is missing contestId", position))
        })?;
        let index = match record.index.as_deref() {
            Some(index) if !index.is_empty() => index.to_string(),
            _ => {
                return Err(Error::MalformedInput(format!(
                    "record {} (contest {}) is missing index",
                    position, contest_id
                )))
            }
        };

        let mut tags: Vec<String> = Vec::with_capacity(record.tags.len());
        let mut tag_vector = TagVector::zeros(vocabulary.len());
        for tag in &record.tags {
            if tags.contains(tag) {
                continue;
            }
            if let Some(slot) = vocabulary.position(tag) {
                tag_vector.set(slot);
            }
            tags.push(tag.clone());
        }

        Ok(Problem::new(
            contest_id,
            index,
            record.name.clone(),
            tags,
            record.rating,
            tag_vector,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<RawProblem> {
        vec![
            RawProblem::new(1500, "A", "A").with_tags(["dp", "graphs"]).with_rating(1500),
            RawProblem::new(1600, "B", "B").with_tags(["dp"]).with_rating(1600),
            RawProblem::new(1700, "C", "C").with_tags(["geometry"]).with_rating(1550),
        ]
    }

    #[test]
    fn test_vocabulary_is_union_of_tags() {
        let catalog = TagVectorizer::vectorize(&sample_records()).unwrap();
        let vocabulary = catalog.vocabulary();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("dp"));
        assert!(vocabulary.contains("graphs"));
        assert!(vocabulary.contains("geometry"));
    }

    #[test]
    fn test_vector_length_and_ones() {
        let catalog = TagVectorizer::vectorize(&sample_records()).unwrap();
        for problem in catalog.problems() {
            assert_eq!(problem.tag_vector().dim(), catalog.vocabulary().len());
            assert_eq!(problem.tag_vector().ones(), problem.tags().len());
            for tag in problem.tags() {
                let slot = catalog.vocabulary().position(tag).unwrap();
                assert_eq!(problem.tag_vector().get(slot), Some(true));
            }
        }
    }

    #[test]
    fn test_ids_and_urls() {
        let catalog = TagVectorizer::vectorize(&sample_records()).unwrap();
        let problem = catalog.get("1600B").unwrap();
        assert_eq!(problem.contest_id(), 1600);
        assert_eq!(problem.index(), "B");
        assert_eq!(problem.url(), "https://codeforces.com/problemset/problem/1600/B");
        assert!(catalog.get("1600A").is_none());
    }

    #[test]
    fn test_missing_tags_gives_zero_vector() {
        let mut records = sample_records();
        records.push(RawProblem::new(1800, "D", "Untagged").with_rating(1500));
        let catalog = TagVectorizer::vectorize(&records).unwrap();
        let untagged = catalog.get("1800D").unwrap();
        assert_eq!(untagged.tag_vector().dim(), 3);
        assert_eq!(untagged.tag_vector().ones(), 0);
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let records = vec![RawProblem::new(1, "A", "Dup").with_tags(["dp", "dp", "math"])];
        let catalog = TagVectorizer::vectorize(&records).unwrap();
        let problem = catalog.get("1A").unwrap();
        assert_eq!(problem.tags(), &["dp".to_string(), "math".to_string()]);
        assert_eq!(problem.tag_vector().ones(), 2);
    }

    #[test]
    fn test_missing_contest_id_is_malformed() {
        let records = vec![RawProblem {
            contest_id: None,
            index: Some("A".to_string()),
            ..Default::default()
        }];
        let err = TagVectorizer::vectorize(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_missing_index_is_malformed() {
        let records = vec![RawProblem {
            contest_id: Some(1),
            index: None,
            ..Default::default()
        }];
        assert!(matches!(
            TagVectorizer::vectorize(&records),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = sample_records();
        let before = records.clone();
        let _ = TagVectorizer::vectorize(&records).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_empty_input() {
        let catalog = TagVectorizer::vectorize(&[]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.vocabulary().is_empty());
    }
}
