//! In-memory lookup stores backed by `FxHashMap`

use super::{CandidateLookup, VectorLookup};
use crate::core::{IndexError, normalize_word};
use rustc_hash::FxHashMap;

/// Map from board word to its sorted, deduplicated candidate clues
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    entries: FxHashMap<String, Vec<String>>,
}

impl CandidateIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) the candidate list for a board word
    ///
    /// Both the key and the clues are normalized.
    pub fn insert<I, S>(&mut self, word: &str, clues: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.entries.entry(normalize_word(word)).or_default();
        entry.extend(clues.into_iter().map(|clue| normalize_word(clue.as_ref())));
        entry.retain(|clue| !clue.is_empty());
        entry.sort_unstable();
        entry.dedup();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Vec<String>)> for CandidateIndex {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (word, clues) in iter {
            index.insert(word.as_ref(), clues);
        }
        index
    }
}

impl CandidateLookup for CandidateIndex {
    fn candidates(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }
}

/// Fixed-dimension word vectors
///
/// The first inserted vector fixes the dimension; every later vector must match.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
    dimension: Option<usize>,
    vectors: FxHashMap<String, Box<[f32]>>,
}

impl EmbeddingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vector under its normalized word
    ///
    /// # Errors
    /// Returns `IndexError::EmptyVector` for a zero-length vector and
    /// `IndexError::DimensionMismatch` if its length differs from the store's.
    pub fn insert(&mut self, word: &str, vector: Vec<f32>) -> Result<(), IndexError> {
        let word = normalize_word(word);
        if vector.is_empty() {
            return Err(IndexError::EmptyVector { word });
        }

        match self.dimension {
            Some(expected) if expected != vector.len() => {
                return Err(IndexError::DimensionMismatch {
                    word,
                    expected,
                    found: vector.len(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(vector.len()),
        }

        self.vectors.insert(word, vector.into_boxed_slice());
        Ok(())
    }

    /// Build a store from `(word, vector)` pairs
    ///
    /// # Errors
    /// Fails on the first vector rejected by [`EmbeddingStore::insert`].
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::index::{EmbeddingStore, VectorLookup};
    ///
    /// let store = EmbeddingStore::from_pairs([
    ///     ("bank", vec![1.0, 0.0]),
    ///     ("river", vec![0.0, 1.0]),
    /// ]).unwrap();
    /// assert_eq!(store.dimension(), Some(2));
    /// assert_eq!(store.vector("bank"), Some(&[1.0, 0.0][..]));
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (word, vector) in pairs {
            store.insert(word.as_ref(), vector)?;
        }
        Ok(store)
    }

    /// Vector length, or `None` while the store is empty
    #[must_use]
    pub const fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl VectorLookup for EmbeddingStore {
    fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(AsRef::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_insert_normalizes_and_dedups() {
        let mut index = CandidateIndex::new();
        index.insert("Bank", ["Money", "river", "money", " "]);
        index.insert("bank", ["finance"]);

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.candidates("bank").unwrap(),
            &["finance".to_string(), "money".to_string(), "river".to_string()]
        );
        assert!(index.candidates("Bank").is_none());
    }

    #[test]
    fn candidate_index_from_iter() {
        let index: CandidateIndex = [
            ("bank", vec!["money".to_string()]),
            ("tree", vec!["leaf".to_string()]),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert!(index.candidates("tree").is_some());
        assert!(index.candidates("river").is_none());
    }

    #[test]
    fn embedding_dimension_is_fixed_by_first_vector() {
        let mut store = EmbeddingStore::new();
        assert_eq!(store.dimension(), None);

        store.insert("bank", vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(store.dimension(), Some(3));

        let err = store.insert("river", vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            IndexError::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn embedding_rejects_empty_vector() {
        let mut store = EmbeddingStore::new();
        assert!(matches!(
            store.insert("bank", vec![]),
            Err(IndexError::EmptyVector { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn embedding_keys_are_normalized() {
        let store = EmbeddingStore::from_pairs([("Ice Cream", vec![0.5, 0.5])]).unwrap();
        assert!(store.vector("icecream").is_some());
        assert!(store.vector("ice cream").is_none());
    }
}
