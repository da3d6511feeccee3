//! Artifact loading utilities
//!
//! Loads the embedding store from GloVe-style text and the candidate
//! index from JSON.

use super::{CandidateIndex, EmbeddingStore};
use crate::core::IndexError;
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load embeddings from a file of `word f1 f2 ... fd` records
///
/// # Errors
///
/// Returns an error if the file cannot be read, a component is not a
/// number, or a record's dimension differs from the first record's.
///
/// # Examples
/// ```no_run
/// use codenames_solver::index::loader::load_embeddings;
///
/// let store = load_embeddings("data/vectors.txt").unwrap();
/// println!("Loaded {} vectors", store.len());
/// ```
pub fn load_embeddings<P: AsRef<Path>>(path: P) -> Result<EmbeddingStore, IndexError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| IndexError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let store = parse_embeddings(&content)?;
    debug!(
        path = %path.display(),
        vectors = store.len(),
        dimension = store.dimension().unwrap_or(0),
        "loaded embeddings"
    );
    Ok(store)
}

/// Parse GloVe-style text into an embedding store
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns `IndexError::Malformed` for a record without components or with
/// an unparsable component, and `IndexError::DimensionMismatch` for a
/// record whose length differs from the first.
///
/// # Examples
/// ```
/// use codenames_solver::index::loader::parse_embeddings;
/// use codenames_solver::index::VectorLookup;
///
/// let store = parse_embeddings("bank 0.1 0.2\nriver 0.3 0.4\n").unwrap();
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.vector("river"), Some(&[0.3, 0.4][..]));
/// ```
pub fn parse_embeddings(content: &str) -> Result<EmbeddingStore, IndexError> {
    let mut store = EmbeddingStore::new();

    for (line_index, line) in content.lines().enumerate() {
        let line_number = line_index + 1;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };

        let vector = fields
            .map(|field| {
                field.parse::<f32>().map_err(|err| IndexError::Malformed {
                    line: line_number,
                    message: format!("bad component '{field}' for '{word}': {err}"),
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;

        if vector.is_empty() {
            return Err(IndexError::Malformed {
                line: line_number,
                message: format!("'{word}' has no vector components"),
            });
        }

        store.insert(word, vector)?;
    }

    Ok(store)
}

/// Load a candidate index from a JSON object of `word -> [clue, ...]`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a JSON object of
/// string arrays.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<CandidateIndex, IndexError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IndexError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let raw: FxHashMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| IndexError::Json {
            source,
            path: path.to_path_buf(),
        })?;

    let index: CandidateIndex = raw.into_iter().collect();
    debug!(path = %path.display(), words = index.len(), "loaded candidate index");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{CandidateLookup, VectorLookup};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_embeddings_basic() {
        let store = parse_embeddings("bank 1 0 0\nriver 0 1 0\nmoney 0.5 0.5 0\n").unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.dimension(), Some(3));
        assert_eq!(store.vector("money"), Some(&[0.5, 0.5, 0.0][..]));
    }

    #[test]
    fn parse_embeddings_skips_blank_lines() {
        let store = parse_embeddings("\nbank 1 2\n   \n\nriver 3 4\n").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn parse_embeddings_normalizes_words() {
        let store = parse_embeddings("BANK 1 2\n").unwrap();
        assert!(store.vector("bank").is_some());
    }

    #[test]
    fn parse_embeddings_bad_component_reports_line() {
        let err = parse_embeddings("bank 1 2\nriver 3 x\n").unwrap_err();
        assert!(matches!(err, IndexError::Malformed { line: 2, .. }));
        assert!(err.to_string().contains("river"));
    }

    #[test]
    fn parse_embeddings_word_without_vector_fails() {
        let err = parse_embeddings("bank 1 2\nriver\n").unwrap_err();
        assert!(matches!(err, IndexError::Malformed { line: 2, .. }));
    }

    #[test]
    fn parse_embeddings_dimension_mismatch_fails() {
        let err = parse_embeddings("bank 1 2\nriver 3 4 5\n").unwrap_err();
        assert!(matches!(err, IndexError::DimensionMismatch { .. }));
    }

    #[test]
    fn load_embeddings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "bank 0.1 0.2").unwrap();
        writeln!(temp_file, "river 0.3 0.4").unwrap();
        temp_file.flush().unwrap();

        let store = load_embeddings(temp_file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimension(), Some(2));
    }

    #[test]
    fn load_embeddings_nonexistent_fails() {
        let result = load_embeddings("/path/that/does/not/exist.txt");
        assert!(matches!(result, Err(IndexError::Io { .. })));
    }

    #[test]
    fn load_candidates_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"Bank": ["money", "Finance", "money"], "tree": ["leaf"]}}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let index = load_candidates(temp_file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.candidates("bank").unwrap(),
            &["finance".to_string(), "money".to_string()]
        );
    }

    #[test]
    fn load_candidates_rejects_non_object() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"["bank", "tree"]"#).unwrap();
        temp_file.flush().unwrap();

        assert!(matches!(
            load_candidates(temp_file.path()),
            Err(IndexError::Json { .. })
        ));
    }
}
