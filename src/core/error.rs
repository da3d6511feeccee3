//! Error types surfaced by the clue engine and turn simulator

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single clue-selection or turn-simulation request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A board or candidate word has no vector in the embedding store
    #[error("no embedding vector for word '{word}'")]
    MissingEmbedding { word: String },

    /// An in-play ally word has no entry in the candidate index
    #[error("no candidate clue set for board word '{word}'")]
    MissingCandidates { word: String },

    /// Every admissible clue has been used or rejected
    #[error("no clue available: candidate universe is empty")]
    EmptyCandidateUniverse,

    /// Difficulty name outside easy/medium/hard
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    /// Clue configuration failed validation
    #[error("invalid configuration: {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

/// Failures while loading the candidate index or embedding artifacts
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse candidate index {path:?}: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("vector for '{word}' has {found} components, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("vector for '{word}' is empty")]
    EmptyVector { word: String },
}
