//! Candidate-clue index and embedding store
//!
//! Both artifacts are produced offline and treated as read-only lookups.
//! The engines only depend on the two traits below, so any backing store
//! (in-memory maps, memory-mapped files) can be plugged in.

pub mod loader;
mod store;

pub use store::{CandidateIndex, EmbeddingStore};

/// Word → admissible clue words
pub trait CandidateLookup: Sync {
    /// Candidate clues for a normalized board word, or `None` if the word is unknown
    fn candidates(&self, word: &str) -> Option<&[String]>;
}

/// Word → embedding vector
pub trait VectorLookup: Sync {
    /// Embedding for a normalized word, or `None` if the word is unknown
    fn vector(&self, word: &str) -> Option<&[f32]>;
}
