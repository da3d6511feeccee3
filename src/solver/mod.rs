//! Clue engine
//!
//! Enumerates candidate clues, scores each against the board with cosine
//! similarity and a Monte-Carlo guesser model, and picks the best one.

mod config;
mod expected;
mod sampler;
mod scorer;
mod selector;
mod similarity;
mod targets;

pub use config::ClueConfig;
pub use expected::expected_correct_guesses;
pub use sampler::WeightedSampler;
pub use scorer::{BoardVectors, ScoreTuple, overlaps_board_word, score_candidate};
pub use selector::{ClueResult, ClueSelector, candidate_universe};
pub use similarity::cosine_similarity;
pub use targets::resolve_targets;
