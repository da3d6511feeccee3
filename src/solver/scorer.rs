//! Scoring of a single candidate clue

use super::expected::expected_correct_guesses;
use super::similarity::cosine_similarity;
use crate::core::{Board, EngineError, Team, normalize_word};
use crate::index::VectorLookup;
use rand::Rng;
use std::cmp::Ordering;

/// Score of one candidate clue
///
/// Compared lexicographically: `primary` first, `tie_break` second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTuple {
    /// Expected (or exact) number of ally words the clue links
    pub primary: f64,
    /// Sum of surviving ally similarities when no danger survives, else 0
    pub tie_break: f64,
}

impl ScoreTuple {
    /// Lowest score of an admissible clue: nothing useful survives the threshold
    pub const MIN: Self = Self::new(0.0, 0.0);

    /// Score of a clue that overlaps a board word; never selectable
    pub const REJECTED: Self = Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    #[must_use]
    pub const fn new(primary: f64, tie_break: f64) -> Self {
        Self { primary, tie_break }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.primary == f64::NEG_INFINITY
    }

    /// Total order: primary, then tie-break
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then(self.tie_break.total_cmp(&other.tie_break))
    }
}

/// Whether `candidate` contains, or is contained in, any board word
///
/// Checks every card, revealed or not; both sides are normalized. Short
/// candidates over-reject: "an" is contained in "banana".
#[must_use]
pub fn overlaps_board_word(candidate: &str, board: &Board) -> bool {
    let candidate = normalize_word(candidate);
    board.cards().iter().any(|card| {
        candidate.contains(card.name.as_str()) || card.name.contains(candidate.as_str())
    })
}

/// Embeddings of the in-play board words, split by ally and dangerous
///
/// Built once per request and shared read-only by every candidate.
#[derive(Debug, Clone)]
pub struct BoardVectors<'a> {
    pub ally: Vec<&'a [f32]>,
    pub dangerous: Vec<&'a [f32]>,
}

impl<'a> BoardVectors<'a> {
    /// Look up every in-play word's vector
    ///
    /// # Errors
    /// Returns `EngineError::MissingEmbedding` for the first in-play word
    /// without a vector.
    pub fn from_board<V: VectorLookup + ?Sized>(
        board: &Board,
        vectors: &'a V,
    ) -> Result<Self, EngineError> {
        let lookup = |name: &str| {
            vectors
                .vector(name)
                .ok_or_else(|| EngineError::MissingEmbedding {
                    word: name.to_string(),
                })
        };

        let ally = board
            .in_play(Team::Ally)
            .map(|card| lookup(&card.name))
            .collect::<Result<Vec<_>, _>>()?;
        let dangerous = board
            .dangerous_in_play()
            .map(|card| lookup(&card.name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ally, dangerous })
    }
}

/// Score a single candidate clue
///
/// 1. Candidates overlapping a board word score [`ScoreTuple::REJECTED`].
/// 2. Similarities to ally and dangerous words at or below `threshold` are dropped.
/// 3. No surviving danger: `(surviving ally count, sum of their similarities)`.
/// 4. No surviving ally: [`ScoreTuple::MIN`].
/// 5. Otherwise the Monte-Carlo expected guess count, with a zero tie-break.
///
/// # Errors
/// Returns `EngineError::MissingEmbedding` if the candidate has no vector.
pub fn score_candidate<V, R>(
    candidate: &str,
    board: &Board,
    board_vectors: &BoardVectors<'_>,
    vectors: &V,
    threshold: f32,
    trials: usize,
    rng: &mut R,
) -> Result<ScoreTuple, EngineError>
where
    V: VectorLookup + ?Sized,
    R: Rng + ?Sized,
{
    if overlaps_board_word(candidate, board) {
        return Ok(ScoreTuple::REJECTED);
    }

    let clue_vector = vectors
        .vector(candidate)
        .ok_or_else(|| EngineError::MissingEmbedding {
            word: candidate.to_string(),
        })?;

    let mut similarities: Vec<f32> = board_vectors
        .ally
        .iter()
        .map(|v| cosine_similarity(clue_vector, v))
        .filter(|&s| s > threshold)
        .collect();
    let ally_count = similarities.len();

    similarities.extend(
        board_vectors
            .dangerous
            .iter()
            .map(|v| cosine_similarity(clue_vector, v))
            .filter(|&s| s > threshold),
    );
    let dangerous_count = similarities.len() - ally_count;

    let score = if dangerous_count == 0 {
        let strength: f64 = similarities.iter().copied().map(f64::from).sum();
        ScoreTuple::new(ally_count as f64, strength)
    } else if ally_count == 0 {
        ScoreTuple::MIN
    } else {
        let expected = expected_correct_guesses(&similarities, ally_count, trials, rng);
        ScoreTuple::new(expected, 0.0)
    };

    Ok(score)
}
