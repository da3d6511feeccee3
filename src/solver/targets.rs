//! Target resolution for a chosen clue

use super::similarity::cosine_similarity;
use crate::core::{Board, CardId, EngineError, Team};
use crate::index::VectorLookup;

/// Ally cards a clue is aimed at
///
/// Ranks the in-play ally cards by similarity to `clue`, strongest first,
/// and returns the ids of the top `score`. The sort is stable, so equal
/// similarities keep board order and repeated calls agree.
///
/// # Errors
/// Returns `EngineError::MissingEmbedding` if the clue or an in-play ally
/// word has no vector.
pub fn resolve_targets<V: VectorLookup + ?Sized>(
    clue: &str,
    score: usize,
    board: &Board,
    vectors: &V,
) -> Result<Vec<CardId>, EngineError> {
    if score == 0 {
        return Ok(Vec::new());
    }

    let missing = |word: &str| EngineError::MissingEmbedding {
        word: word.to_string(),
    };
    let clue_vector = vectors.vector(clue).ok_or_else(|| missing(clue))?;

    let mut ranked = board
        .in_play(Team::Ally)
        .map(|card| {
            let vector = vectors.vector(&card.name).ok_or_else(|| missing(&card.name))?;
            Ok((card.id, cosine_similarity(clue_vector, vector)))
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    ranked.sort_by(|(_, s1), (_, s2)| s2.total_cmp(s1));
    Ok(ranked.into_iter().take(score).map(|(id, _)| id).collect())
}
