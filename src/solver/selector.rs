//! Best-clue selection over the whole candidate universe

use super::config::ClueConfig;
use super::scorer::{BoardVectors, ScoreTuple, score_candidate};
use super::targets::resolve_targets;
use crate::core::{Board, CardId, EngineError, Team, normalize_word};
use crate::index::{CandidateLookup, VectorLookup};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Outcome of one clue request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueResult {
    pub clue: String,
    /// Number of ally words the clue claims to link
    pub score: usize,
    /// Ally card ids the clue is aimed at, strongest link first
    pub targets: Vec<CardId>,
}

/// Admissible clue words for the current board
///
/// The union of the candidate sets of every in-play ally word, minus the
/// clues already given and minus any word on the board. Sorted, so scoring
/// order (and therefore seeded output) does not depend on hashing.
///
/// # Errors
/// Returns `EngineError::MissingCandidates` if an in-play ally word has no
/// candidate set.
pub fn candidate_universe<C: CandidateLookup + ?Sized>(
    board: &Board,
    invalid_guesses: &[String],
    candidates: &C,
) -> Result<Vec<String>, EngineError> {
    let used: FxHashSet<String> = invalid_guesses.iter().map(|g| normalize_word(g)).collect();

    let mut universe = BTreeSet::new();
    for card in board.in_play(Team::Ally) {
        let clues = candidates
            .candidates(&card.name)
            .ok_or_else(|| EngineError::MissingCandidates {
                word: card.name.clone(),
            })?;
        universe.extend(
            clues
                .iter()
                .filter(|clue| !used.contains(clue.as_str()) && !board.contains_word(clue)),
        );
    }

    Ok(universe.into_iter().cloned().collect())
}

/// Selects the clue that best links the in-play ally words
pub struct ClueSelector<'a, C: ?Sized, V: ?Sized> {
    candidates: &'a C,
    vectors: &'a V,
    config: ClueConfig,
}

impl<'a, C, V> ClueSelector<'a, C, V>
where
    C: CandidateLookup + ?Sized,
    V: VectorLookup + ?Sized,
{
    /// # Errors
    /// Returns `EngineError::InvalidConfig` if `config` fails validation.
    pub fn new(candidates: &'a C, vectors: &'a V, config: ClueConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            candidates,
            vectors,
            config,
        })
    }

    /// Score every admissible candidate and return them in universe order
    ///
    /// Candidates are scored in parallel. Each gets its own generator seeded
    /// from one base seed drawn from `rng` plus the candidate's position, so
    /// the output only depends on the seed, never on thread scheduling.
    ///
    /// # Errors
    /// Propagates missing candidate sets and missing embeddings.
    pub fn score_all<R: Rng + ?Sized>(
        &self,
        board: &Board,
        invalid_guesses: &[String],
        rng: &mut R,
    ) -> Result<Vec<(String, ScoreTuple)>, EngineError> {
        let universe = candidate_universe(board, invalid_guesses, self.candidates)?;
        let board_vectors = BoardVectors::from_board(board, self.vectors)?;
        debug!(
            candidates = universe.len(),
            ally = board_vectors.ally.len(),
            dangerous = board_vectors.dangerous.len(),
            "scoring candidate universe"
        );

        let base_seed: u64 = rng.random();
        let ClueConfig { threshold, trials } = self.config;

        universe
            .into_par_iter()
            .enumerate()
            .map(|(position, candidate)| {
                let mut candidate_rng =
                    StdRng::seed_from_u64(base_seed.wrapping_add(position as u64));
                let score = score_candidate(
                    &candidate,
                    board,
                    &board_vectors,
                    self.vectors,
                    threshold,
                    trials,
                    &mut candidate_rng,
                )?;
                trace!(
                    clue = %candidate,
                    primary = score.primary,
                    tie_break = score.tie_break,
                    "scored"
                );
                Ok((candidate, score))
            })
            .collect()
    }

    /// Pick the best clue for the board
    ///
    /// The winner has the greatest [`ScoreTuple`]; exact ties go to the
    /// alphabetically first clue. The integer score is the floor of the
    /// winning primary score, capped at the number of in-play ally words.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateUniverse` when no admissible,
    /// non-overlapping candidate remains, and propagates lookup failures.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::{Board, Card, Team};
    /// use codenames_solver::index::{CandidateIndex, EmbeddingStore};
    /// use codenames_solver::solver::{ClueConfig, ClueSelector};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let board = Board::new(vec![
    ///     Card::new(1, "bank", Team::Ally),
    ///     Card::new(2, "tree", Team::Opponent),
    /// ]);
    /// let mut index = CandidateIndex::new();
    /// index.insert("bank", ["money", "leaf"]);
    /// let store = EmbeddingStore::from_pairs([
    ///     ("bank", vec![1.0, 0.0]),
    ///     ("tree", vec![0.0, 1.0]),
    ///     ("money", vec![0.9, 0.1]),
    ///     ("leaf", vec![0.1, 0.9]),
    /// ]).unwrap();
    ///
    /// let selector = ClueSelector::new(&index, &store, ClueConfig::default()).unwrap();
    /// let result = selector.select(&board, &[], &mut StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(result.clue, "money");
    /// assert_eq!(result.score, 1);
    /// assert_eq!(result.targets, vec![1]);
    /// ```
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &Board,
        invalid_guesses: &[String],
        rng: &mut R,
    ) -> Result<ClueResult, EngineError> {
        let scored = self.score_all(board, invalid_guesses, rng)?;

        let (clue, best) = scored
            .into_iter()
            .filter(|(_, score)| !score.is_rejected())
            .max_by(|(w1, s1), (w2, s2)| s1.total_cmp(s2).then_with(|| w2.cmp(w1)))
            .ok_or(EngineError::EmptyCandidateUniverse)?;

        let ally_in_play = board.in_play(Team::Ally).count();
        let score = (best.primary.floor().max(0.0) as usize).min(ally_in_play);
        let targets = resolve_targets(&clue, score, board, self.vectors)?;

        debug!(
            clue = %clue,
            primary = best.primary,
            tie_break = best.tie_break,
            score,
            ?targets,
            "selected clue"
        );

        Ok(ClueResult {
            clue,
            score,
            targets,
        })
    }
}
