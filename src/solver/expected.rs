//! Monte-Carlo estimate of how many ally words a guesser finds
//!
//! A simulated guesser picks words one at a time, each with probability
//! proportional to its similarity to the clue, and stops at the first
//! non-ally pick. The expected score is the mean number of ally picks.

use super::sampler::WeightedSampler;
use rand::Rng;

/// Estimate the expected number of correct guesses for one clue
///
/// `similarities` holds the ally similarities first, then the dangerous
/// ones; `ally_count` says where the split is. Every attempt draws without
/// replacement until a dangerous word comes up or the pool runs dry, so an
/// attempt with no dangerous words ends at the full ally count.
///
/// Similarities must be non-negative and must not all be zero; the caller
/// thresholds them before getting here.
///
/// Returns `0.0` when `ally_count` or `trials` is zero.
///
/// # Examples
/// ```
/// use codenames_solver::solver::expected_correct_guesses;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let score = expected_correct_guesses(&[0.9, 0.9, 0.05], 2, 5_000, &mut rng);
/// assert!(score > 1.8 && score <= 2.0);
/// ```
pub fn expected_correct_guesses<R: Rng + ?Sized>(
    similarities: &[f32],
    ally_count: usize,
    trials: usize,
    rng: &mut R,
) -> f64 {
    if ally_count == 0 || trials == 0 {
        return 0.0;
    }
    debug_assert!(ally_count <= similarities.len());

    let mut pool = WeightedSampler::new(
        similarities
            .iter()
            .enumerate()
            .map(|(index, &similarity)| (index < ally_count, f64::from(similarity))),
    );

    let mut total_score = 0usize;
    for _ in 0..trials {
        pool.reset();
        while let Some((_, &is_ally)) = pool.take(rng) {
            if !is_ally {
                break;
            }
            total_score += 1;
        }
    }

    total_score as f64 / trials as f64
}
