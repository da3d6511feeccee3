//! Simulated opponent turn
//!
//! The opponent keeps revealing cards, one weighted category draw at a
//! time, until it hits an ally card, chooses to stop, or runs out of cards.
//! Every opponent or neutral reveal damps the weight of the next opponent
//! reveal, which keeps long lucky streaks rare.

use crate::core::{Board, CardId, Difficulty, DifficultyProfile, EngineError, GameSnapshot, Team};
use crate::solver::WeightedSampler;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Multiplier applied to the opponent weight after each non-terminal reveal
pub const DECAY_FACTOR: f64 = 0.35;

/// Why a simulated turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnEnd {
    /// An ally card was revealed; the turn passes
    AllyRevealed,
    /// The opponent chose to stop guessing
    Stopped,
    /// No category had positive weight left
    Exhausted,
}

/// Cards revealed by one simulated turn, in reveal order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub sequence: Vec<CardId>,
    pub ended_by: TurnEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealClass {
    Opponent,
    Ally,
    Neutral,
    Stop,
}

impl RevealClass {
    const ALL: [Self; 4] = [Self::Opponent, Self::Ally, Self::Neutral, Self::Stop];
}

/// Produces reveal sequences for the automated opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnSimulator {
    profile: DifficultyProfile,
}

impl TurnSimulator {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self::with_profile(difficulty.profile())
    }

    #[must_use]
    pub const fn with_profile(profile: DifficultyProfile) -> Self {
        Self { profile }
    }

    /// Simulator for the difficulty a snapshot names
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDifficulty` if the snapshot has no difficulty.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, EngineError> {
        snapshot.require_difficulty().map(Self::new)
    }

    /// Simulate one opponent turn on `board`
    ///
    /// Only in-play ally, opponent and neutral cards can be revealed; the
    /// forbidden card never is. The first draw cannot be a stop, so the
    /// sequence is non-empty whenever some revealable category has weight.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::{Board, Card, Difficulty, Team};
    /// use codenames_solver::turn::{TurnEnd, TurnSimulator};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let board = Board::new(vec![
    ///     Card::new(1, "bank", Team::Ally),
    ///     Card::new(2, "tree", Team::Opponent),
    /// ]);
    /// let result = TurnSimulator::new(Difficulty::Hard)
    ///     .simulate(&board, &mut StdRng::seed_from_u64(3));
    ///
    /// // Hard never reveals an ally card, so the opponent card goes first
    /// assert_eq!(result.sequence, vec![2]);
    /// assert_ne!(result.ended_by, TurnEnd::AllyRevealed);
    /// ```
    pub fn simulate<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> TurnResult {
        let ids = |team| board.in_play(team).map(|card| card.id).collect::<Vec<_>>();
        let mut opponent = ids(Team::Opponent);
        let mut ally = ids(Team::Ally);
        let mut neutral = ids(Team::Neutral);

        let mut classes = WeightedSampler::new(RevealClass::ALL.map(|class| (class, 0.0)));
        let mut decay = 1.0;
        let mut sequence = Vec::new();

        let ended_by = loop {
            if opponent.is_empty() && ally.is_empty() && neutral.is_empty() {
                break TurnEnd::Exhausted;
            }

            let weights = [
                available(&opponent, self.profile.w_opponent * decay),
                available(&ally, self.profile.w_ally),
                available(&neutral, self.profile.w_neutral),
                if sequence.is_empty() { 0.0 } else { self.profile.w_stop },
            ];
            for (index, weight) in weights.into_iter().enumerate() {
                classes.set_weight(index, weight);
            }

            let Some(index) = classes.draw(rng) else {
                break TurnEnd::Exhausted;
            };

            match *classes.item(index) {
                RevealClass::Opponent => {
                    let id = pop_uniform(&mut opponent, rng);
                    debug!(card = id, decay, "opponent card revealed");
                    sequence.push(id);
                    decay *= DECAY_FACTOR;
                }
                RevealClass::Neutral => {
                    let id = pop_uniform(&mut neutral, rng);
                    debug!(card = id, decay, "neutral card revealed");
                    sequence.push(id);
                    decay *= DECAY_FACTOR;
                }
                RevealClass::Ally => {
                    let id = pop_uniform(&mut ally, rng);
                    debug!(card = id, "ally card revealed");
                    sequence.push(id);
                    break TurnEnd::AllyRevealed;
                }
                RevealClass::Stop => break TurnEnd::Stopped,
            }
        };

        TurnResult { sequence, ended_by }
    }
}

#[inline]
fn available(pool: &[CardId], weight: f64) -> f64 {
    if pool.is_empty() { 0.0 } else { weight }
}

fn pop_uniform<R: Rng + ?Sized>(pool: &mut Vec<CardId>, rng: &mut R) -> CardId {
    let index = rng.random_range(0..pool.len());
    pool.swap_remove(index)
}
