//! Clue engine configuration

use crate::core::EngineError;

/// Tuning knobs of the clue engine
///
/// `trials` trades latency for estimate quality: the Monte-Carlo standard
/// error shrinks with `1 / sqrt(trials)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClueConfig {
    /// Similarities at or below this value are ignored (default: 0.4)
    pub threshold: f32,

    /// Monte-Carlo attempts per contested candidate (default: 10,000)
    pub trials: usize,
}

impl ClueConfig {
    #[must_use]
    pub const fn new(threshold: f32, trials: usize) -> Self {
        Self { threshold, trials }
    }

    /// Check the configuration before any scoring runs
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` if the threshold is outside
    /// `[0, 1)` or `trials` is zero. A negative threshold would let
    /// negative similarities reach the sampler as weights.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(EngineError::InvalidConfig {
                field: "threshold",
                message: format!("must be in [0, 1), got {}", self.threshold),
            });
        }

        if self.trials == 0 {
            return Err(EngineError::InvalidConfig {
                field: "trials",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ClueConfig {
    fn default() -> Self {
        Self::new(
            0.4,    // threshold
            10_000, // trials
        )
    }
}
