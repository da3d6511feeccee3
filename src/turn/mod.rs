//! Opponent turn simulation
//!
//! A stochastic model of the automated opponent: given a board and a
//! difficulty profile, produce the ordered list of cards it reveals.

mod simulator;
mod stats;

pub use simulator::{DECAY_FACTOR, TurnEnd, TurnResult, TurnSimulator};
pub use stats::TurnStats;
