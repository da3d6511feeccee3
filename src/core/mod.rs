//! Core game types
//!
//! Cards, boards, difficulty profiles and the error types shared by the
//! clue engine and the turn simulator.

mod board;
mod card;
mod difficulty;
mod error;

pub use board::{BOARD_SIZE, Board, GameSnapshot, STANDARD_COMPOSITION};
pub use card::{Card, CardId, Team, normalize_word};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{EngineError, IndexError};

#[cfg(test)]
pub(crate) use board::tests::standard_board;
