//! Codenames decision engine
//!
//! Two independent engines over a shared board model:
//! - [`solver`]: picks the clue that links the most ally words while
//!   steering away from opponent, neutral and forbidden words.
//! - [`turn`]: simulates the cards an automated opponent reveals on its turn.
//!
//! Candidate clues and word embeddings come from offline artifacts loaded
//! through [`index`].

pub mod core;
pub mod index;
pub mod logging;
pub mod solver;
pub mod turn;
