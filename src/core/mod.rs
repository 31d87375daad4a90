//! Core game primitives.
//!
//! Everything in this module is pure. Randomness lives in `proof` and `game`.

pub mod moves;
pub mod rules;

// Re-export core types
pub use moves::{MoveSet, MoveSetError, MIN_MOVES};
pub use rules::{Outcome, Rules};
