//! Move Set Validation
//!
//! The ordered, immutable list of move names a session is played with.
//! Validation happens once, before any randomness is drawn.

use std::collections::BTreeSet;
use std::ops::Index;

use serde::Serialize;
use thiserror::Error;

/// Smallest playable move set.
pub const MIN_MOVES: usize = 3;

/// Reasons a move list cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than [`MIN_MOVES`] names supplied.
    #[error("at least {} moves are required, got {count}", MIN_MOVES)]
    TooFew {
        /// Number of names supplied.
        count: usize,
    },
    /// The same name appears more than once.
    #[error("moves must be unique, \"{name}\" appears more than once")]
    Duplicate {
        /// First repeated name.
        name: String,
    },
    /// An even number of names was supplied.
    #[error("the number of moves must be odd, got {count}")]
    EvenCount {
        /// Number of names supplied.
        count: usize,
    },
}

/// Ordered list of distinct move names, odd length, at least three.
///
/// Names compare case-sensitively. Once built the set never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate a list of names.
    ///
    /// Checks run in order: count, uniqueness, parity.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew { count: names.len() });
        }

        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate { name: name.clone() });
            }
        }

        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount { count: names.len() });
        }

        Ok(Self { names })
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 0-based position of a move, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Move name at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterate names in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Length of the longest name in characters.
    pub fn widest(&self) -> usize {
        self.names.iter().map(|n| n.chars().count()).max().unwrap_or(0)
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

// =============================================================================
// TESTS
// =============================================================================
