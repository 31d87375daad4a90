//! Move Relation
//!
//! Decides win/lose/draw between two moves of an odd, cyclic move set.
//! Pure: no randomness, no I/O.
//!
//! Each move beats the `N / 2` moves that follow it around the cycle and
//! loses to the `N / 2` moves that precede it. For `N = 3` every move beats
//! the next one and loses to the previous one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moves::MoveSet;

/// Result of a comparison, from the subject's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Subject beats the other move.
    Win,
    /// Subject loses to the other move.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// The same result seen from the other side.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Label used in tables and result lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome relation over a validated move set.
#[derive(Clone, Debug)]
pub struct Rules {
    moves: MoveSet,
}

impl Rules {
    /// Wrap a validated move set.
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    /// The underlying moves.
    #[inline]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Compare two moves by name, `subject` first.
    ///
    /// # Panics
    /// Panics if either name is not part of the move set.
    pub fn compare(&self, subject: &str, other: &str) -> Outcome {
        let i = self.position(subject);
        let j = self.position(other);
        self.compare_index(i, j)
    }

    /// Compare two moves by 0-based index, `subject` first.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn compare_index(&self, subject: usize, other: usize) -> Outcome {
        let n = self.moves.len();
        assert!(
            subject < n && other < n,
            "move index out of range: ({}, {}) with {} moves", subject, other, n
        );

        if subject == other {
            return Outcome::Draw;
        }

        let distance = (other + n - subject) % n;
        if distance <= n / 2 {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    fn position(&self, name: &str) -> usize {
        match self.moves.index_of(name) {
            Some(index) => index,
            None => panic!("move {:?} is not part of the move set", name),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
