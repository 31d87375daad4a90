//! Fairness Proof
//!
//! Commit-reveal protocol that lets the user audit the computer's move:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  1. key  = 32 random bytes                                   │
//! │  2. tag  = HMAC-SHA256(hex(key), move)   -> shown at start   │
//! │  3. user picks a move                                        │
//! │  4. key, move                            -> shown at end     │
//! │  5. user recomputes tag and compares                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;

// Re-export key types
pub use commitment::{
    commit, verify, verify_reveal, CommitmentError, CommitmentOpening, HmacSha256, Key,
    KeyedDigest, MoveCommitment, Tag, KEY_LEN, TAG_LEN,
};
