//! # Fair RPS
//!
//! Rock-paper-scissors generalized to any odd number of moves, played
//! against a computer that commits to its move before the user chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure game primitives                      │
//! │  ├── moves.rs    - Validated move set                        │
//! │  └── rules.rs    - Win/lose/draw relation                    │
//! │                                                              │
//! │  proof/          - Fairness                                  │
//! │  └── commitment.rs - HMAC commit-reveal                      │
//! │                                                              │
//! │  game/           - Game flow                                 │
//! │  ├── session.rs  - Round state machine                       │
//! │  └── table.rs    - Outcome grid for help                     │
//! │                                                              │
//! │  console.rs      - Line-based terminal adapter               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The tag `HMAC-SHA256(key, computer_move)` is printed before the user
//! picks a move. The key is printed only after the round resolves, so the
//! user can recompute the tag and confirm the computer's move was fixed in
//! advance. Exiting early reveals nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod console;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::core::moves::{MoveSet, MoveSetError};
pub use crate::core::rules::{Outcome, Rules};
pub use crate::game::session::{GameSession, Reveal, RoundResult, SessionState, Step};
pub use crate::game::table::OutcomeTable;
pub use crate::proof::commitment::{HmacSha256, Key, KeyedDigest, MoveCommitment, Tag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
