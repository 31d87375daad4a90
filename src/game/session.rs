//! Game Session
//!
//! A single round against the computer, modeled as a state machine:
//!
//! ```text
//! AwaitingChoice ──"0"──────> Exited
//!       │   ▲
//!       │   └──"?" / invalid
//!       └──"1".."N"─────────> Resolved
//! ```
//!
//! The computer's move and commitment are fixed when the session starts and
//! never change afterwards, however many times help is shown.

use std::cell::OnceCell;

use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::moves::MoveSet;
use crate::core::rules::{Outcome, Rules};
use crate::game::table::OutcomeTable;
use crate::proof::commitment::{commit, CommitmentOpening, Key, KeyedDigest, MoveCommitment, Tag};

/// Input that quits without playing.
pub const EXIT_COMMAND: &str = "0";

/// Input that shows the outcome grid.
pub const HELP_COMMAND: &str = "?";

// =============================================================================
// STATE AND COMMANDS
// =============================================================================

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the user's command.
    AwaitingChoice,
    /// Round played. Terminal.
    Resolved(RoundResult),
    /// User quit. Terminal.
    Exited,
}

impl SessionState {
    /// No further input is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::AwaitingChoice)
    }
}

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit.
    Exit,
    /// Show the outcome grid.
    Help,
    /// Play the move at this 0-based index.
    Choose(usize),
    /// Anything else, kept verbatim for the error message.
    Invalid(String),
}

impl Command {
    /// Parse one line against a set of `move_count` moves.
    ///
    /// Accepts `0`, `?` or a 1-based move number, ignoring surrounding
    /// whitespace. Move numbers are plain ASCII digits with no sign and no
    /// leading zero.
    pub fn parse(line: &str, move_count: usize) -> Self {
        let text = line.trim();
        match text {
            EXIT_COMMAND => Self::Exit,
            HELP_COMMAND => Self::Help,
            _ if is_move_number(text) => match text.parse::<usize>() {
                Ok(k) if (1..=move_count).contains(&k) => Self::Choose(k - 1),
                _ => Self::Invalid(text.to_owned()),
            },
            _ => Self::Invalid(text.to_owned()),
        }
    }
}

fn is_move_number(text: &str) -> bool {
    !text.starts_with('0') && !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Result of a played round. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// User's move.
    pub user_move: usize,
    /// Computer's move.
    pub computer_move: usize,
    /// Outcome for the user.
    pub outcome: Outcome,
}

/// What a transition asks the caller to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show the outcome grid, then prompt again.
    Help,
    /// Say goodbye. Nothing is revealed.
    Exit,
    /// Input was rejected, prompt again.
    Invalid(String),
    /// Round played; the key may now be revealed.
    Resolved(RoundResult),
    /// Session already over; input ignored.
    Finished,
}

/// Pure transition function.
///
/// `computer_move` is the committed index; it is only read when a move is
/// chosen.
pub fn transition(
    state: SessionState,
    command: Command,
    rules: &Rules,
    computer_move: usize,
) -> (SessionState, Step) {
    if state.is_terminal() {
        return (state, Step::Finished);
    }

    match command {
        Command::Exit => (SessionState::Exited, Step::Exit),
        Command::Help => (state, Step::Help),
        Command::Invalid(text) => (state, Step::Invalid(text)),
        Command::Choose(user_move) if user_move < rules.moves().len() => {
            let result = RoundResult {
                user_move,
                computer_move,
                outcome: rules.compare_index(user_move, computer_move),
            };
            (SessionState::Resolved(result), Step::Resolved(result))
        }
        Command::Choose(index) => (state, Step::Invalid((index + 1).to_string())),
    }
}

// =============================================================================
// REVEAL
// =============================================================================

/// Everything a user needs to audit a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// Move the computer committed to.
    pub computer_move: String,
    /// Secret key, now public.
    pub key: Key,
    /// Tag shown before the user moved.
    pub tag: Tag,
}

// =============================================================================
// SESSION
// =============================================================================

/// One round against the computer.
#[derive(Debug)]
pub struct GameSession {
    rules: Rules,
    computer_move: usize,
    opening: CommitmentOpening,
    commitment: MoveCommitment,
    state: SessionState,
    table: OnceCell<String>,
}

impl GameSession {
    /// Pick the computer's move uniformly at random and commit to it.
    pub fn start<R, D>(moves: MoveSet, rng: &mut R, digest: &D) -> Self
    where
        R: RngCore + CryptoRng,
        D: KeyedDigest + ?Sized,
    {
        let computer_move = rng.gen_range(0..moves.len());
        let (opening, commitment) = commit(rng, digest, &moves[computer_move]);

        debug!(moves = moves.len(), tag = %commitment.tag, "session started");

        Self {
            rules: Rules::new(moves),
            computer_move,
            opening,
            commitment,
            state: SessionState::AwaitingChoice,
            table: OnceCell::new(),
        }
    }

    /// Rules in play.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Moves in play.
    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    /// Published commitment.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Numbered move list followed by the exit and help options.
    pub fn menu(&self) -> String {
        let mut menu = String::from("Available moves:\n");
        for (i, name) in self.moves().iter().enumerate() {
            menu.push_str(&format!("{} - {}\n", i + 1, name));
        }
        menu.push_str(&format!("{} - exit\n", EXIT_COMMAND));
        menu.push_str(&format!("{} - help\n", HELP_COMMAND));
        menu
    }

    /// Outcome grid, rendered on first use.
    pub fn help_table(&self) -> &str {
        self.table.get_or_init(|| OutcomeTable::new(&self.rules).render())
    }

    /// Feed one line of user input.
    pub fn handle(&mut self, line: &str) -> Step {
        let command = Command::parse(line, self.moves().len());
        let (next, step) = transition(self.state, command, &self.rules, self.computer_move);
        self.state = next;

        match &step {
            Step::Help => debug!("help requested"),
            Step::Exit => debug!("user exited"),
            Step::Invalid(text) => debug!(input = %text, "invalid input"),
            Step::Resolved(result) => debug!(outcome = %result.outcome, "round resolved"),
            Step::Finished => debug!("input after session end ignored"),
        }

        step
    }

    /// Key and computer move, available only once the round is resolved.
    pub fn reveal(&self) -> Option<Reveal> {
        match self.state {
            SessionState::Resolved(_) => Some(Reveal {
                computer_move: self.opening.move_name.clone(),
                key: self.opening.key.clone(),
                tag: self.commitment.tag,
            }),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
