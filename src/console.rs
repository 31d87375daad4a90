//! Console Adapter
//!
//! Drives a [`GameSession`] over line-based text streams. Generic over
//! `BufRead` / `Write` so the whole dialogue can run against in-memory
//! buffers.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::moves::{MoveSet, MoveSetError};
use crate::core::rules::Outcome;
use crate::game::session::{GameSession, Step};
use crate::proof::commitment::HmacSha256;

/// Prompt shown before every read.
pub const PROMPT: &str = "Enter your move: ";

/// Usage text printed after a configuration error.
pub const USAGE: &str = "\
Usage: fair-rps <move1> <move2> ... <moveN>
Moves must be unique and there must be an odd number of them, at least 3.
Example: fair-rps Rock Paper Scissors";

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Move arguments failed validation.
    #[error("invalid moves: {0}")]
    InvalidMoves(#[from] MoveSetError),
    /// Reading or writing the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Round played, outcome for the user.
    Resolved(Outcome),
    /// User typed the exit command.
    Exited,
    /// Input closed before a move was played.
    Cancelled,
}

/// Validate `args`, then play one round over `input` / `output`.
///
/// Nothing is drawn from `rng` and nothing is written when validation fails.
pub fn run<S, R, I, O>(
    args: &[S],
    rng: &mut R,
    mut input: I,
    output: &mut O,
) -> Result<SessionEnd, ConsoleError>
where
    S: AsRef<str>,
    R: RngCore + CryptoRng,
    I: BufRead,
    O: Write,
{
    let moves = MoveSet::new(args.iter().map(|a| a.as_ref()))?;
    let move_count = moves.len();
    let mut session = GameSession::start(moves, rng, &HmacSha256);

    writeln!(output, "HMAC: {}", session.commitment().tag)?;
    write!(output, "{}", session.menu())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed");
            return Ok(SessionEnd::Cancelled);
        }
        // Undecodable bytes become U+FFFD and fail parsing like any other text
        let line = String::from_utf8_lossy(&buf);

        match session.handle(&line) {
            Step::Help => {
                write!(output, "{}", session.help_table())?;
            }
            Step::Invalid(text) => {
                writeln!(
                    output,
                    "Invalid input {:?}: enter a number from 0 to {} or ?",
                    text, move_count
                )?;
                write!(output, "{}", session.menu())?;
            }
            Step::Exit => {
                writeln!(output, "Goodbye!")?;
                return Ok(SessionEnd::Exited);
            }
            Step::Resolved(result) => {
                let moves = session.moves();
                writeln!(output, "Your move: {}", &moves[result.user_move])?;
                writeln!(output, "Computer move: {}", &moves[result.computer_move])?;
                writeln!(output, "{}", outcome_line(result.outcome))?;
                if let Some(reveal) = session.reveal() {
                    writeln!(output, "HMAC key: {}", reveal.key)?;
                }
                output.flush()?;
                info!(outcome = %result.outcome, "round finished");
                return Ok(SessionEnd::Resolved(result.outcome));
            }
            Step::Finished => return Ok(SessionEnd::Exited),
        }
    }
}

/// Command-line arguments as text, replacing undecodable bytes.
///
/// Lossy names still go through move validation, so a bad argument ends in
/// a configuration error rather than a panic.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You Win!",
        Outcome::Lose => "You Lose!",
        Outcome::Draw => "Draw!",
    }
}

// =============================================================================
// TESTS
// =============================================================================
