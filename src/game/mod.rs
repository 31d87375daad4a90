//! Game flow.
//!
//! The session state machine and the help grid it shows on demand.

pub mod session;
pub mod table;

pub use session::{
    transition, Command, GameSession, Reveal, RoundResult, SessionState, Step, EXIT_COMMAND,
    HELP_COMMAND,
};
pub use table::OutcomeTable;
