//! Fair RPS
//!
//! Interactive rock-paper-scissors with an HMAC-committed computer move.
//! Game output goes to stdout; logs and errors go to stderr.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use rand::rngs::OsRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fair_rps::{
    console::{self, ConsoleError, USAGE},
    VERSION,
};

fn main() -> ExitCode {
    // Initialize logging
    let level = if cfg!(feature = "debug-tracing") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Fair RPS v{}", VERSION);

    let args = console::collect_args(std::env::args_os().skip(1));
    match play(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run one session on the process's standard streams.
fn play(args: &[String]) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match console::run(args, &mut OsRng, stdin.lock(), &mut stdout.lock()) {
        Ok(end) => {
            info!(?end, "session ended");
            Ok(ExitCode::SUCCESS)
        }
        Err(ConsoleError::InvalidMoves(err)) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err).context("session aborted"),
    }
}
