//! `fix-runad` binary entry point.
//!
//! Thin wrapper around the xex-runad library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Rewrites the file
//!
//! Any failure is printed as a single `fix-runad: <cause>` line on stderr
//! and the process exits with status 1.

use std::process::ExitCode;
use xex_runad::{Cli, fix_runad};

fn main() -> ExitCode {
    let cli = Cli::from_args();

    // Logs go to stderr; quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err:#}", env!("CARGO_BIN_NAME"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    fix_runad(&cli.xex)?;
    Ok(())
}
