//! rifeinterp CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, hand them to the
//! library, and exit with an appropriate status.
//! For programmatic use, prefer the library API (`rifeinterp::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}
