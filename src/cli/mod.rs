//! Command Line Interface (CLI) layer for rifeinterp.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It only coerces user input into
//! library types; every check lives in `rifeinterp` itself.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
