//! Core building blocks: raw settings, the validated configuration, executable
//! lookup, and argument vector construction. These are consumed by the
//! high-level `api` module.
pub mod command;
pub mod config;
pub mod locate;
pub mod params;
