//! The `quill` command line tool: one subcommand per stage of the proof pipeline, from
//! building the circuit of a polynomial claim to verifying a proof file.
#![allow(clippy::upper_case_acronyms)]

/// Module for the command line arguments.
pub mod cli;

/// Module for running the subcommands.
pub mod commands;

/// Module for the console formatter.
pub mod console;

/// Module for error handling.
pub mod errors;

pub use cli::{Actions, ClaimArgs, Opt};
pub use commands::run;
pub use console::{color_enabled, Console};
pub use errors::CliError;
