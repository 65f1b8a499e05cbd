//! scicalc command-line front end
//!
//! Drives a [`scicalc::CalculatorEngine`] from keypad tokens given on the
//! command line, read from a script file, or typed into a REPL.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod session;

pub use commands::{
    AngleArg, Cli, ColorArg, Commands, EvalArgs, OrderArg, OutputFormat, ReplArgs, RunArgs,
};
pub use config::{CliConfig, ColorChoice, HistoryOrder, Verbosity};
pub use error::{CliError, CliResult};
pub use session::{repl_help, Session};
