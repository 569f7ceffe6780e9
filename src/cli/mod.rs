//! Terminal rendering surface for the ledger and its entry form.

pub mod commands;
pub mod core;
pub mod output;
pub mod render;
mod shell;

pub use self::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
pub use shell::run_cli;
