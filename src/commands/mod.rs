//! Command implementations for qnn-options.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod build;
mod check;
mod keys;

use crate::cli::Command;
use qnn_options::Result;

/// Dispatch a command to its implementation.
///
/// Each handler renders its output as a string; printing happens here so
/// the handlers stay testable.
pub fn dispatch(command: Command) -> Result<()> {
    let output = match command {
        Command::Build(args) => build::cmd_build(&args)?,
        Command::Check(args) => check::cmd_check(&args)?,
        Command::Keys => keys::cmd_keys(),
    };
    println!("{}", output);
    Ok(())
}
