//! Command implementations for gtemp.
//!
//! The CLI has a single operation, so dispatch just wires the parsed
//! arguments to the generate pipeline with a real stdin confirmation.

mod generate;

use crate::cli::Cli;
use crate::confirm::StdinConfirmation;
use crate::error::Result;

/// Dispatch the parsed CLI to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    generate::cmd_generate(&cli, &mut StdinConfirmation)
}
