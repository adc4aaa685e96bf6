//! Gtemp: generate an array of G-code files with different nozzle temperatures.
//!
//! This is the main entry point for the `gtemp` CLI. It parses arguments,
//! runs the generate pipeline, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod confirm;
pub mod error;
pub mod exit_codes;
pub mod presets;
pub mod render;
pub mod template;
pub mod validate;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
