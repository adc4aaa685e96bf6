//! Interactive confirmation gate.
//!
//! Rendering writes a batch of files, so the orchestrator requires an explicit
//! affirmative answer before any mutation. The prompt is behind a trait so the
//! orchestrator's abort/proceed decision is testable without a terminal.

use crate::error::{GtempError, Result};
use std::io::{self, BufRead, Write};

/// Capability for asking the operator a yes/no question.
pub trait Confirmation {
    /// Print `prompt` and block until an answer arrives. Returns true if the
    /// answer is affirmative.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Answers counted as "yes", compared after lowercasing with the trailing
/// newline stripped. Pressing enter (empty answer) or a single space proceeds.
const AFFIRMATIVE_ANSWERS: [&str; 4] = ["", " ", "y", "yes"];

/// Whether a raw answer line counts as affirmative.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.strip_suffix('\n').unwrap_or(answer);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    AFFIRMATIVE_ANSWERS.contains(&answer.to_lowercase().as_str())
}

/// Confirmation backed by stdin/stdout. Blocks indefinitely on the read;
/// single-operator usage has no timeout.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| GtempError::Io(format!("failed to flush stdout: {}", e)))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| GtempError::Io(format!("failed to read confirmation: {}", e)))?;

        Ok(is_affirmative(&answer))
    }
}
