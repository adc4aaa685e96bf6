//! Template contract validation.
//!
//! Two independent checks run over the full candidate set so every problem is
//! reported in one pass (no short-circuit on the first failure):
//!
//! 1. The file name must contain the placeholder token `##NOZZLETEMP##`.
//! 2. The file content must contain the literal text `M104 ##NOZZLETEMP##`.

use crate::error::Result;
use crate::template::{NOZZLE_TEMP_COMMAND, NOZZLE_TEMP_PLACEHOLDER, TemplateCandidate};

/// Outcome of validating a set of template candidates.
///
/// Carries both violation lists even when only one is non-empty, so callers
/// can print a structured, itemized report. Lists preserve candidate input
/// order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Names of templates whose file name lacks the placeholder token.
    pub filename_violations: Vec<String>,
    /// Names of templates whose content lacks the nozzle temperature command.
    pub content_violations: Vec<String>,
}

impl ValidationReport {
    /// True only if both violation lists are empty.
    pub fn is_ok(&self) -> bool {
        self.filename_violations.is_empty() && self.content_violations.is_empty()
    }
}

/// The exact content substring every template must contain.
pub fn required_content_text() -> String {
    format!("{} {}", NOZZLE_TEMP_COMMAND, NOZZLE_TEMP_PLACEHOLDER)
}

/// Validate all candidates against the naming and content contracts.
///
/// Reads each candidate's content once; a read failure is fatal and
/// propagates as an I/O error rather than a contract violation.
pub fn validate(candidates: &[TemplateCandidate]) -> Result<ValidationReport> {
    let required_text = required_content_text();
    let mut report = ValidationReport::default();

    for candidate in candidates {
        if !candidate.file_name().contains(NOZZLE_TEMP_PLACEHOLDER) {
            report.filename_violations.push(candidate.file_name().to_string());
        }
    }

    for candidate in candidates {
        let content = candidate.read_content()?;
        if !content.contains(&required_text) {
            report.content_violations.push(candidate.file_name().to_string());
        }
    }

    Ok(report)
}
