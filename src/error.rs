//! Error types for the gtemp CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gtemp operations.
///
/// Every failing run exits with code 1; the variants exist so each failure
/// path carries the right message and can be matched in tests.
#[derive(Error, Debug)]
pub enum GtempError {
    /// Invalid or missing directories, or an empty resolved temperature list.
    /// Detected before any file is written.
    #[error("{0}")]
    Config(String),

    /// One or more templates violate the naming or content contract.
    /// The itemized violation lists are printed before this is returned.
    #[error("template validation failed: {0}")]
    Validation(String),

    /// The user declined the confirmation prompt.
    #[error("export aborted by user")]
    Aborted,

    /// A file read or write failed. Fatal; no partial-output cleanup.
    #[error("{0}")]
    Io(String),
}

impl GtempError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GtempError::Config(_) => exit_codes::FAILURE,
            GtempError::Validation(_) => exit_codes::FAILURE,
            GtempError::Aborted => exit_codes::FAILURE,
            GtempError::Io(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for gtemp operations.
pub type Result<T> = std::result::Result<T, GtempError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_failing_exit_code() {
        let err = GtempError::Config("the 'output' path is not a valid directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn abort_has_failing_exit_code() {
        assert_eq!(GtempError::Aborted.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GtempError::Validation("2 template(s) violate the contract".to_string());
        assert_eq!(
            err.to_string(),
            "template validation failed: 2 template(s) violate the contract"
        );

        assert_eq!(GtempError::Aborted.to_string(), "export aborted by user");
    }
}
