//! Exit code constants for the gtemp CLI.
//!
//! The tool exposes exactly two outcomes to the shell:
//! - 0: all requested G-code files were rendered
//! - 1: user abort, validation failure, configuration error, or I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failing run: user abort, validation failure, bad configuration, or I/O error.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
