//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Invalid user input (empty required field, bad date).
    pub const INVALID_INPUT: i32 = 4;

    /// Ledger file could not be read or written.
    pub const STORAGE_FAILED: i32 = 5;
}

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "LOANBOOK_LOG";

/// Message shown when the form is submitted with a blank required field.
pub const MISSING_FIELDS: &str = "Please enter all fields!";
