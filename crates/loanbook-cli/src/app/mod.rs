//! Application-level plumbing shared by command handlers.

mod context;

pub use context::AppContext;

use loanbook_core::LoanbookError;

use crate::constants::exit_codes;

/// Exit code for an error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LoanbookError>() {
        Some(core) if core.is_validation() => exit_codes::INVALID_INPUT,
        Some(core) if core.is_storage() => exit_codes::STORAGE_FAILED,
        _ => exit_codes::FAILURE,
    }
}

/// Suggestion printed under an error, when one helps.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<LoanbookError>() {
        Some(LoanbookError::Validation(_)) => {
            Some("Provide --student and --book (dates default to today).")
        }
        Some(LoanbookError::StorageRead(_)) => {
            Some("The ledger must be an .xlsx file whose header names all four loan columns.")
        }
        Some(LoanbookError::StorageWrite(_)) => {
            Some("Check that the ledger directory exists and is writable.")
        }
        _ => None,
    }
}
