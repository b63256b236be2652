//! Error types for Loanbook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Loanbook operations.
pub type Result<T> = std::result::Result<T, LoanbookError>;

/// Core error type for Loanbook operations.
#[derive(Debug, Error)]
pub enum LoanbookError {
    /// A required field was missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// The ledger file exists but could not be read or parsed
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// The ledger file could not be written
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// The export workbook could not be produced
    #[error("Export error: {0}")]
    Export(String),
}

impl LoanbookError {
    /// True for errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for errors raised while touching durable storage.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }
}
