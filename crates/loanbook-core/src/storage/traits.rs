//! Ledger store trait definition.
//!
//! The `LedgerStore` trait is the seam between the loan ledger and its
//! durable copy. Every save rewrites the whole dataset; there is no
//! partial update.

use crate::error::Result;
use crate::ledger::Ledger;

/// Durable storage for a single ledger.
///
/// Implementations assume a single writer. Two sessions saving the same
/// file race and the later write wins.
pub trait LedgerStore {
    /// Load the ledger.
    ///
    /// Returns an empty ledger (four columns, no rows) when nothing has been
    /// stored yet.
    ///
    /// # Errors
    ///
    /// Returns `LoanbookError::StorageRead` if stored data exists but cannot
    /// be read or is not a ledger in the expected format.
    fn load(&self) -> Result<Ledger>;

    /// Replace the stored ledger with `ledger`.
    ///
    /// # Errors
    ///
    /// Returns `LoanbookError::StorageWrite` if the data cannot be encoded or
    /// written (disk full, permission denied, missing directory). A student
    /// or book name longer than 32,767 characters cannot be stored in one
    /// spreadsheet cell; the error names its row and column and the stored
    /// ledger is left as it was.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}
