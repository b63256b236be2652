//! Entry writer: validate one loan, append it, persist the ledger.

use tracing::info;

use crate::error::Result;
use crate::ledger::{Ledger, NewLoan};
use crate::storage::LedgerStore;

/// Append `loan` to a copy of `ledger` and save the result through `store`.
///
/// Returns the new ledger, including the appended row, so the caller can
/// redisplay it without reloading. No uniqueness check is made against
/// existing rows.
///
/// # Errors
///
/// - `LoanbookError::Validation` if the student or book name is blank.
///   Nothing is written.
/// - `LoanbookError::StorageWrite` if the save fails. `ledger` is left as it
///   was; the durable copy may be missing or stale.
pub fn add_entry<S>(store: &S, ledger: &Ledger, loan: NewLoan) -> Result<Ledger>
where
    S: LedgerStore + ?Sized,
{
    loan.validate()?;

    let mut updated = ledger.clone();
    updated.push(loan.into_record());
    store.save(&updated)?;

    info!(rows = updated.len(), "Appended loan record");
    Ok(updated)
}
