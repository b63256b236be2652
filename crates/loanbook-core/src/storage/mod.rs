//! Storage layer for the loan ledger.
//!
//! The ledger lives in one spreadsheet file that is read and written
//! wholesale. `xlsx` holds both the workbook codec and the file-backed store.

mod traits;
pub mod xlsx;

pub use traits::LedgerStore;
pub use xlsx::{decode_workbook, XlsxStore, MAX_CELL_CHARS, SHEET_NAME};
