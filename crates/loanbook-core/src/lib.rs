//! # Loanbook Core
//!
//! Core library for Loanbook - a spreadsheet-backed ledger of library book loans.
//!
//! This crate provides the data model, storage, and analytics independent of
//! any user interface.
//!
//! ## Architecture
//!
//! - **ledger**: Loan records, the ledger collection, input validation
//! - **storage**: The `LedgerStore` trait and the `.xlsx` file backend
//! - **entry**: Appending a loan and persisting the result
//! - **aggregate**: Per-book, per-day and per-student summaries
//! - **export**: In-memory workbook for download
//!
//! Operations take the ledger explicitly and return new values; nothing is
//! held in global state.

pub mod aggregate;
pub mod entry;
pub mod error;
pub mod export;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use aggregate::{
    book_frequency, daily_borrow_counts, student_frequency, summarize, Analytics, DailyCount,
    NameCount,
};
pub use entry::add_entry;
pub use error::{LoanbookError, Result};
pub use export::{export, export_artifact, ExportArtifact, EXPORT_FILE_NAME, XLSX_MIME_TYPE};
pub use ledger::{parse_loan_date, Ledger, LoanRecord, NewLoan, COLUMNS};
pub use storage::{LedgerStore, XlsxStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default ledger file name, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "library_usage.xlsx";
