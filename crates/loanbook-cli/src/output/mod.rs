//! Output formatting helpers for the CLI.
//!
//! Structured (JSON) renderings of ledger rows, charts and export results.
//! Human-readable output lives in `ui`.

mod json;

pub use json::{analytics_json, export_json, records_json};
